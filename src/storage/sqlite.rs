//! SQLite store implementation.
//!
//! `SqliteStore` owns exactly one connection for its whole lifetime.
//! The connection closes when the store is dropped.

use crate::error::{Error, Result, WriteOp};
use crate::model::ToDoItem;
use crate::storage::Store;
use crate::storage::schema::apply_schema;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// SQLite-backed to-do store.
#[derive(Debug)]
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (creating if absent) the database file at `path` and make sure
    /// the items table exists.
    ///
    /// Missing parent directories are created.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StorageUnavailable`] if the directory cannot be
    /// created, the file cannot be opened, or the schema cannot be applied.
    pub fn initialize(path: &Path) -> Result<Self> {
        Self::open_with_timeout(path, None)
    }

    /// Alias for [`SqliteStore::initialize`].
    ///
    /// # Errors
    ///
    /// See [`SqliteStore::initialize`].
    pub fn open(path: &Path) -> Result<Self> {
        Self::initialize(path)
    }

    /// Open a database with an optional busy timeout.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StorageUnavailable`] on any setup failure.
    pub fn open_with_timeout(path: &Path, timeout_ms: Option<u64>) -> Result<Self> {
        let unavailable = |source: Box<dyn std::error::Error + Send + Sync>| {
            Error::StorageUnavailable {
                path: path.to_path_buf(),
                source,
            }
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| unavailable(Box::new(e)))?;
        }

        let conn = Connection::open(path).map_err(|e| unavailable(Box::new(e)))?;

        // Default 5 second timeout
        let timeout = timeout_ms.map_or(Duration::from_secs(5), Duration::from_millis);
        conn.busy_timeout(timeout)
            .map_err(|e| unavailable(Box::new(e)))?;

        apply_schema(&conn).map_err(|e| unavailable(Box::new(e)))?;
        debug!(path = %path.display(), "Opened to-do database");

        Ok(Self { conn })
    }

    /// Open an in-memory database (for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established.
    pub fn open_memory() -> Result<Self> {
        let memory = PathBuf::from(":memory:");
        let conn = Connection::open_in_memory().map_err(|e| Error::StorageUnavailable {
            path: memory.clone(),
            source: Box::new(e),
        })?;
        apply_schema(&conn).map_err(|e| Error::StorageUnavailable {
            path: memory,
            source: Box::new(e),
        })?;
        Ok(Self { conn })
    }

    #[cfg(test)]
    pub(crate) fn conn(&self) -> &Connection {
        &self.conn
    }
}

impl Store for SqliteStore {
    fn list_all(&self) -> Result<Vec<ToDoItem>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, todoitem FROM todolist ORDER BY id ASC")
            .map_err(Error::StorageRead)?;

        let rows = stmt
            .query_map([], |row| {
                Ok(ToDoItem {
                    id: row.get(0)?,
                    text: row.get(1)?,
                })
            })
            .map_err(Error::StorageRead)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::StorageRead)?;

        let total = rows.len();
        let items: Vec<ToDoItem> = rows.into_iter().filter(|i| !i.text.is_empty()).collect();
        if items.len() != total {
            debug!(skipped = total - items.len(), "Skipped rows with empty text");
        }

        Ok(items)
    }

    fn insert(&mut self, text: &str) -> Result<i64> {
        self.conn
            .execute(
                "INSERT INTO todolist (todoitem) VALUES (?1)",
                rusqlite::params![text],
            )
            .map_err(|source| Error::StorageWrite {
                op: WriteOp::Insert,
                source,
            })?;

        let id = self.conn.last_insert_rowid();
        debug!(id, "Inserted to-do item");
        Ok(id)
    }

    fn delete(&mut self, id: i64) -> Result<bool> {
        let rows = self
            .conn
            .execute("DELETE FROM todolist WHERE id = ?1", rusqlite::params![id])
            .map_err(|source| Error::StorageWrite {
                op: WriteOp::Delete,
                source,
            })?;

        debug!(id, deleted = rows > 0, "Deleted to-do item");
        Ok(rows > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn ids(store: &SqliteStore) -> Vec<i64> {
        store.list_all().unwrap().iter().map(|i| i.id).collect()
    }

    #[test]
    fn test_open_memory() {
        let store = SqliteStore::open_memory();
        assert!(store.is_ok());
    }

    #[test]
    fn test_empty_table_lists_nothing() {
        let store = SqliteStore::open_memory().unwrap();
        assert!(store.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_insert_then_list() {
        let mut store = SqliteStore::open_memory().unwrap();

        let id = store.insert("Buy milk").unwrap();
        assert!(id > 0);

        let items = store.list_all().unwrap();
        assert_eq!(items, vec![ToDoItem::new(id, "Buy milk")]);
    }

    #[test]
    fn test_delete_keeps_relative_order() {
        let mut store = SqliteStore::open_memory().unwrap();
        for text in ["one", "two", "three"] {
            store.insert(text).unwrap();
        }
        assert_eq!(ids(&store), vec![1, 2, 3]);

        assert!(store.delete(2).unwrap());
        assert_eq!(ids(&store), vec![1, 3]);
    }

    #[test]
    fn test_delete_missing_id_is_noop() {
        let mut store = SqliteStore::open_memory().unwrap();
        store.insert("only").unwrap();

        assert!(!store.delete(42).unwrap());
        assert_eq!(ids(&store), vec![1]);
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut store = SqliteStore::open_memory().unwrap();
        store.insert("a").unwrap();
        let second = store.insert("b").unwrap();
        store.delete(second).unwrap();

        let third = store.insert("c").unwrap();
        assert!(third > second);
    }

    #[test]
    fn test_list_skips_empty_text() {
        let mut store = SqliteStore::open_memory().unwrap();
        store.insert("visible").unwrap();
        store.insert("").unwrap();

        let items = store.list_all().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].text, "visible");
    }

    #[test]
    fn test_delete_reports_hidden_row() {
        let mut store = SqliteStore::open_memory().unwrap();
        let hidden = store.insert("").unwrap();

        assert!(store.delete(hidden).unwrap());
        assert!(!store.delete(hidden).unwrap());
    }

    #[test]
    fn test_read_failure_is_storage_read() {
        let store = SqliteStore::open_memory().unwrap();
        store.conn().execute("DROP TABLE todolist", []).unwrap();

        let err = store.list_all().unwrap_err();
        assert!(matches!(err, Error::StorageRead(_)));
    }

    #[test]
    fn test_write_failure_is_storage_write() {
        let mut store = SqliteStore::open_memory().unwrap();
        store.conn().execute("DROP TABLE todolist", []).unwrap();

        let err = store.insert("lost").unwrap_err();
        assert!(matches!(
            err,
            Error::StorageWrite {
                op: WriteOp::Insert,
                ..
            }
        ));

        let err = store.delete(1).unwrap_err();
        assert!(matches!(
            err,
            Error::StorageWrite {
                op: WriteOp::Delete,
                ..
            }
        ));
    }

    #[test]
    fn test_reopen_keeps_rows() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("db.sqlite3");

        {
            let mut store = SqliteStore::initialize(&path).unwrap();
            store.insert("survives restart").unwrap();
        }

        let store = SqliteStore::initialize(&path).unwrap();
        let items = store.list_all().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].text, "survives restart");
    }

    #[test]
    fn test_unopenable_path_is_unavailable() {
        let dir = TempDir::new().unwrap();
        // A directory cannot be opened as a database file
        let err = SqliteStore::initialize(dir.path()).unwrap_err();
        assert!(matches!(err, Error::StorageUnavailable { .. }));
    }
}
