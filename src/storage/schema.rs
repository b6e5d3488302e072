//! Database schema definitions.
//!
//! The layout is a single `todolist` table plus version tracking.
//! Every statement is `IF NOT EXISTS` / `OR IGNORE`, so setup runs on
//! every open and a restart never duplicates the table or drops rows.

use rusqlite::{Connection, Result};
use tracing::info;

/// Current schema version for migration tracking.
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// Name of the items table.
pub const ITEMS_TABLE: &str = "todolist";

/// The complete SQL schema for the to-do database.
pub const SCHEMA_SQL: &str = r"
CREATE TABLE IF NOT EXISTS schema_migrations (
    version TEXT PRIMARY KEY,
    applied_at INTEGER NOT NULL
);

-- AUTOINCREMENT keeps ids from being reused after a delete
CREATE TABLE IF NOT EXISTS todolist (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    todoitem TEXT NOT NULL
);
";

/// Apply the schema to a connection.
///
/// # Errors
///
/// Returns an error if a pragma or DDL statement fails.
pub fn apply_schema(conn: &Connection) -> Result<()> {
    // WAL is refused for in-memory databases; the pragma just reports "memory"
    conn.pragma_update(None, "journal_mode", "WAL")?;
    conn.pragma_update(None, "foreign_keys", "ON")?;
    conn.pragma_update(None, "synchronous", "NORMAL")?;

    conn.execute_batch(SCHEMA_SQL)?;

    let inserted = conn.execute(
        "INSERT OR IGNORE INTO schema_migrations (version, applied_at) VALUES (?1, ?2)",
        rusqlite::params![
            format!("v{CURRENT_SCHEMA_VERSION}"),
            chrono::Utc::now().timestamp_millis()
        ],
    )?;
    if inserted > 0 {
        info!(version = CURRENT_SCHEMA_VERSION, "Created to-do schema");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_names(conn: &Connection) -> Vec<String> {
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<Result<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn test_apply_schema() {
        let conn = Connection::open_in_memory().unwrap();
        apply_schema(&conn).expect("Failed to apply schema");

        let tables = table_names(&conn);
        assert!(tables.contains(&ITEMS_TABLE.to_string()));
        assert!(tables.contains(&"schema_migrations".to_string()));
    }

    #[test]
    fn test_schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        apply_schema(&conn).expect("First apply failed");
        conn.execute("INSERT INTO todolist (todoitem) VALUES ('keep me')", [])
            .unwrap();

        apply_schema(&conn).expect("Second apply failed");

        let todolists = table_names(&conn)
            .into_iter()
            .filter(|t| t == ITEMS_TABLE)
            .count();
        assert_eq!(todolists, 1);

        let rows: i64 = conn
            .query_row("SELECT COUNT(*) FROM todolist", [], |row| row.get(0))
            .unwrap();
        assert_eq!(rows, 1);

        let versions: i64 = conn
            .query_row("SELECT COUNT(*) FROM schema_migrations", [], |row| row.get(0))
            .unwrap();
        assert_eq!(versions, 1);
    }

    #[test]
    fn test_text_is_required() {
        let conn = Connection::open_in_memory().unwrap();
        apply_schema(&conn).unwrap();

        let result = conn.execute("INSERT INTO todolist (todoitem) VALUES (NULL)", []);
        assert!(result.is_err());
    }

    #[test]
    fn test_ids_start_at_one() {
        let conn = Connection::open_in_memory().unwrap();
        apply_schema(&conn).unwrap();

        conn.execute("INSERT INTO todolist (todoitem) VALUES ('first')", [])
            .unwrap();
        assert_eq!(conn.last_insert_rowid(), 1);
    }
}
