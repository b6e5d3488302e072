//! Vec-backed store.
//!
//! Mirrors the SQLite store's observable behavior (insertion order,
//! never-reused ids, empty text hidden from `list_all`) without touching
//! the filesystem.

use crate::error::Result;
use crate::model::ToDoItem;
use crate::storage::Store;

#[derive(Debug, Clone)]
pub struct MemoryStore {
    items: Vec<ToDoItem>,
    next_id: i64,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored rows, including ones with empty text.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.items.len()
    }
}

impl Store for MemoryStore {
    fn list_all(&self) -> Result<Vec<ToDoItem>> {
        Ok(self
            .items
            .iter()
            .filter(|i| !i.text.is_empty())
            .cloned()
            .collect())
    }

    fn insert(&mut self, text: &str) -> Result<i64> {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(ToDoItem::new(id, text));
        Ok(id)
    }

    fn delete(&mut self, id: i64) -> Result<bool> {
        let before = self.items.len();
        self.items.retain(|i| i.id != id);
        Ok(self.items.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_sqlite_id_sequence() {
        let mut store = MemoryStore::new();
        assert_eq!(store.insert("a").unwrap(), 1);
        assert_eq!(store.insert("b").unwrap(), 2);
        assert!(store.delete(2).unwrap());
        assert!(!store.delete(2).unwrap());
        assert_eq!(store.insert("c").unwrap(), 3);

        let ids: Vec<i64> = store.list_all().unwrap().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_empty_text_is_stored_but_hidden() {
        let mut store = MemoryStore::new();
        store.insert("").unwrap();
        assert_eq!(store.row_count(), 1);
        assert!(store.list_all().unwrap().is_empty());
    }
}
