//! Storage layer for the to-do list.
//!
//! The list controller talks to storage only through the [`Store`] trait,
//! so the SQLite backend can be swapped for [`MemoryStore`] in tests.
//!
//! # Submodules
//!
//! - [`schema`] - Table definitions and idempotent setup
//! - [`sqlite`] - SQLite-backed store
//! - [`memory`] - Vec-backed substitute store

pub mod memory;
pub mod schema;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::error::Result;
use crate::model::ToDoItem;

/// Durable persistence of to-do items.
///
/// Each call is atomic on its own. Nothing spans multiple calls.
pub trait Store {
    /// Every item in storage order, skipping items with empty text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StorageRead`](crate::Error::StorageRead) if the
    /// underlying read fails.
    fn list_all(&self) -> Result<Vec<ToDoItem>>;

    /// Insert a new item and return its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StorageWrite`](crate::Error::StorageWrite) if the
    /// row could not be written. No row is created in that case.
    fn insert(&mut self, text: &str) -> Result<i64>;

    /// Remove the item with `id`. Absent ids are a no-op.
    ///
    /// Returns whether a row was removed. Rows with empty text count even
    /// though `list_all` never shows them.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StorageWrite`](crate::Error::StorageWrite) if the
    /// delete fails.
    fn delete(&mut self, id: i64) -> Result<bool>;
}
