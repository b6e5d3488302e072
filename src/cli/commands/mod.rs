//! Command implementations.

pub mod completions;
pub mod init;
pub mod items;
pub mod shell;
pub mod version;

use crate::config::resolve_db_path;
use crate::error::{Error, Result};
use crate::storage::SqliteStore;
use std::path::PathBuf;

/// Resolve the database path and open the store, creating it if absent.
///
/// # Errors
///
/// Returns [`Error::NoDataDirectory`] if no path can be resolved, or
/// [`Error::StorageUnavailable`] if the database cannot be opened.
pub fn open_store(db_path: Option<&PathBuf>) -> Result<SqliteStore> {
    let db_path = resolve_db_path(db_path.map(PathBuf::as_path)).ok_or(Error::NoDataDirectory)?;
    SqliteStore::initialize(&db_path)
}
