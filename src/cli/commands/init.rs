//! Database setup and location commands.
//!
//! `init` opens the database, which creates the file and the items table
//! when missing. Running it again is harmless: the schema is idempotent
//! and existing rows are kept.

use crate::cli::commands::open_store;
use crate::config::resolve_db_path;
use crate::error::{Error, Result};
use crate::storage::Store;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Serialize)]
struct InitOutput<'a> {
    database: &'a Path,
    created: bool,
    items: usize,
}

#[derive(Serialize)]
struct PathOutput<'a> {
    database: &'a Path,
    exists: bool,
}

/// Execute the init command.
///
/// # Errors
///
/// Returns an error if the database cannot be created or read.
pub fn execute(db_path: Option<&PathBuf>, json: bool, quiet: bool) -> Result<()> {
    let path = resolve_path(db_path)?;
    let created = !path.exists();

    let store = open_store(Some(&path))?;
    let items = store.list_all()?.len();

    if json {
        let output = InitOutput {
            database: &path,
            created,
            items,
        };
        println!("{}", serde_json::to_string(&output)?);
    } else if !quiet {
        if created {
            println!("Created to-do database");
        } else {
            println!("To-do database ready ({items} items)");
        }
        println!("  Database: {}", path.display());
    }

    Ok(())
}

/// Print the resolved database path without opening it.
///
/// # Errors
///
/// Returns [`Error::NoDataDirectory`] if no path can be resolved.
pub fn execute_path(db_path: Option<&PathBuf>, json: bool) -> Result<()> {
    let path = resolve_path(db_path)?;

    if json {
        let output = PathOutput {
            database: &path,
            exists: path.exists(),
        };
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("{}", path.display());
    }

    Ok(())
}

fn resolve_path(db_path: Option<&PathBuf>) -> Result<PathBuf> {
    resolve_db_path(db_path.map(PathBuf::as_path)).ok_or(Error::NoDataDirectory)
}
