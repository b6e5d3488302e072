//! One-shot item commands: add, list, delete.
//!
//! Each command goes through the list controller just like the
//! interactive shell, so every mutation is followed by a full reload.

use crate::cli::DeleteArgs;
use crate::cli::commands::open_store;
use crate::controller::ListController;
use crate::error::Result;
use crate::model::Row;
use crate::storage::SqliteStore;
use crate::ui::{parse_row_number, render_rows};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Serialize)]
struct AddOutput<'a> {
    id: i64,
    text: &'a str,
    count: usize,
}

#[derive(Serialize)]
struct ListOutput<'a> {
    items: &'a [Row],
    count: usize,
}

#[derive(Serialize)]
struct DeleteOutput {
    id: i64,
    deleted: bool,
    count: usize,
}

fn open_controller(db_path: Option<&PathBuf>) -> Result<ListController<SqliteStore>> {
    ListController::open(open_store(db_path)?)
}

/// Add an item.
///
/// # Errors
///
/// Returns an error if the text is blank or storage fails.
pub fn add(text: &str, db_path: Option<&PathBuf>, json: bool, quiet: bool) -> Result<()> {
    let mut controller = open_controller(db_path)?;
    let id = controller.submit_text(text)?;

    if json {
        let output = AddOutput {
            id,
            text,
            count: controller.len(),
        };
        println!("{}", serde_json::to_string(&output)?);
    } else if !quiet {
        println!("Added #{id}: {text}");
    }

    Ok(())
}

/// List all items.
///
/// # Errors
///
/// Returns an error if the store cannot be opened or read.
pub fn list(db_path: Option<&PathBuf>, json: bool, csv: bool) -> Result<()> {
    let controller = open_controller(db_path)?;
    let rows = controller.rows();

    if csv {
        println!("row,id,text");
        for (i, row) in rows.iter().enumerate() {
            println!("{},{},{}", i + 1, row.id, crate::csv_escape(&row.text));
        }
    } else if json {
        let output = ListOutput {
            items: rows,
            count: rows.len(),
        };
        println!("{}", serde_json::to_string(&output)?);
    } else {
        render_rows(rows, &mut std::io::stdout().lock())?;
    }

    Ok(())
}

/// Delete an item by 1-based row number or by id.
///
/// Deleting an id that does not exist is not an error.
///
/// # Errors
///
/// Returns an error if the row number is invalid or out of range, or if
/// storage fails.
pub fn delete(args: &DeleteArgs, db_path: Option<&PathBuf>, json: bool, quiet: bool) -> Result<()> {
    let mut controller = open_controller(db_path)?;

    let (id, deleted) = if let Some(id) = args.id {
        (id, controller.delete_item(id)?)
    } else {
        let row = args.row.as_deref().unwrap_or_default();
        (controller.delete_row(parse_row_number(row)?)?, true)
    };

    if json {
        let output = DeleteOutput {
            id,
            deleted,
            count: controller.len(),
        };
        println!("{}", serde_json::to_string(&output)?);
    } else if !quiet {
        if deleted {
            println!("Deleted #{id}");
        } else {
            println!("No item #{id}");
        }
    }

    Ok(())
}
