//! Single-screen to-do list backed by a local SQLite database.
//!
//! # Architecture
//!
//! - [`storage`] - `Store` trait, SQLite store and in-memory substitute
//! - [`controller`] - In-memory row list mediating events and storage
//! - [`ui`] - Presentation boundary: events, alerts, row rendering
//! - [`cli`] - Command-line interface using clap
//! - [`model`] - Data types (`ToDoItem`, `Row`)
//! - [`config`] - Database path resolution
//! - [`error`] - Error types and handling

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod storage;
pub mod ui;

pub use controller::ListController;
pub use error::{Error, Result};

/// Escape a value for CSV output (wrap in quotes if it contains commas, quotes, or newlines).
#[must_use]
pub fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
