//! Data models for the to-do list.
//!
//! - `ToDoItem` - a persisted row
//! - `Row` - a rendered row with its transient checkmark

pub mod item;

pub use item::{Row, ToDoItem};
