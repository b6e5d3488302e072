//! To-do item model.

use serde::{Deserialize, Serialize};

/// A persisted to-do entry.
///
/// The `id` is assigned by the store on insert and is never reused,
/// even after the row is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToDoItem {
    /// Store-assigned identifier (auto-increment, starts at 1)
    pub id: i64,

    /// Item text as submitted
    pub text: String,
}

impl ToDoItem {
    pub fn new(id: i64, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }
}

/// A row as rendered by the presentation layer.
///
/// `checked` lives only in memory. Every reload rebuilds rows from
/// storage with `checked` cleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub id: i64,
    pub text: String,
    pub checked: bool,
}

impl Row {
    /// Flip the checkmark and return the new state.
    pub fn toggle(&mut self) -> bool {
        self.checked = !self.checked;
        self.checked
    }
}

impl From<ToDoItem> for Row {
    fn from(item: ToDoItem) -> Self {
        Self {
            id: item.id,
            text: item.text,
            checked: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_from_item_starts_unchecked() {
        let row = Row::from(ToDoItem::new(7, "Buy milk"));
        assert_eq!(row.id, 7);
        assert_eq!(row.text, "Buy milk");
        assert!(!row.checked);
    }

    #[test]
    fn test_row_toggle_round_trips() {
        let mut row = Row::from(ToDoItem::new(1, "a"));
        assert!(row.toggle());
        assert!(!row.toggle());
    }

    #[test]
    fn test_checked_is_not_part_of_item_json() {
        let json = serde_json::to_value(ToDoItem::new(3, "x")).unwrap();
        assert_eq!(json, serde_json::json!({"id": 3, "text": "x"}));
    }
}
