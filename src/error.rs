//! Error types for the to-do list.
//!
//! Provides structured error handling with:
//! - Machine-readable error codes (`ErrorCode`)
//! - Category-based exit codes (2=storage, 3=not_found, 4=validation, etc.)
//! - User-facing alert messages for the presentation layer
//! - Structured JSON output for piped / non-TTY consumers

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for to-do list operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Title shown on every error alert.
pub const ALERT_TITLE: &str = "Something went wrong";

// ── Error Code ────────────────────────────────────────────────

/// Machine-readable error codes grouped by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Storage (exit 2)
    StorageUnavailable,
    StorageReadError,
    StorageWriteError,

    // Not Found (exit 3)
    RowOutOfRange,

    // Validation (exit 4)
    EmptyText,
    InvalidArgument,

    // I/O (exit 8)
    IoError,
    JsonError,
}

impl ErrorCode {
    /// Machine-readable SCREAMING_SNAKE code string.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::StorageUnavailable => "STORAGE_UNAVAILABLE",
            Self::StorageReadError => "STORAGE_READ_ERROR",
            Self::StorageWriteError => "STORAGE_WRITE_ERROR",
            Self::RowOutOfRange => "ROW_OUT_OF_RANGE",
            Self::EmptyText => "EMPTY_TEXT",
            Self::InvalidArgument => "INVALID_ARGUMENT",
            Self::IoError => "IO_ERROR",
            Self::JsonError => "JSON_ERROR",
        }
    }

    /// Category-based exit code.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::StorageUnavailable | Self::StorageReadError | Self::StorageWriteError => 2,
            Self::RowOutOfRange => 3,
            Self::EmptyText | Self::InvalidArgument => 4,
            Self::IoError | Self::JsonError => 8,
        }
    }

    /// Whether the user may simply try the action again.
    ///
    /// Read and write failures are per-operation and non-fatal. An
    /// unavailable store is fatal for the session.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::StorageReadError
                | Self::StorageWriteError
                | Self::EmptyText
                | Self::InvalidArgument
                | Self::RowOutOfRange
        )
    }
}

/// Which write a `StorageWrite` error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOp {
    Insert,
    Delete,
}

impl std::fmt::Display for WriteOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Insert => f.write_str("insert"),
            Self::Delete => f.write_str("delete"),
        }
    }
}

// ── Error Enum ────────────────────────────────────────────────

/// Errors that can occur in to-do list operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Could not open database at {}: {source}", .path.display())]
    StorageUnavailable {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Could not resolve a data directory for the database")]
    NoDataDirectory,

    #[error("Could not read items: {0}")]
    StorageRead(#[source] rusqlite::Error),

    #[error("Could not {op} item: {source}")]
    StorageWrite {
        op: WriteOp,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Item text is empty")]
    EmptyText,

    #[error("Row {} is out of range (list has {len} items)", .index + 1)]
    RowOutOfRange { index: usize, len: usize },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Map this error to its structured `ErrorCode`.
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::StorageUnavailable { .. } | Self::NoDataDirectory => {
                ErrorCode::StorageUnavailable
            }
            Self::StorageRead(_) => ErrorCode::StorageReadError,
            Self::StorageWrite { .. } => ErrorCode::StorageWriteError,
            Self::RowOutOfRange { .. } => ErrorCode::RowOutOfRange,
            Self::EmptyText => ErrorCode::EmptyText,
            Self::InvalidArgument(_) => ErrorCode::InvalidArgument,
            Self::Io(_) => ErrorCode::IoError,
            Self::Json(_) => ErrorCode::JsonError,
        }
    }

    /// Category-based exit code, delegating to the `ErrorCode`.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        self.error_code().exit_code()
    }

    /// Short message for the blocking alert shown to the user.
    #[must_use]
    pub fn alert_message(&self) -> String {
        match self {
            Self::StorageUnavailable { .. } | Self::NoDataDirectory => {
                "Could not create database.".to_string()
            }
            Self::StorageRead(_) => "Could not load your items, try again".to_string(),
            Self::StorageWrite {
                op: WriteOp::Delete,
                ..
            } => "Could not delete this item, try again".to_string(),
            Self::StorageWrite {
                op: WriteOp::Insert,
                ..
            } => "Could not add this item, try again".to_string(),
            Self::RowOutOfRange { .. } => "That item no longer exists".to_string(),
            other => other.to_string(),
        }
    }

    /// Context-aware recovery hint.
    ///
    /// Returns `None` if no actionable suggestion exists.
    #[must_use]
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::StorageUnavailable { path, .. } => Some(format!(
                "Check that {} is writable, or pass --db <PATH>",
                path.display()
            )),
            Self::NoDataDirectory => {
                Some("Pass --db <PATH> or set TODO_DB to choose a database file".to_string())
            }
            Self::EmptyText => Some("Type some text before submitting".to_string()),
            Self::RowOutOfRange { len, .. } if *len == 0 => {
                Some("The list is empty. Add an item first.".to_string())
            }
            Self::RowOutOfRange { len, .. } => {
                Some(format!("Pick a row between 1 and {len}. Use `todo list` to see rows."))
            }
            Self::StorageRead(_)
            | Self::StorageWrite { .. }
            | Self::InvalidArgument(_)
            | Self::Io(_)
            | Self::Json(_) => None,
        }
    }

    /// Structured JSON representation for machine consumption.
    #[must_use]
    pub fn to_structured_json(&self) -> serde_json::Value {
        let code = self.error_code();
        let mut obj = serde_json::json!({
            "error": {
                "code": code.as_str(),
                "message": self.to_string(),
                "retryable": code.is_retryable(),
                "exit_code": code.exit_code(),
            }
        });

        if let Some(hint) = self.hint() {
            obj["error"]["hint"] = serde_json::Value::String(hint);
        }

        obj
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_errors_share_exit_code() {
        let read = Error::StorageRead(rusqlite::Error::InvalidQuery);
        let write = Error::StorageWrite {
            op: WriteOp::Insert,
            source: rusqlite::Error::InvalidQuery,
        };
        assert_eq!(read.exit_code(), 2);
        assert_eq!(write.exit_code(), 2);
        assert_eq!(Error::NoDataDirectory.exit_code(), 2);
    }

    #[test]
    fn test_unavailable_is_not_retryable() {
        assert!(!ErrorCode::StorageUnavailable.is_retryable());
        assert!(ErrorCode::StorageWriteError.is_retryable());
    }

    #[test]
    fn test_alert_message_for_missing_database() {
        assert_eq!(
            Error::NoDataDirectory.alert_message(),
            "Could not create database."
        );
    }

    #[test]
    fn test_alert_message_for_failed_delete() {
        let err = Error::StorageWrite {
            op: WriteOp::Delete,
            source: rusqlite::Error::InvalidQuery,
        };
        assert_eq!(err.alert_message(), "Could not delete this item, try again");
        assert!(err.to_string().starts_with("Could not delete item"));
    }

    #[test]
    fn test_structured_json_includes_hint() {
        let err = Error::RowOutOfRange { index: 4, len: 2 };
        let json = err.to_structured_json();
        assert_eq!(json["error"]["code"], "ROW_OUT_OF_RANGE");
        assert_eq!(json["error"]["exit_code"], 3);
        assert!(json["error"]["hint"].as_str().unwrap().contains("1 and 2"));
    }

    #[test]
    fn test_row_out_of_range_message_is_one_based() {
        let err = Error::RowOutOfRange { index: 0, len: 0 };
        assert_eq!(err.to_string(), "Row 1 is out of range (list has 0 items)");
        assert_eq!(err.hint().unwrap(), "The list is empty. Add an item first.");
    }

    #[test]
    fn test_structured_json_without_hint() {
        let err = Error::InvalidArgument("bad".to_string());
        let json = err.to_structured_json();
        assert!(json["error"].get("hint").is_none());
    }
}
