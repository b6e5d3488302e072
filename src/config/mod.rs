//! Configuration management.
//!
//! Resolves where the database file lives. The default is `db.sqlite3`
//! inside the platform's per-application data directory.

use std::path::{Path, PathBuf};

/// Database file name inside the data directory.
pub const DB_FILE_NAME: &str = "db.sqlite3";

/// Environment variable that overrides the database path.
pub const DB_ENV: &str = "TODO_DB";

/// Environment variable that switches to the isolated test database.
pub const TEST_DB_ENV: &str = "TODO_TEST_DB";

/// Get the per-application data directory.
///
/// Linux: `~/.local/share/todo-list`, macOS:
/// `~/Library/Application Support/todo-list`, Windows: `%APPDATA%\todo-list\data`.
#[must_use]
pub fn data_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "todo-list").map(|d| d.data_dir().to_path_buf())
}

/// Check if test mode is enabled.
///
/// Test mode is enabled by setting `TODO_TEST_DB=1` (or any non-empty value
/// other than `0` / `false`).
#[must_use]
pub fn is_test_mode() -> bool {
    std::env::var(TEST_DB_ENV).is_ok_and(|v| is_truthy(&v))
}

fn is_truthy(value: &str) -> bool {
    !value.is_empty() && value != "0" && !value.eq_ignore_ascii_case("false")
}

/// Resolve the database path.
///
/// Priority:
/// 1. `explicit_path` (the `--db` flag)
/// 2. `TODO_DB` environment variable
/// 3. `TODO_TEST_DB` → isolated test database
/// 4. `<data dir>/db.sqlite3`
///
/// Returns `None` if no location can be determined.
#[must_use]
pub fn resolve_db_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
    resolve_with(
        explicit_path,
        std::env::var(DB_ENV).ok().as_deref(),
        is_test_mode(),
        data_dir(),
    )
}

fn resolve_with(
    explicit_path: Option<&Path>,
    env_path: Option<&str>,
    test_mode: bool,
    data_dir: Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return Some(path.to_path_buf());
    }

    if let Some(path) = env_path.filter(|p| !p.trim().is_empty()) {
        return Some(PathBuf::from(path));
    }

    let dir = data_dir?;
    if test_mode {
        Some(dir.join("test").join(DB_FILE_NAME))
    } else {
        Some(dir.join(DB_FILE_NAME))
    }
}
