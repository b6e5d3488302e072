//! CLI definitions using clap.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for list output.
#[derive(ValueEnum, Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable list (default)
    #[default]
    Table,
    /// JSON (same as --json)
    Json,
    /// Comma-separated values
    Csv,
}

pub mod commands;

/// Single-screen to-do list backed by a local SQLite database
#[derive(Parser, Debug)]
#[command(name = "todo", author, version, about, long_about = None)]
pub struct Cli {
    /// Command to run (default: interactive shell)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Database path (default: <data dir>/todo-list/db.sqlite3)
    #[arg(long, global = true, env = "TODO_DB")]
    pub db: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Output format (table, json, csv)
    #[arg(long, value_enum, global = true, default_value_t)]
    pub format: OutputFormat,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (no output except errors)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the database (if needed) and print its location
    Init,

    /// Print the resolved database path
    Path,

    /// Print version information
    Version,

    /// Add an item
    Add {
        /// Item text
        text: String,
    },

    /// List all items
    #[command(alias = "ls")]
    List,

    /// Delete an item by row number or id
    #[command(alias = "rm")]
    Delete(DeleteArgs),

    /// Interactive single-screen session (add, check off, delete)
    Shell,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct DeleteArgs {
    /// Row number as shown by `todo list` (1-based)
    pub row: Option<String>,

    /// Item id
    #[arg(long)]
    pub id: Option<i64>,
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_means_shell() {
        let cli = Cli::parse_from(["todo"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_delete_requires_a_target() {
        assert!(Cli::try_parse_from(["todo", "delete"]).is_err());
        assert!(Cli::try_parse_from(["todo", "delete", "2", "--id", "5"]).is_err());

        let cli = Cli::parse_from(["todo", "rm", "--id", "5"]);
        match cli.command {
            Some(Commands::Delete(args)) => {
                assert_eq!(args.id, Some(5));
                assert!(args.row.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_add_takes_text() {
        let cli = Cli::parse_from(["todo", "add", "Buy milk"]);
        assert!(matches!(cli.command, Some(Commands::Add { text }) if text == "Buy milk"));
    }
}
