//! Presentation boundary.
//!
//! The presentation layer owns no business state. It turns user input
//! into [`Event`]s for the list controller, renders the controller's row
//! snapshot, and shows errors through an [`AlertSink`].

use crate::error::{Error, Result};
use crate::model::Row;
use colored::Colorize;
use std::io::{self, Write};

/// A user action delivered to the list controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Text typed into the input field and submitted.
    Submit(String),
    /// Delete gesture on the row at this index of the last rendered snapshot.
    Delete(usize),
    /// Selection gesture on the row at this index, toggling its checkmark.
    Toggle(usize),
    /// Re-read the whole list from storage.
    Reload,
}

/// Where user-facing error alerts go.
pub trait AlertSink {
    fn show_error(&mut self, title: &str, message: &str);
}

/// Alert sink that writes a boxed alert to a terminal stream.
pub struct TerminalAlerts<W: Write> {
    out: W,
}

impl TerminalAlerts<io::Stderr> {
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> TerminalAlerts<W> {
    #[must_use]
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub(crate) fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> AlertSink for TerminalAlerts<W> {
    fn show_error(&mut self, title: &str, message: &str) {
        // A broken stderr leaves nowhere to report to
        let _ = writeln!(self.out, "{}", title.red().bold());
        let _ = writeln!(self.out, "  {message}");
        let _ = writeln!(self.out, "  {}", "[Dismiss]".dimmed());
    }
}

/// Alert sink that keeps every message it is shown.
#[derive(Debug, Default)]
pub struct RecordingAlerts {
    pub messages: Vec<String>,
}

impl AlertSink for RecordingAlerts {
    fn show_error(&mut self, _title: &str, message: &str) {
        self.messages.push(message.to_string());
    }
}

/// Write one line per row with a 1-based display index.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn render_rows<W: Write>(rows: &[Row], out: &mut W) -> io::Result<()> {
    if rows.is_empty() {
        return writeln!(out, "{}", "No items.".dimmed());
    }

    for (i, row) in rows.iter().enumerate() {
        let index = format!("{:>3}.", i + 1);
        if row.checked {
            writeln!(
                out,
                "{} {} {}",
                index.dimmed(),
                "[x]".green(),
                row.text.strikethrough()
            )?;
        } else {
            writeln!(out, "{} [ ] {}", index.dimmed(), row.text)?;
        }
    }

    Ok(())
}

/// One line of interactive input, parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Event(Event),
    Help,
    Quit,
}

/// Help text for the interactive session.
pub const HELP: &str = "\
Commands:
  <text>          add an item (same as `add <text>`)
  add <text>      add an item
  x <n>           check or uncheck row n (also: check, toggle)
  rm <n>          delete row n (also: del, delete)
  ls              reload the list (also: reload, list)
  help            show this help
  q               quit (also: quit, exit)";

/// Parse a line typed into the interactive session.
///
/// Anything that is not a known command is submitted as item text, so a
/// bare empty line submits empty text and is rejected downstream. Row
/// commands only apply when followed by a number or by nothing at all:
/// "check email" is an item, "check 2" toggles row 2.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when a row command is given no row
/// number or row `0`.
pub fn parse_line(line: &str) -> Result<Input> {
    let line = line.trim_end_matches(['\r', '\n']);
    let (word, rest) = match line.trim_start().split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line.trim(), ""),
    };

    let input = match word {
        "q" | "quit" | "exit" if rest.is_empty() => Input::Quit,
        "help" | "?" if rest.is_empty() => Input::Help,
        "ls" | "list" | "reload" if rest.is_empty() => Input::Event(Event::Reload),
        "add" => Input::Event(Event::Submit(rest.to_string())),
        "x" | "check" | "toggle" if is_row_argument(rest) => {
            Input::Event(Event::Toggle(parse_row_number(rest)?))
        }
        "rm" | "del" | "delete" if is_row_argument(rest) => {
            Input::Event(Event::Delete(parse_row_number(rest)?))
        }
        _ => Input::Event(Event::Submit(line.to_string())),
    };

    Ok(input)
}

// A bare row command is kept as a command so it can report the missing number
fn is_row_argument(rest: &str) -> bool {
    rest.is_empty() || rest.parse::<usize>().is_ok()
}

/// Turn a 1-based row number typed by the user into a 0-based index.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] for anything but a positive integer.
pub fn parse_row_number(s: &str) -> Result<usize> {
    match s.trim().parse::<usize>() {
        Ok(0) => Err(Error::InvalidArgument("row numbers start at 1".to_string())),
        Ok(n) => Ok(n - 1),
        Err(_) => Err(Error::InvalidArgument(format!(
            "expected a row number, got '{s}'"
        ))),
    }
}
