//! Interactive single-screen session.
//!
//! Renders the list, reads one line at a time, turns it into an event for
//! the list controller and re-renders. Checkmarks live only for the
//! duration of the session.

use crate::cli::commands::open_store;
use crate::controller::ListController;
use crate::error::{ALERT_TITLE, Result};
use crate::storage::Store;
use crate::ui::{AlertSink, HELP, Input, TerminalAlerts, parse_line, render_rows};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::warn;

/// Execute the shell command against stdin/stdout.
///
/// # Errors
///
/// Returns an error if the database cannot be opened (after showing the
/// alert) or if the terminal cannot be written.
pub fn execute(db_path: Option<&PathBuf>) -> Result<()> {
    let mut alerts = TerminalAlerts::stderr();

    let store = match open_store(db_path) {
        Ok(store) => store,
        Err(e) => {
            alerts.show_error(ALERT_TITLE, &e.alert_message());
            return Err(e);
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(store, &mut stdin.lock(), &mut stdout.lock(), &mut alerts)
}

/// Drive a session until the input ends or the user quits.
///
/// A failed startup read is shown as an alert and the session starts with
/// an empty list.
///
/// # Errors
///
/// Returns an error only if reading input or writing output fails.
pub fn run_session<S, R, W>(
    store: S,
    input: &mut R,
    out: &mut W,
    alerts: &mut dyn AlertSink,
) -> Result<()>
where
    S: Store,
    R: BufRead,
    W: Write,
{
    let mut controller = ListController::new(store);
    controller.handle(crate::ui::Event::Reload, alerts);

    writeln!(out, "{}", "To-Do List".bold())?;
    writeln!(out, "{}", "Type an item and press Enter. `help` for commands.".dimmed())?;
    render_rows(controller.rows(), out)?;

    let mut line = String::new();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }

        match parse_line(&line) {
            Ok(Input::Quit) => break,
            Ok(Input::Help) => writeln!(out, "{HELP}")?,
            Ok(Input::Event(event)) => {
                controller.handle(event, alerts);
                render_rows(controller.rows(), out)?;
            }
            Err(e) => {
                warn!(error = %e, "Unparseable input");
                alerts.show_error(ALERT_TITLE, &e.alert_message());
            }
        }
    }

    Ok(())
}
