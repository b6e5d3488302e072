//! To-do list entry point.

use clap::Parser;
use std::process::ExitCode;
use todo::cli::commands;
use todo::cli::{Cli, Commands, OutputFormat};
use todo::error::{Error, ErrorCode};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.no_color || std::env::var_os("NO_COLOR").is_some() {
        colored::control::set_override(false);
    }

    init_tracing(cli.verbose, cli.quiet);

    // Resolve effective JSON mode: --json OR --format json OR non-TTY stdout.
    // The interactive shell always renders for humans.
    let interactive = matches!(cli.command, None | Some(Commands::Shell));
    let json = !interactive
        && (cli.json
            || cli.format == OutputFormat::Json
            || !std::io::IsTerminal::is_terminal(&std::io::stdout()));

    match run(&cli, json) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // The shell has already shown the alert for an unavailable store
            let alerted = interactive && e.error_code() == ErrorCode::StorageUnavailable;
            if json {
                eprintln!("{}", e.to_structured_json());
            } else if !cli.quiet && !alerted {
                if let Some(hint) = e.hint() {
                    eprintln!("Error: {e}\n  Hint: {hint}");
                } else {
                    eprintln!("Error: {e}");
                }
            }
            ExitCode::from(e.exit_code())
        }
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    use tracing_subscriber::EnvFilter;

    if quiet {
        return;
    }

    // Honor RUST_LOG if set, otherwise use verbosity flag
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        match verbose {
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("info"),
            2 => EnvFilter::new("debug,rusqlite=info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn run(cli: &Cli, json: bool) -> Result<(), Error> {
    let db = cli.db.as_ref();

    match &cli.command {
        None | Some(Commands::Shell) => commands::shell::execute(db),
        Some(Commands::Init) => commands::init::execute(db, json, cli.quiet),
        Some(Commands::Path) => commands::init::execute_path(db, json),
        Some(Commands::Version) => commands::version::execute(json),
        Some(Commands::Add { text }) => commands::items::add(text, db, json, cli.quiet),
        Some(Commands::List) => {
            commands::items::list(db, json, cli.format == OutputFormat::Csv)
        }
        Some(Commands::Delete(args)) => commands::items::delete(args, db, json, cli.quiet),
        Some(Commands::Completions { shell }) => commands::completions::execute(shell),
    }
}
