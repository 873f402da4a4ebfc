//! Lyra CLI - Command-line interface for checking relationship declarations.

use clap::Parser;
use lyra_cli::commands;
use lyra_cli::{Cli, Command, Formatter};
use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize tracing (log to stderr, RUST_LOG overrides)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    match run() {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Returns whether the command succeeded without reporting issues.
fn run() -> lyra_cli::Result<bool> {
    let cli = Cli::parse();
    let formatter = Formatter::new(cli.format.into(), !cli.no_color);

    match cli.command {
        Command::Check(args) => commands::execute_check(args, &formatter),
        Command::List(args) => {
            commands::execute_list(args, &formatter)?;
            Ok(true)
        }
    }
}
