//! `latcheck` — comparability checker for lattice-agreement outputs.

use std::process::ExitCode;

use clap::Parser;

fn main() -> ExitCode {
    let cli = latcheck_cli::Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .init();

    ExitCode::from(latcheck_cli::run(&cli))
}
