//! Binary logic for the `latcheck` CLI.
//!
//! `main` stays a thin wrapper around [`run`] so integration tests can
//! drive the full load → check → report pipeline in-process and assert on
//! exit codes and rendered output.
//!
//! Exit codes: `0` no violations, `1` violations found or a loader error,
//! `2` invalid arguments (clap parse failures included).

use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use latcheck_core::{
    check_comparability, load_process_output, CheckError, LoadError, LoadOptions, ProcessId,
    RunResult,
};

/// Exit code for a clean, comparable run.
pub const EXIT_OK: u8 = 0;
/// Exit code for violations found or a failed output load.
pub const EXIT_FAILURE: u8 = 1;
/// Exit code for invalid command-line usage.
pub const EXIT_USAGE: u8 = 2;

/// Verifies that lattice-agreement output files decide comparable sets.
#[derive(Debug, Parser)]
#[command(name = "latcheck")]
#[command(
    about = "Check lattice-agreement outputs for per-round comparability",
    long_about = None
)]
pub struct Cli {
    /// Number of processes (expects files 1.output..x.output)
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub processes: u32,

    /// Number of lines per file to compare
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub rounds: u32,

    /// Directory containing output files
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,

    /// Treat empty lines as empty sets
    #[arg(long)]
    pub allow_empty: bool,

    /// Ignore trailing empty lines at end of files
    #[arg(long)]
    pub trim: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Errors that terminate a run before the reporter produces output.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// `--dir` does not name a directory; a usage error.
    #[error("--dir is not a directory: {0}")]
    NotADirectory(PathBuf),

    /// A process output file failed to load.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Loaded data failed the checker's consistency precondition.
    #[error(transparent)]
    Check(#[from] CheckError),
}

impl RunError {
    /// Exit code this error maps to.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::NotADirectory(_) => EXIT_USAGE,
            Self::Load(_) | Self::Check(_) => EXIT_FAILURE,
        }
    }
}

/// Runs the full pipeline and returns the report, without printing.
///
/// Any loader error short-circuits before checking starts; partial results
/// are never reported as if complete.
pub fn execute(cli: &Cli) -> Result<RunResult, RunError> {
    if !cli.dir.is_dir() {
        return Err(RunError::NotADirectory(cli.dir.clone()));
    }

    let options = LoadOptions {
        required_rounds: cli.rounds as usize,
        allow_empty_lines: cli.allow_empty,
        trim_trailing_blank: cli.trim,
    };

    let mut outputs = BTreeMap::new();
    for id in 1..=cli.processes {
        let process = ProcessId(id);
        outputs.insert(process, load_process_output(&cli.dir, process, &options)?);
    }
    info!(
        processes = cli.processes,
        rounds = cli.rounds,
        "loaded all output files"
    );

    let violations = check_comparability(&outputs, cli.rounds as usize)?;
    Ok(RunResult::new(
        violations,
        cli.processes as usize,
        cli.rounds as usize,
    ))
}

/// Runs the pipeline, prints the report or error, and returns the exit
/// code.
///
/// Results go to stdout; all diagnostics go to stderr.
pub fn run(cli: &Cli) -> u8 {
    match execute(cli) {
        Ok(result) => {
            print!("{}", result.render());
            result.exit_code()
        }
        Err(err) => {
            match &err {
                RunError::NotADirectory(_) => eprintln!("{err}"),
                RunError::Load(_) => eprintln!("ERROR reading outputs: {err}"),
                RunError::Check(_) => eprintln!("ERROR: {err}"),
            }
            err.exit_code()
        }
    }
}
