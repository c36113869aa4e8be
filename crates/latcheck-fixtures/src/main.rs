//! `latcheck-genconfig` — write lattice-agreement input fixtures.

use std::path::PathBuf;

use clap::Parser;
use rand_chacha::{rand_core::SeedableRng, ChaCha20Rng};

use latcheck_fixtures::{write_config_files, ConfigParams};

/// Generates `lattice-agreement-{i}.config` protocol input fixtures.
#[derive(Debug, Parser)]
#[command(name = "latcheck-genconfig")]
#[command(about = "Generate lattice-agreement input config fixtures", long_about = None)]
struct Cli {
    /// Number of config files (x)
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    files: u32,

    /// Max integers per proposal line (k is drawn from 1..y)
    max_per_line: u32,

    /// Number of proposal lines (a)
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    proposal_lines: u32,

    /// Second integer on the first line (b)
    header_b: i64,

    /// Third integer on the first line (c)
    header_c: i64,

    /// Range size per proposal line, disjoint blocks (R)
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    block_size: u32,

    /// Directory to write config files into
    #[arg(long, default_value = ".")]
    dir: PathBuf,

    /// RNG seed for reproducible fixtures; unseeded runs draw from entropy
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .init();

    let params = ConfigParams {
        files: cli.files,
        max_per_line: cli.max_per_line,
        proposal_lines: cli.proposal_lines,
        header_b: cli.header_b,
        header_c: cli.header_c,
        block_size: cli.block_size,
    };

    let seed = cli.seed.unwrap_or_else(|| rand::random());
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    tracing::debug!(seed, "seeded fixture rng");

    let written = write_config_files(&cli.dir, &params, &mut rng)?;
    for path in written {
        println!("Generated {}", path.display());
    }
    Ok(())
}
