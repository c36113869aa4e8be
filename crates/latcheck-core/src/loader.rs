//! File-backed loading of per-process decision sets.
//!
//! Each process writes one plain-text file, `{id}.output`, with one decided
//! set per line as whitespace-separated base-10 integers. Loading is
//! all-or-nothing: on any format error no partial state is retained.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{LoadError, LoadResult};
use crate::types::{DecisionSet, ProcessId, ProcessOutput};

/// Parsing policy for one load call.
#[derive(Debug, Clone, Copy)]
pub struct LoadOptions {
    /// Number of rounds each file must provide (`y`), at least 1.
    pub required_rounds: usize,
    /// Treat blank lines as empty decision sets instead of rejecting them.
    ///
    /// This governs every blank line within the first `required_rounds`
    /// lines, interior ones included; trailing blanks are only ever removed
    /// by `trim_trailing_blank`, which runs first.
    pub allow_empty_lines: bool,
    /// Drop trailing blank or whitespace-only lines before the line-count
    /// check.
    pub trim_trailing_blank: bool,
}

/// Loads the decision sets of `process` from `{id}.output` under `dir`.
///
/// A successful call returns a [`ProcessOutput`] holding exactly
/// `required_rounds` sets, in file order.
pub fn load_process_output(
    dir: &Path,
    process: ProcessId,
    options: &LoadOptions,
) -> LoadResult<ProcessOutput> {
    let path = dir.join(process.output_file_name());
    if !path.exists() {
        return Err(LoadError::FileNotFound { path });
    }
    let contents = fs::read_to_string(&path).map_err(|source| LoadError::Io {
        path: path.clone(),
        source,
    })?;

    let mut lines: Vec<&str> = contents.lines().collect();
    if options.trim_trailing_blank {
        while lines.last().is_some_and(|line| line.trim().is_empty()) {
            lines.pop();
        }
    }

    if lines.len() < options.required_rounds {
        return Err(LoadError::InsufficientLines {
            file: process.output_file_name(),
            actual: lines.len(),
            required: options.required_rounds,
        });
    }

    let mut rounds = Vec::with_capacity(options.required_rounds);
    for (idx, line) in lines.iter().take(options.required_rounds).enumerate() {
        rounds.push(parse_line(line, idx + 1, process, options.allow_empty_lines)?);
    }

    debug!(
        process = %process,
        rounds = rounds.len(),
        path = %path.display(),
        "loaded output file"
    );
    Ok(ProcessOutput::from_rounds(process, rounds))
}

/// Parses one output line into a decision set.
fn parse_line(
    line: &str,
    line_no: usize,
    process: ProcessId,
    allow_empty: bool,
) -> LoadResult<DecisionSet> {
    let line = line.trim();
    if line.is_empty() {
        if allow_empty {
            return Ok(DecisionSet::default());
        }
        return Err(LoadError::EmptyLineDisallowed {
            file: process.output_file_name(),
            line_no,
        });
    }
    line.split_whitespace()
        .map(|token| token.parse::<i64>())
        .collect::<Result<DecisionSet, _>>()
        .map_err(|_| LoadError::MalformedToken {
            file: process.output_file_name(),
            line_no,
            line: line.to_string(),
        })
}
