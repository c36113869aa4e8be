//! Error types for output loading and checking.

use std::path::PathBuf;

use crate::types::ProcessId;

/// Errors raised while loading a single process output file.
///
/// Any variant aborts the whole run before checking starts: these indicate
/// malformed test fixtures, not transient conditions, and the chain
/// property is undefined without complete data.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The expected output file does not exist.
    #[error("missing file: {path}")]
    FileNotFound {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// The file exists but reading it failed.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying filesystem error.
        #[source]
        source: std::io::Error,
    },

    /// The file holds fewer lines than the number of rounds to check.
    #[error("{file} has {actual} lines, expected at least {required}")]
    InsufficientLines {
        /// Offending file name.
        file: String,
        /// Lines found after optional trailing-blank trimming.
        actual: usize,
        /// Rounds requested for the run.
        required: usize,
    },

    /// A blank line was found while empty decision sets are disallowed.
    #[error("{file} line {line_no}: empty line encountered (use --allow-empty to allow)")]
    EmptyLineDisallowed {
        /// Offending file name.
        file: String,
        /// 1-based line number of the blank line.
        line_no: usize,
    },

    /// A token on the line does not parse as a base-10 integer.
    #[error("{file} line {line_no}: non-integer token in line: {line:?}")]
    MalformedToken {
        /// Offending file name.
        file: String,
        /// 1-based line number of the malformed line.
        line_no: usize,
        /// The offending line, verbatim after surrounding-whitespace strip.
        line: String,
    },
}

/// Result alias for loader operations.
pub type LoadResult<T> = std::result::Result<T, LoadError>;

/// Internal consistency failure detected before any pair is examined.
///
/// The loader contract guarantees every output has exactly the requested
/// round count; the checker still fails fast if handed anything else.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    /// A loaded output does not have exactly the expected round count.
    #[error("process {process} has {actual} rounds loaded, expected exactly {expected}")]
    RoundCountMismatch {
        /// Process whose output is inconsistent.
        process: ProcessId,
        /// Rounds actually present.
        actual: usize,
        /// Rounds the run was asked to check.
        expected: usize,
    },
}

/// Result alias for checker operations.
pub type CheckResult<T> = std::result::Result<T, CheckError>;
