//! Reproducible generation of lattice-agreement protocol input fixtures.
//!
//! Writes `lattice-agreement-{i}.config` files: a header line `"a b c"`
//! followed by `a` proposal lines of randomly sampled integers, where
//! proposal line `j` (0-based) draws from the disjoint block
//! `[j·R, (j+1)·R − 1]`.
//!
//! These files are *inputs* to the protocol under test, unrelated in format
//! to the `.output` files the comparability checker reads. Randomness is
//! injected by the caller so fixture generation stays reproducible for
//! regression tests; nothing here touches a process-wide RNG.

use std::fs;
use std::path::{Path, PathBuf};

use rand::Rng;
use tracing::debug;

/// Shape of one generated fixture set.
///
/// Field names follow the generator's positional parameters
/// `x y a b c R`.
#[derive(Debug, Clone, Copy)]
pub struct ConfigParams {
    /// Number of config files to write (`x`), one per process.
    pub files: u32,
    /// Maximum integers sampled per proposal line (`y`); zero writes empty
    /// proposal lines.
    pub max_per_line: u32,
    /// Number of proposal lines per file (`a`).
    pub proposal_lines: u32,
    /// Second integer of the header line (`b`).
    pub header_b: i64,
    /// Third integer of the header line (`c`).
    pub header_c: i64,
    /// Size of the disjoint value block backing each proposal line (`R`).
    pub block_size: u32,
}

impl ConfigParams {
    fn validate(&self) -> Result<(), FixtureError> {
        if self.files == 0 || self.proposal_lines == 0 || self.block_size == 0 {
            return Err(FixtureError::InvalidParams);
        }
        Ok(())
    }
}

/// Errors raised while producing fixture files.
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    /// Parameter bounds violated.
    #[error("invalid values: require x > 0, a > 0, y >= 0, R > 0")]
    InvalidParams,

    /// Writing a config file failed.
    #[error("failed to write {path}: {source}")]
    Io {
        /// Path that was being written.
        path: PathBuf,
        /// Underlying filesystem error.
        #[source]
        source: std::io::Error,
    },
}

/// Writes `params.files` config fixtures under `dir` and returns their
/// paths in file order.
pub fn write_config_files(
    dir: &Path,
    params: &ConfigParams,
    rng: &mut impl Rng,
) -> Result<Vec<PathBuf>, FixtureError> {
    params.validate()?;
    let mut written = Vec::with_capacity(params.files as usize);
    for i in 1..=params.files {
        let path = dir.join(format!("lattice-agreement-{i}.config"));
        let contents = render_config(params, rng);
        fs::write(&path, contents).map_err(|source| FixtureError::Io {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), "generated config fixture");
        written.push(path);
    }
    Ok(written)
}

/// Renders one config file: header line, then one proposal line per block.
fn render_config(params: &ConfigParams, rng: &mut impl Rng) -> String {
    let mut out = format!(
        "{} {} {}\n",
        params.proposal_lines, params.header_b, params.header_c
    );
    for line in 0..params.proposal_lines {
        if params.max_per_line == 0 {
            out.push('\n');
            continue;
        }
        let block_start = i64::from(line) * i64::from(params.block_size);
        let take = rng.gen_range(1..=params.max_per_line.min(params.block_size)) as usize;
        let picks = rand::seq::index::sample(rng, params.block_size as usize, take);
        let rendered: Vec<String> = picks
            .iter()
            .map(|offset| (block_start + offset as i64).to_string())
            .collect();
        out.push_str(&rendered.join(" "));
        out.push('\n');
    }
    out
}
