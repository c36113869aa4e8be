//! # latcheck-core — Comparability Verification
//!
//! Verifies the safety property of lattice agreement over externally
//! produced test outputs: for every round index, the sets decided by all
//! processes must form a chain under set inclusion (any two decided sets
//! are related by subset).
//!
//! ## Architecture
//!
//! - **types**: Core value types (ProcessId, DecisionSet, ProcessOutput,
//!   ViolationRecord)
//! - **loader**: File-backed loading of per-process decision sets with
//!   strict format rules
//! - **checker**: Pairwise-per-round comparability checking
//! - **report**: Violation aggregation, rendering, and exit-code decision
//!
//! The pipeline is sequential by design: all files load to completion
//! before any check starts, and all checks complete before reporting.
//! Loading is all-or-nothing per run — the chain property is undefined
//! without complete data, so a single bad file invalidates the whole
//! comparison.

pub mod checker;
pub mod error;
pub mod loader;
pub mod report;
pub mod types;

pub use checker::check_comparability;
pub use error::{CheckError, LoadError};
pub use loader::{load_process_output, LoadOptions};
pub use report::RunResult;
pub use types::{DecisionSet, ProcessId, ProcessOutput, ViolationRecord};
