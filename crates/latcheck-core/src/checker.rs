//! Pairwise-per-round comparability checking.
//!
//! The check is exhaustive by design: every `(round, pair)` cell is
//! evaluated with no early termination, so the resulting report covers all
//! violations rather than the first one found. Complexity is
//! O(y · x² · s); x and y are test-scale values.

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::{CheckError, CheckResult};
use crate::types::{ProcessId, ProcessOutput, ViolationRecord};

/// Checks the chain property at every round across all process pairs.
///
/// Returns violations in enumeration order: ascending round, then ascending
/// lower process id, then ascending higher process id. The sequence is
/// empty iff all decided sets are pairwise comparable at every round.
///
/// Every output must hold exactly `rounds` sets; anything else is an
/// internal consistency failure reported before any pair is examined.
pub fn check_comparability(
    outputs: &BTreeMap<ProcessId, ProcessOutput>,
    rounds: usize,
) -> CheckResult<Vec<ViolationRecord>> {
    for output in outputs.values() {
        if output.rounds().len() != rounds {
            return Err(CheckError::RoundCountMismatch {
                process: output.process(),
                actual: output.rounds().len(),
                expected: rounds,
            });
        }
    }

    let ids: Vec<ProcessId> = outputs.keys().copied().collect();
    let mut violations = Vec::new();
    for round in 1..=rounds {
        for (pos, &first) in ids.iter().enumerate() {
            let first_set = &outputs[&first].rounds()[round - 1];
            for &second in &ids[pos + 1..] {
                let second_set = &outputs[&second].rounds()[round - 1];
                if !first_set.is_comparable_with(second_set) {
                    violations.push(ViolationRecord {
                        round,
                        first,
                        second,
                        first_set: first_set.clone(),
                        second_set: second_set.clone(),
                    });
                }
            }
        }
    }

    debug!(
        processes = ids.len(),
        rounds,
        violations = violations.len(),
        "comparability check complete"
    );
    Ok(violations)
}
