//! Violation aggregation, rendering, and exit-code decision.
//!
//! Rendering truncates after the first 20 violations to keep terminal
//! output bounded; the remainder is reported as a count. Truncation is a
//! display concern only — every violation is computed before any is
//! dropped from view.

use crate::types::ViolationRecord;

/// Number of violations rendered in full before truncation.
const DETAIL_LIMIT: usize = 20;

/// The complete outcome of one comparability run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunResult {
    violations: Vec<ViolationRecord>,
    processes: usize,
    rounds: usize,
}

impl RunResult {
    /// Bundles the checker's violation sequence with the run dimensions.
    pub fn new(violations: Vec<ViolationRecord>, processes: usize, rounds: usize) -> Self {
        Self {
            violations,
            processes,
            rounds,
        }
    }

    /// Whether the chain property held for every round and pair.
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }

    /// All violations, in the checker's enumeration order.
    pub fn violations(&self) -> &[ViolationRecord] {
        &self.violations
    }

    /// Process exit code: 0 on a clean run, 1 when violations were found.
    pub fn exit_code(&self) -> u8 {
        u8::from(!self.passed())
    }

    /// Human-readable report for the standard output stream.
    pub fn render(&self) -> String {
        if self.passed() {
            return format!(
                "OK: All {} files are comparable on each of the first {} lines.\n",
                self.processes, self.rounds
            );
        }

        let mut out = format!(
            "FAIL: Found {} comparability violation(s).\n",
            self.violations.len()
        );
        for (idx, v) in self.violations.iter().take(DETAIL_LIMIT).enumerate() {
            out.push_str(&format!(
                "\nViolation {}: line {} -> {} vs {} are incomparable\n",
                idx + 1,
                v.round,
                v.first.output_file_name(),
                v.second.output_file_name()
            ));
            out.push_str(&format!(
                "  {}[{}] = {:?}\n",
                v.first.output_file_name(),
                v.round,
                v.first_set.sorted_elements()
            ));
            out.push_str(&format!(
                "  {}[{}] = {:?}\n",
                v.second.output_file_name(),
                v.round,
                v.second_set.sorted_elements()
            ));
            out.push_str(&format!(
                "  {} \\ {} = {:?}\n",
                v.first,
                v.second,
                v.first_set.difference(&v.second_set)
            ));
            out.push_str(&format!(
                "  {} \\ {} = {:?}\n",
                v.second,
                v.first,
                v.second_set.difference(&v.first_set)
            ));
        }
        if self.violations.len() > DETAIL_LIMIT {
            out.push_str(&format!(
                "\n...and {} more.\n",
                self.violations.len() - DETAIL_LIMIT
            ));
        }
        out
    }
}
