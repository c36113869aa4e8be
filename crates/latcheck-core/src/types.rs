//! Core value types for comparability verification.

use std::collections::BTreeSet;
use std::fmt;

/// Identifier of one participating process, in `1..=x`.
///
/// Each process owns exactly one output file named `{id}.output`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProcessId(pub u32);

impl ProcessId {
    /// Name of the output file this process writes.
    pub fn output_file_name(&self) -> String {
        format!("{}.output", self.0)
    }
}

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One decided set of values, parsed from a single output line.
///
/// Duplicates collapse and input order is irrelevant; iteration is always
/// ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecisionSet(BTreeSet<i64>);

impl DecisionSet {
    /// Whether every element of `self` is contained in `other`.
    pub fn is_subset_of(&self, other: &Self) -> bool {
        self.0.is_subset(&other.0)
    }

    /// The chain property for a single pair: one set contains the other.
    pub fn is_comparable_with(&self, other: &Self) -> bool {
        self.is_subset_of(other) || other.is_subset_of(self)
    }

    /// Elements of `self` not present in `other`, ascending.
    pub fn difference(&self, other: &Self) -> Vec<i64> {
        self.0.difference(&other.0).copied().collect()
    }

    /// All elements, ascending.
    pub fn sorted_elements(&self) -> Vec<i64> {
        self.0.iter().copied().collect()
    }

    /// Number of distinct elements.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set holds no elements.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<i64> for DecisionSet {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// The ordered decision sets one process produced, indexed by round `1..=y`.
///
/// Normally constructed by the loader, which guarantees exactly `y` sets;
/// read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    process: ProcessId,
    rounds: Vec<DecisionSet>,
}

impl ProcessOutput {
    /// Builds an output directly from in-memory decision sets.
    pub fn from_rounds(process: ProcessId, rounds: Vec<DecisionSet>) -> Self {
        Self { process, rounds }
    }

    /// The process that produced these decisions.
    pub fn process(&self) -> ProcessId {
        self.process
    }

    /// The decision sets in round order, first round first.
    pub fn rounds(&self) -> &[DecisionSet] {
        &self.rounds
    }
}

/// One incomparable pair found at a single round.
///
/// Records are append-only: created by the checker in enumeration order and
/// never mutated. The pair is canonical, `first < second`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViolationRecord {
    /// 1-based round index at which the pair is incomparable.
    pub round: usize,
    /// Lower-numbered process of the pair.
    pub first: ProcessId,
    /// Higher-numbered process of the pair.
    pub second: ProcessId,
    /// What `first` decided at this round.
    pub first_set: DecisionSet,
    /// What `second` decided at this round.
    pub second_set: DecisionSet,
}
