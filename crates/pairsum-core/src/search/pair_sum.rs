use crate::core::index::MembershipIndex;
use serde::Deserialize;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchStrategy {
    /// Compare every pairing directly.
    Linear,
    /// Probe a set built over `A` for each complement `target - b`.
    #[default]
    Hashed,
}

impl std::fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchStrategy::Linear => write!(f, "linear"),
            SearchStrategy::Hashed => write!(f, "hashed"),
        }
    }
}

#[inline]
fn sums_to(a: i64, b: i64, target: i64) -> bool {
    i128::from(a) + i128::from(b) == i128::from(target)
}

/// The value that `b` must be paired with, or `None` when it lies outside `i64`.
#[inline]
fn complement(target: i64, b: i64) -> Option<i64> {
    i64::try_from(i128::from(target) - i128::from(b)).ok()
}

/// Returns `true` if some `a[i] + b[j] == target`.
pub fn has_pair_sum(a: &[i64], b: &[i64], target: i64) -> bool {
    find_pair_sum(a, b, target).is_some()
}

/// First `(i, j)` in row-major order such that `a[i] + b[j] == target`.
pub fn find_pair_sum(a: &[i64], b: &[i64], target: i64) -> Option<(usize, usize)> {
    a.iter().enumerate().find_map(|(i, &x)| {
        b.iter()
            .position(|&y| sums_to(x, y, target))
            .map(|j| (i, j))
    })
}

/// Same predicate as [`has_pair_sum`], indexing `a` first.
pub fn has_pair_sum_fast(a: &[i64], b: &[i64], target: i64) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    has_pair_sum_with_index(&build_membership_index(a), b, target)
}

/// Same predicate as [`has_pair_sum_fast`] against an index the caller already built.
pub fn has_pair_sum_with_index(index: &MembershipIndex, b: &[i64], target: i64) -> bool {
    b.iter()
        .filter_map(|&y| complement(target, y))
        .any(|needed| index.contains(needed))
}

pub fn build_membership_index(a: &[i64]) -> MembershipIndex {
    MembershipIndex::build(a)
}

pub fn has_pair_sum_with(strategy: SearchStrategy, a: &[i64], b: &[i64], target: i64) -> bool {
    trace!(%strategy, a_len = a.len(), b_len = b.len(), target, "Evaluating pair-sum query");
    match strategy {
        SearchStrategy::Linear => has_pair_sum(a, b, target),
        SearchStrategy::Hashed => has_pair_sum_fast(a, b, target),
    }
}
