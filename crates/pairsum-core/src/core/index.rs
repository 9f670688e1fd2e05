use std::collections::HashSet;

/// Immutable set of the distinct values of a source sequence.
///
/// Once built the index is never mutated, so a shared reference can be handed to any number of
/// readers, including readers on other threads.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MembershipIndex {
    values: HashSet<i64>,
}

impl MembershipIndex {
    pub fn build(source: &[i64]) -> Self {
        source.iter().copied().collect()
    }

    #[inline]
    pub fn contains(&self, value: i64) -> bool {
        self.values.contains(&value)
    }

    /// Number of distinct values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.values.iter().copied()
    }
}

impl FromIterator<i64> for MembershipIndex {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_deduplicates_values() {
        let index = MembershipIndex::build(&[3, 1, 3, 2, 1]);
        assert_eq!(index.len(), 3);
        assert!(index.contains(1));
        assert!(index.contains(2));
        assert!(index.contains(3));
        assert!(!index.contains(4));
    }

    #[test]
    fn build_from_empty_sequence_is_empty() {
        let index = MembershipIndex::build(&[]);
        assert!(index.is_empty());
        assert!(!index.contains(0));
    }

    #[test]
    fn index_depends_only_on_distinct_values() {
        let a = MembershipIndex::build(&[5, -2, 5, 7]);
        let b = MembershipIndex::build(&[7, 7, -2, 5]);
        assert_eq!(a, b);
    }

    #[test]
    fn handles_extreme_values() {
        let index = MembershipIndex::build(&[i64::MIN, i64::MAX]);
        assert!(index.contains(i64::MIN));
        assert!(index.contains(i64::MAX));
        let mut values: Vec<i64> = index.iter().collect();
        values.sort_unstable();
        assert_eq!(values, vec![i64::MIN, i64::MAX]);
    }

    #[test]
    fn index_can_be_shared_across_threads() {
        let index = MembershipIndex::build(&[1, 2, 3]);
        std::thread::scope(|scope| {
            for probe in 1..=3 {
                let index = &index;
                scope.spawn(move || assert!(index.contains(probe)));
            }
        });
    }
}
