//! Cumulative-count index over variable-length groups.
//!
//! An ordered sequence of groups flattens into a single index space:
//! group 0's items first, then group 1's, and so on. The index keeps
//! one prefix sum per group, which gives O(1) total counts and an
//! O(log n) answer to "which group owns global index i". The triplet
//! store uses it with entities as groups; the sentence pair store
//! uses it with sentences as groups.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Prefix sums over group sizes with binary-search owner lookup.
///
/// Position `g` holds the number of items across groups `0..=g`, so
/// the last position is the total. The array is rebuilt in full after
/// any mutation of the underlying groups; it is never patched
/// per-item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CumulativeIndex {
    counts: Vec<usize>,
}

impl CumulativeIndex {
    /// Build from group sizes in one forward pass.
    pub fn from_sizes(sizes: impl IntoIterator<Item = usize>) -> Self {
        let mut running = 0;
        let counts = sizes
            .into_iter()
            .map(|len| {
                running += len;
                running
            })
            .collect();
        Self { counts }
    }

    /// Number of groups.
    pub fn group_count(&self) -> usize {
        self.counts.len()
    }

    /// Total item count across all groups. O(1).
    pub fn total(&self) -> usize {
        self.counts.last().copied().unwrap_or(0)
    }

    /// Items in group `g` alone.
    ///
    /// # Panics
    ///
    /// Panics if `g` is not a valid group index.
    pub fn group_len(&self, g: usize) -> usize {
        let before = if g == 0 { 0 } else { self.counts[g - 1] };
        self.counts[g] - before
    }

    /// Find the owning group and local offset of global index `i`.
    ///
    /// The owner is the first group whose prefix sum reaches `i + 1`.
    /// Taking the *first* such group means a group contributing zero
    /// items can never be selected: its prefix sum equals its
    /// predecessor's, so the predecessor range wins the tie.
    pub fn locate(&self, index: usize) -> Result<(usize, usize)> {
        let total = self.total();
        if index >= total {
            return Err(Error::IndexOutOfBounds { index, total });
        }

        let target = index + 1;
        let group = self.counts.partition_point(|&count| count < target);
        let local = index - (self.counts[group] - self.group_len(group));

        Ok((group, local))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_of_empty() {
        let idx = CumulativeIndex::from_sizes([]);
        assert_eq!(idx.total(), 0);
        assert_eq!(idx.group_count(), 0);
    }

    #[test]
    fn test_total() {
        let idx = CumulativeIndex::from_sizes([1, 2]);
        assert_eq!(idx.total(), 3);
    }

    #[test]
    fn test_locate() {
        let idx = CumulativeIndex::from_sizes([1, 2]);
        assert_eq!(idx.locate(0).unwrap(), (0, 0));
        assert_eq!(idx.locate(1).unwrap(), (1, 0));
        assert_eq!(idx.locate(2).unwrap(), (1, 1));
    }

    #[test]
    fn test_locate_out_of_bounds() {
        let idx = CumulativeIndex::from_sizes([1, 2]);
        assert!(matches!(
            idx.locate(3),
            Err(Error::IndexOutOfBounds { index: 3, total: 3 })
        ));
    }

    #[test]
    fn test_locate_on_empty() {
        let idx = CumulativeIndex::from_sizes([]);
        assert!(idx.locate(0).is_err());
    }

    #[test]
    fn test_empty_group_never_owns() {
        // Groups 1 and 2 are empty and share the boundary at count 1.
        // Index 1 belongs to group 3, not to either empty group.
        let idx = CumulativeIndex::from_sizes([1, 0, 0, 2]);
        assert_eq!(idx.locate(0).unwrap(), (0, 0));
        assert_eq!(idx.locate(1).unwrap(), (3, 0));
        assert_eq!(idx.locate(2).unwrap(), (3, 1));
    }

    #[test]
    fn test_leading_empty_groups() {
        let idx = CumulativeIndex::from_sizes([0, 0, 3]);
        assert_eq!(idx.locate(0).unwrap(), (2, 0));
        assert_eq!(idx.locate(2).unwrap(), (2, 2));
    }
}
