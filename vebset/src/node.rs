//! The recursive tree behind [`VebSet`](crate::VebSet).
//!
//! A node covers a power-of-two span of ids. Spans of 64 or fewer ids are a
//! single machine word; anything wider is a [`Branch`] that slices each id
//! into a cluster index (high bits) and an offset (low bits), recursing into
//! one of `2^hi_bits` clusters of `2^lo_bits` ids each. A summary node of
//! capacity `2^hi_bits` tracks which clusters hold at least one member, so
//! successor queries can skip dead clusters in one step.
//!
//! Two invariants keep every operation down to one real recursion per level:
//! 1. A branch caches its min and max. The min is stored *only* in the
//!    cache, never in a cluster, so inserting into an empty branch is O(1).
//! 2. When an insert lands in an empty cluster, the cluster-side insert is
//!    the O(1) empty case and the real recursion goes into the summary
//!    (and vice versa when the cluster is already live).

use alloc::boxed::Box;
use alloc::vec::Vec;

/// Ids per leaf word.
pub(crate) const LEAF_BITS: usize = u64::BITS as usize;

/// One level of the recursive decomposition.
#[derive(Clone)]
pub(crate) enum Node {
    /// Up to 64 ids, one bit each.
    Leaf(u64),
    /// A wider span, split into clusters plus a summary.
    Branch(Box<Branch>),
}

impl Node {
    /// Build an empty node covering `capacity` ids, allocating every level
    /// of the tree up front. `capacity` must be a power of two.
    pub(crate) fn empty(capacity: usize) -> Node {
        debug_assert!(capacity.is_power_of_two());
        if capacity <= LEAF_BITS {
            Node::Leaf(0)
        } else {
            Node::Branch(Box::new(Branch::empty(capacity)))
        }
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        match self {
            Node::Leaf(word) => *word == 0,
            Node::Branch(branch) => branch.min_max.is_none(),
        }
    }

    /// Smallest member, or `None` when empty.
    #[inline]
    pub(crate) fn min(&self) -> Option<usize> {
        match self {
            Node::Leaf(word) => leaf_min(*word),
            Node::Branch(branch) => branch.min_max.map(|(min, _)| min),
        }
    }

    /// Largest member, or `None` when empty.
    #[inline]
    pub(crate) fn max(&self) -> Option<usize> {
        match self {
            Node::Leaf(word) => leaf_max(*word),
            Node::Branch(branch) => branch.min_max.map(|(_, max)| max),
        }
    }

    /// Add `x`, returning whether it was newly added.
    ///
    /// Requires `x` below this node's capacity.
    pub(crate) fn insert(&mut self, x: usize) -> bool {
        match self {
            Node::Leaf(word) => {
                let mask = leaf_mask(x);
                let newly = *word & mask == 0;
                *word |= mask;
                newly
            }
            Node::Branch(branch) => branch.insert(x),
        }
    }

    pub(crate) fn contains(&self, x: usize) -> bool {
        match self {
            Node::Leaf(word) => *word & leaf_mask(x) != 0,
            Node::Branch(branch) => branch.contains(x),
        }
    }

    /// Smallest member greater than or equal to `x`, or `None`.
    ///
    /// Requires `x` below this node's capacity.
    pub(crate) fn successor(&self, x: usize) -> Option<usize> {
        match self {
            Node::Leaf(word) => leaf_successor(*word, x),
            Node::Branch(branch) => branch.successor(x),
        }
    }
}

/// An interior node: clusters of `2^lo_bits` ids plus a summary over the
/// live cluster indices.
#[derive(Clone)]
pub(crate) struct Branch {
    /// How many low bits of an id select the offset inside a cluster.
    lo_bits: u32,
    /// Cached extremes. The min lives only here; the max is a copy of a
    /// member that is also stored in its cluster (unless it equals the min).
    min_max: Option<(usize, usize)>,
    /// Which cluster indices have at least one member.
    summary: Node,
    clusters: Box<[Node]>,
}

impl Branch {
    fn empty(capacity: usize) -> Branch {
        let total_bits = capacity.trailing_zeros();
        // Halve the exponent, but keep clusters at least one full leaf word
        // wide so the bottom level never has partially used words.
        let lo_bits = (total_bits / 2).max(LEAF_BITS.trailing_zeros());
        let cluster_count = capacity >> lo_bits;
        let cluster_capacity = 1usize << lo_bits;
        let clusters = (0..cluster_count)
            .map(|_| Node::empty(cluster_capacity))
            .collect::<Vec<_>>()
            .into_boxed_slice();
        Branch {
            lo_bits,
            min_max: None,
            summary: Node::empty(cluster_count),
            clusters,
        }
    }

    /// Split an id into `(cluster index, offset inside the cluster)`.
    #[inline]
    fn split(&self, x: usize) -> (usize, usize) {
        (x >> self.lo_bits, x & ((1usize << self.lo_bits) - 1))
    }

    /// Inverse of [`Branch::split`].
    #[inline]
    fn combine(&self, cluster: usize, offset: usize) -> usize {
        (cluster << self.lo_bits) | offset
    }

    fn insert(&mut self, x: usize) -> bool {
        let Some((mut min, mut max)) = self.min_max else {
            // First member of this branch lives only in the cache.
            self.min_max = Some((x, x));
            return true;
        };
        if x == min {
            return false;
        }
        // The smaller of x and the cached min stays in the cache; the other
        // one sinks into its cluster.
        let down;
        if x < min {
            down = min;
            min = x;
        } else {
            down = x;
        }
        if down > max {
            max = down;
        }
        self.min_max = Some((min, max));
        let (cluster, offset) = self.split(down);
        if self.clusters[cluster].is_empty() {
            // The cluster insert hits the O(1) empty case, so the only full
            // recursion on this path is marking the cluster live.
            self.clusters[cluster].insert(offset);
            self.summary.insert(cluster);
            true
        } else {
            self.clusters[cluster].insert(offset)
        }
    }

    fn contains(&self, x: usize) -> bool {
        let Some((min, max)) = self.min_max else {
            return false;
        };
        if x == min {
            return true;
        }
        if x < min || x > max {
            return false;
        }
        let (cluster, offset) = self.split(x);
        self.clusters[cluster].contains(offset)
    }

    fn successor(&self, x: usize) -> Option<usize> {
        let (min, max) = self.min_max?;
        if x <= min {
            return Some(min);
        }
        if x > max {
            return None;
        }
        // min < x <= max, so the answer is stored in some cluster.
        let (cluster, offset) = self.split(x);
        match self.clusters[cluster].max() {
            // Answer sits inside x's own cluster.
            Some(greatest) if offset <= greatest => {
                let next = self.clusters[cluster].successor(offset)?;
                Some(self.combine(cluster, next))
            }
            // Otherwise it is the first member of the next live cluster.
            // x < max means max's cluster index is > cluster here, so the
            // summary query stays in range.
            _ => {
                let next_cluster = self.summary.successor(cluster + 1)?;
                let first = self.clusters[next_cluster].min()?;
                Some(self.combine(next_cluster, first))
            }
        }
    }
}

/// Bit mask selecting id `x` inside a leaf word.
#[inline]
fn leaf_mask(x: usize) -> u64 {
    debug_assert!(x < LEAF_BITS);
    1u64 << x
}

#[inline]
fn leaf_min(word: u64) -> Option<usize> {
    (word != 0).then_some(word.trailing_zeros() as usize)
}

#[inline]
fn leaf_max(word: u64) -> Option<usize> {
    // Lazy: the subtraction underflows for an all-zero word.
    (word != 0).then(|| (u64::BITS - 1 - word.leading_zeros()) as usize)
}

/// First set bit at or above `x`, found by masking off the bits below `x`.
#[inline]
fn leaf_successor(word: u64, x: usize) -> Option<usize> {
    debug_assert!(x < LEAF_BITS);
    leaf_min(word & (u64::MAX << x))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaf_word_scans() {
        assert_eq!(leaf_min(0), None);
        assert_eq!(leaf_max(0), None);
        assert_eq!(leaf_min(1), Some(0));
        assert_eq!(leaf_max(1 << 63), Some(63));
        let word = (1 << 3) | (1 << 40);
        assert_eq!(leaf_min(word), Some(3));
        assert_eq!(leaf_max(word), Some(40));
        assert_eq!(leaf_successor(word, 0), Some(3));
        assert_eq!(leaf_successor(word, 3), Some(3));
        assert_eq!(leaf_successor(word, 4), Some(40));
        assert_eq!(leaf_successor(word, 41), None);
        assert_eq!(leaf_successor(word, 63), None);
    }

    #[test]
    fn split_geometry() {
        // 2^12 splits evenly into 64 clusters of 64
        let Node::Branch(branch) = Node::empty(1 << 12) else {
            panic!("expected a branch")
        };
        assert_eq!(branch.lo_bits, 6);
        assert_eq!(branch.clusters.len(), 64);
        assert_eq!(branch.split(1000), (15, 40));
        assert_eq!(branch.combine(15, 40), 1000);

        // halving 2^7 would leave clusters narrower than a word,
        // so the low side is clamped to a full word
        let Node::Branch(branch) = Node::empty(1 << 7) else {
            panic!("expected a branch")
        };
        assert_eq!(branch.lo_bits, 6);
        assert_eq!(branch.clusters.len(), 2);

        assert!(matches!(Node::empty(64), Node::Leaf(0)));
        assert!(matches!(Node::empty(1), Node::Leaf(0)));
    }

    #[test]
    fn min_stays_out_of_clusters() {
        let mut node = Node::empty(1 << 12);
        assert!(node.insert(77));
        assert!(!node.insert(77));
        let Node::Branch(branch) = &node else {
            panic!("expected a branch")
        };
        assert_eq!(branch.min_max, Some((77, 77)));
        assert!(branch.summary.is_empty());
        assert!(branch.clusters.iter().all(Node::is_empty));
        // a smaller insert displaces the cached min into its cluster
        let mut node = node.clone();
        assert!(node.insert(3));
        let Node::Branch(branch) = &node else {
            panic!("expected a branch")
        };
        assert_eq!(branch.min_max, Some((3, 77)));
        assert!(branch.clusters[1].contains(13));
        assert!(branch.summary.contains(1));
    }
}
