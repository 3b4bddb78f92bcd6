//! Bounded ordered sets of integer ids with *O(log log capacity)* insert,
//! membership, and successor queries.
//!
//! A [`VebSet`] stores ids below a fixed power-of-two capacity in a
//! [van Emde Boas]–style recursive bit tree: one 64-bit word per 64 ids at
//! the bottom, and above that, branches that split each id into a cluster
//! index and an offset, with a summary structure of the same shape tracking
//! which clusters are live. Every branch caches its min and max, and the
//! min never sinks into a cluster, which holds inserts to a single full
//! recursion per level.
//!
//! The capacity is fixed at construction and the whole tree is allocated
//! up front. Growing is left to the owner: build a bigger set and reinsert
//! (the `idset` crate does exactly that to give ids an autogrowing home).
//!
//! ```
//! use vebset::VebSet;
//!
//! let mut set = VebSet::new(1000); // rounds up to 1024
//! assert_eq!(set.capacity(), 1024);
//! set.insert(3);
//! set.insert(900);
//! assert_eq!(set.successor(4), Some(900));
//! assert_eq!(set.iter().collect::<Vec<_>>(), vec![3, 900]);
//! ```
//!
//! [van Emde Boas]: https://en.wikipedia.org/wiki/Van_Emde_Boas_tree

#![no_std]

extern crate alloc;

mod node;

use core::fmt;
use core::iter::FusedIterator;

use self::node::Node;

/// An ordered set of `usize` ids bounded by a fixed power-of-two capacity.
///
/// Insert, membership, and [successor](VebSet::successor) run in
/// *O(log log capacity)*; [min](VebSet::min) and [max](VebSet::max) are O(1).
/// Memory use is proportional to the capacity regardless of how many ids
/// are actually present.
#[derive(Clone)]
pub struct VebSet {
    capacity: usize,
    root: Node,
}

impl VebSet {
    /// Create an empty set able to hold ids in `0..capacity()`, where the
    /// capacity is `capacity_hint` rounded up to the next power of two.
    ///
    /// Storage for the full tree is allocated eagerly.
    ///
    /// # Panics
    /// Panics if `capacity_hint` is zero, or so large that rounding it up
    /// overflows `usize`.
    pub fn new(capacity_hint: usize) -> VebSet {
        assert!(capacity_hint > 0, "capacity hint must be at least 1");
        let capacity = capacity_hint
            .checked_next_power_of_two()
            .expect("capacity overflow");
        VebSet {
            capacity,
            root: Node::empty(capacity),
        }
    }

    /// The number of ids this set can address; every member is below this.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// `true` if the set has no members. O(1).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Smallest member, or `None` when the set is empty. O(1).
    #[inline]
    pub fn min(&self) -> Option<usize> {
        self.root.min()
    }

    /// Largest member, or `None` when the set is empty. O(1).
    #[inline]
    pub fn max(&self) -> Option<usize> {
        self.root.max()
    }

    /// Check whether `id` is a member.
    ///
    /// Ids at or beyond the capacity are simply never members.
    #[inline]
    pub fn contains(&self, id: usize) -> bool {
        id < self.capacity && self.root.contains(id)
    }

    /// Add `id` to the set, returning `true` if it was not already present.
    ///
    /// # Panics
    /// Panics if `id` is not below [`VebSet::capacity`]; the tree never
    /// reallocates.
    pub fn insert(&mut self, id: usize) -> bool {
        assert!(
            id < self.capacity,
            "id {id} out of range for capacity {}",
            self.capacity,
        );
        self.root.insert(id)
    }

    /// Smallest member greater than or equal to `id`, or `None` if every
    /// member is below `id` (or the set is empty).
    #[inline]
    pub fn successor(&self, id: usize) -> Option<usize> {
        if id >= self.capacity {
            return None;
        }
        self.root.successor(id)
    }

    /// Visit the members in ascending order.
    ///
    /// The iterator walks the tree by repeated successor queries, so it
    /// costs *O(log log capacity)* per member rather than per capacity slot.
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            set: self,
            next: self.min(),
        }
    }
}

impl fmt::Debug for VebSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a VebSet {
    type Item = usize;
    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// Ascending iterator over the members of a [`VebSet`].
///
/// Created by [`VebSet::iter`].
#[derive(Clone)]
pub struct Iter<'a> {
    set: &'a VebSet,
    next: Option<usize>,
}

impl Iterator for Iter<'_> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        let current = self.next?;
        self.next = current
            .checked_add(1)
            .and_then(|from| self.set.successor(from));
        Some(current)
    }
}

impl FusedIterator for Iter<'_> {}
