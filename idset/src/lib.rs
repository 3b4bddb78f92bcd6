//! Growable sets of integer ids with a compact range-notation string form.
//!
//! An [`IdSet`] keeps `usize` ids (task ranks, node numbers, cpu indices)
//! in a [van Emde Boas bit tree](vebset::VebSet) and converts to and from
//! the `"lo-hi,id,..."` notation used to pass rank sets around in
//! configuration values and message payloads:
//!
//! ```
//! use idset::{EncodeOptions, IdSet};
//!
//! let ranks = IdSet::decode("[0-3,9]")?;
//! assert!(ranks.contains(2));
//! assert_eq!(ranks.len(), 5);
//! assert_eq!(
//!     ranks.encode(EncodeOptions { brackets: true, range: true }),
//!     "[0-3,9]",
//! );
//! # Ok::<(), idset::Error>(())
//! ```
//!
//! Sets autogrow by default: inserting an id beyond the current capacity
//! doubles the capacity until the id fits, keeping every existing member.
//! [`IdSet::with_fixed_capacity`] turns that off for callers that want a
//! hard bound instead.
//!
//! Membership, insertion, and ordered iteration all lean on the tree's
//! *O(log log capacity)* successor queries, so even sparse sets over large
//! id spaces stay cheap to walk.

extern crate alloc;

mod decode;
mod encode;
mod error;
mod iter;
#[cfg(feature = "serde")]
mod serde;

pub use self::encode::EncodeOptions;
pub use self::error::Error;
pub use self::iter::{IntoIter, Iter};

use core::cmp::Ordering;
use core::fmt::{self, Debug, Display, Formatter};
use core::hash::{Hash, Hasher};
use core::ops::Index;

use vebset::VebSet;

use self::error::Result;

/// An ordered set of `usize` ids.
///
/// Memory is proportional to the capacity (one bit per addressable id plus
/// tree overhead), so this suits dense-ish id spaces like ranks, not
/// arbitrary sparse integers.
#[derive(Clone)]
pub struct IdSet {
    tree: VebSet,
    len: usize,
    autogrow: bool,
}

impl IdSet {
    /// Capacity hint used by [`IdSet::new`] and [`IdSet::decode`].
    pub const DEFAULT_CAPACITY: usize = 1024;

    /// Create an empty autogrowing set with the default capacity hint.
    #[inline]
    pub fn new() -> IdSet {
        IdSet {
            tree: VebSet::new(Self::DEFAULT_CAPACITY),
            len: 0,
            autogrow: true,
        }
    }

    /// Create an empty autogrowing set sized for ids below `capacity_hint`.
    ///
    /// The actual capacity is the hint rounded up to a power of two; it
    /// only matters as a starting size, since the set grows on demand.
    ///
    /// # Errors
    /// Fails with [`Error::ZeroCapacity`] for a zero hint, or
    /// [`Error::CapacityOverflow`] if rounding the hint up overflows
    /// `usize`.
    pub fn with_capacity(capacity_hint: usize) -> Result<IdSet> {
        IdSet::build(capacity_hint, true)
    }

    /// Create an empty set with a hard capacity bound: inserting an id at
    /// or beyond the rounded capacity fails with [`Error::IdOutOfRange`]
    /// instead of growing.
    ///
    /// # Errors
    /// Fails with [`Error::ZeroCapacity`] for a zero hint, or
    /// [`Error::CapacityOverflow`] if rounding the hint up overflows
    /// `usize`.
    pub fn with_fixed_capacity(capacity_hint: usize) -> Result<IdSet> {
        IdSet::build(capacity_hint, false)
    }

    fn build(capacity_hint: usize, autogrow: bool) -> Result<IdSet> {
        if capacity_hint == 0 {
            return Err(Error::ZeroCapacity);
        }
        if capacity_hint.checked_next_power_of_two().is_none() {
            return Err(Error::CapacityOverflow {
                id: capacity_hint - 1,
            });
        }
        Ok(IdSet {
            tree: VebSet::new(capacity_hint),
            len: 0,
            autogrow,
        })
    }

    /// Insert the specified id into the set,
    /// returning `true` if it was newly added and `false` if already there.
    ///
    /// # Errors
    /// With autogrow off, ids at or beyond [`IdSet::capacity`] fail with
    /// [`Error::IdOutOfRange`]. With autogrow on, the only failure is
    /// [`Error::CapacityOverflow`] when no power-of-two capacity can cover
    /// the id.
    pub fn insert(&mut self, id: usize) -> Result<bool> {
        if self.autogrow {
            let slots = id.checked_add(1).ok_or(Error::CapacityOverflow { id })?;
            self.grow(slots)?;
        } else if id >= self.tree.capacity() {
            return Err(Error::IdOutOfRange {
                id,
                capacity: self.tree.capacity(),
            });
        }
        let newly = self.tree.insert(id);
        if newly {
            self.len += 1;
        }
        Ok(newly)
    }

    /// Double the capacity until it is strictly greater than `slots`, then
    /// rebuild the tree at the new size and reinsert every member. No-op
    /// when the current capacity is already past `slots`.
    fn grow(&mut self, slots: usize) -> Result<()> {
        let mut target = self.tree.capacity();
        while target <= slots {
            target = target
                .checked_mul(2)
                .ok_or(Error::CapacityOverflow { id: slots - 1 })?;
        }
        if target == self.tree.capacity() {
            return Ok(());
        }
        let mut grown = VebSet::new(target);
        for id in &self.tree {
            grown.insert(id);
        }
        self.tree = grown;
        Ok(())
    }

    /// Check if this set contains the specified id.
    ///
    /// Ids at or beyond the capacity are simply never members.
    #[inline]
    pub fn contains(&self, id: usize) -> bool {
        self.tree.contains(id)
    }

    /// Iterate over the ids in this set, in ascending order.
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    /// The number of ids in this set.
    ///
    /// An [`IdSet`] internally tracks this count, so this is a `O(1)`
    /// operation.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// If this set is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The current capacity: a power of two strictly above every member.
    ///
    /// Grows (never shrinks) as autogrow inserts demand it.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.tree.capacity()
    }

    /// Whether inserting an out-of-range id grows the set instead of
    /// failing.
    #[inline]
    pub fn autogrow(&self) -> bool {
        self.autogrow
    }

    /// The smallest id in the set, or `None` when empty. O(1).
    #[inline]
    pub fn first(&self) -> Option<usize> {
        self.tree.min()
    }

    /// The largest id in the set, or `None` when empty. O(1).
    #[inline]
    pub fn last(&self) -> Option<usize> {
        self.tree.max()
    }
}

/// Panic for ids the set cannot store, on behalf of the infallible trait
/// surfaces like [`Extend`].
#[cold]
#[inline(never)]
#[track_caller]
fn unstorable_id(id: usize, cause: &Error) -> ! {
    panic!("cannot store id {id}: {cause}")
}

impl Default for IdSet {
    #[inline]
    fn default() -> Self {
        IdSet::new()
    }
}
impl PartialEq for IdSet {
    #[inline]
    fn eq(&self, other: &IdSet) -> bool {
        // capacity and growth mode are deliberately ignored
        self.len == other.len && self.iter().eq(other.iter())
    }
}
impl Eq for IdSet {}
impl Debug for IdSet {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
impl Display for IdSet {
    /// The bracketed range form, e.g. `[1-3,7]`.
    ///
    /// Singletons and the empty set print bare, matching
    /// [`IdSet::encode`]'s bracket suppression.
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(&self.encode(EncodeOptions {
            brackets: true,
            range: true,
        }))
    }
}
/// Inserts every id, growing as needed.
///
/// Panics if an id cannot be stored (a fixed-capacity set ran out of room,
/// or the capacity overflowed); use [`IdSet::insert`] to handle that as an
/// error instead.
impl Extend<usize> for IdSet {
    #[inline]
    fn extend<I: IntoIterator<Item = usize>>(&mut self, iter: I) {
        for id in iter {
            if let Err(cause) = self.insert(id) {
                unstorable_id(id, &cause);
            }
        }
    }
}
impl<'a> Extend<&'a usize> for IdSet {
    #[inline]
    fn extend<I: IntoIterator<Item = &'a usize>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}
impl FromIterator<usize> for IdSet {
    #[inline]
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut set = IdSet::new();
        set.extend(iter);
        set
    }
}

impl<'a> FromIterator<&'a usize> for IdSet {
    #[inline]
    fn from_iter<I: IntoIterator<Item = &'a usize>>(iter: I) -> Self {
        iter.into_iter().copied().collect()
    }
}

impl Index<usize> for IdSet {
    type Output = bool;

    #[inline]
    fn index(&self, id: usize) -> &Self::Output {
        const TRUE_REF: &bool = &true;
        const FALSE_REF: &bool = &false;
        if self.contains(id) {
            TRUE_REF
        } else {
            FALSE_REF
        }
    }
}
impl Hash for IdSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        // iteration order is ascending, so equal sets hash equally
        for id in self.iter() {
            id.hash(state);
        }
    }
}
impl PartialOrd for IdSet {
    #[inline]
    fn partial_cmp(&self, other: &IdSet) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for IdSet {
    #[inline]
    fn cmp(&self, other: &IdSet) -> Ordering {
        self.iter().cmp(other.iter())
    }
}
