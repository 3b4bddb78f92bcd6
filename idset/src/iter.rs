//! Ascending iterators over an [`IdSet`](crate::IdSet)'s members.

use core::iter::FusedIterator;

use crate::IdSet;

/// Borrowing iterator over the ids in an [`IdSet`], ascending.
///
/// Created by [`IdSet::iter`].
#[derive(Clone)]
pub struct Iter<'a> {
    walk: vebset::Iter<'a>,
    remaining: usize,
}

impl<'a> Iter<'a> {
    #[inline]
    pub(crate) fn new(set: &'a IdSet) -> Iter<'a> {
        Iter {
            walk: set.tree.iter(),
            remaining: set.len,
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        let id = self.walk.next()?;
        self.remaining -= 1;
        Some(id)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }

    #[inline]
    fn count(self) -> usize {
        self.remaining
    }
}
impl ExactSizeIterator for Iter<'_> {}
impl FusedIterator for Iter<'_> {}

/// Owning iterator over the ids in an [`IdSet`], ascending.
#[derive(Clone)]
pub struct IntoIter {
    set: IdSet,
    next: Option<usize>,
    remaining: usize,
}

impl Iterator for IntoIter {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        let id = self.next?;
        self.next = id
            .checked_add(1)
            .and_then(|from| self.set.tree.successor(from));
        self.remaining -= 1;
        Some(id)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }

    #[inline]
    fn count(self) -> usize {
        self.remaining
    }
}
impl ExactSizeIterator for IntoIter {}
impl FusedIterator for IntoIter {}

impl<'a> IntoIterator for &'a IdSet {
    type Item = usize;
    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
impl IntoIterator for IdSet {
    type Item = usize;
    type IntoIter = IntoIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            next: self.first(),
            remaining: self.len,
            set: self,
        }
    }
}
