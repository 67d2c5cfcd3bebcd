//! Sorted-order iteration over an Eytzinger layout.

use core::iter::FusedIterator;
use core::ops::{Bound, RangeBounds};

use crate::compare::Compare;
use crate::{layout, search};

/// Iterator over elements in sorted order.
///
/// Walks the implicit tree in-order with the successor/predecessor bit
/// tricks from [`layout`], so it never allocates. Double-ended and
/// exact-size.
///
/// Created by `sorted_iter()` and `range()` on the containers.
#[derive(Debug)]
pub struct SortedIter<'a, T> {
    data: &'a [T],
    /// Tree index of the next element from the front.
    front: usize,
    /// Tree index of the next element from the back.
    back: usize,
    remaining: usize,
}

impl<T> Clone for SortedIter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> SortedIter<'a, T> {
    /// Iterates every element of `data`.
    pub(crate) fn new(data: &'a [T]) -> Self {
        let n = data.len();
        Self {
            data,
            front: layout::first(n),
            back: layout::last(n),
            remaining: n,
        }
    }

    /// Iterates the elements of `data` that fall inside `range`.
    ///
    /// Yields nothing if the start bound lies after the end bound.
    pub(crate) fn range<C, R>(data: &'a [T], cmp: &C, range: R) -> Self
    where
        C: Compare<T>,
        R: RangeBounds<T>,
    {
        let n = data.len();

        let start = match range.start_bound() {
            Bound::Included(v) => search::lower_bound(data, v, cmp),
            Bound::Excluded(v) => search::upper_bound(data, v, cmp),
            Bound::Unbounded => layout::first(n),
        };
        // Exclusive end; 0 is past the largest element.
        let end = match range.end_bound() {
            Bound::Included(v) => search::upper_bound(data, v, cmp),
            Bound::Excluded(v) => search::lower_bound(data, v, cmp),
            Bound::Unbounded => 0,
        };

        let remaining = layout::rank_of(end, n).saturating_sub(layout::rank_of(start, n));
        if remaining == 0 {
            return Self {
                data,
                front: 0,
                back: 0,
                remaining: 0,
            };
        }

        let back = if end == 0 {
            layout::last(n)
        } else {
            layout::predecessor(end, n)
        };
        Self {
            data,
            front: start,
            back,
            remaining,
        }
    }
}

impl<'a, T> Iterator for SortedIter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let item = &self.data[self.front - 1];
        self.remaining -= 1;
        if self.remaining > 0 {
            self.front = layout::successor(self.front, self.data.len());
        }
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for SortedIter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let item = &self.data[self.back - 1];
        self.remaining -= 1;
        if self.remaining > 0 {
            self.back = layout::predecessor(self.back, self.data.len());
        }
        Some(item)
    }
}

impl<T> ExactSizeIterator for SortedIter<'_, T> {}

impl<T> FusedIterator for SortedIter<'_, T> {}
