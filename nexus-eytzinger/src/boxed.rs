//! Runtime-sized Eytzinger array in a single heap allocation.

use core::ops::{Index, RangeBounds};

use crate::compare::{Compare, Natural};
use crate::iter::SortedIter;
use crate::{layout, search};

/// An immutable sorted array in Eytzinger layout, sized at runtime.
///
/// Same layout and search as [`EytzingerArray`](crate::EytzingerArray),
/// for when the element count is only known at startup. The buffer is a
/// single `Box<[T]>` allocated once and never resized.
///
/// # Example
///
/// ```
/// use nexus_eytzinger::BoxedEytzinger;
///
/// let prices: BoxedEytzinger<u64> = (0..1000).map(|i| i * 5).collect();
///
/// assert!(prices.contains(&495));
/// assert!(!prices.contains(&496));
/// assert_eq!(prices.lower_bound(&496), Some(&500));
/// assert_eq!(prices.find(&5000), None);
/// ```
#[derive(Debug, Clone)]
pub struct BoxedEytzinger<T, C = Natural> {
    data: Box<[T]>,
    cmp: C,
}

impl<T: Ord> BoxedEytzinger<T> {
    /// Builds the layout in ascending [`Ord`] order.
    ///
    /// # Panics
    ///
    /// Panics if `data.len()` exceeds [`MAX_LEN`](crate::MAX_LEN).
    pub fn new(data: Vec<T>) -> Self {
        Self::with_comparator(data, Natural)
    }
}

impl<T, C: Compare<T>> BoxedEytzinger<T, C> {
    /// Builds the layout under a custom ordering.
    ///
    /// # Panics
    ///
    /// Panics if `data.len()` exceeds [`MAX_LEN`](crate::MAX_LEN).
    pub fn with_comparator(data: Vec<T>, cmp: C) -> Self {
        let mut data = data.into_boxed_slice();
        layout::build(&mut data, &cmp);
        Self { data, cmp }
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if there are no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the comparator.
    #[inline]
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Returns the backing buffer in layout order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns a raw pointer to the backing buffer.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.data.as_ptr()
    }

    /// Iterates in layout order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Returns the element at layout position `pos`, or `None` if out of
    /// bounds.
    #[inline]
    pub fn get_at(&self, pos: usize) -> Option<&T> {
        self.data.get(pos)
    }

    /// Returns the element at layout position `pos` without bounds checking.
    ///
    /// # Safety
    ///
    /// `pos` must be less than `self.len()`.
    #[inline]
    pub unsafe fn get_unchecked(&self, pos: usize) -> &T {
        // SAFETY: caller guarantees pos < len.
        unsafe { self.data.get_unchecked(pos) }
    }

    // ========================================================================
    // Search
    // ========================================================================

    /// Returns the layout position of the first element not less than
    /// `value`, or `None` if every element is less than `value`.
    ///
    /// See [`EytzingerArray::find`](crate::EytzingerArray::find).
    #[inline]
    pub fn find(&self, value: &T) -> Option<usize> {
        search::lower_bound(&self.data, value, &self.cmp).checked_sub(1)
    }

    /// Returns the first element not less than `value`.
    #[inline]
    pub fn lower_bound(&self, value: &T) -> Option<&T> {
        self.find(value).map(|pos| &self.data[pos])
    }

    /// Returns the first element greater than `value`.
    #[inline]
    pub fn upper_bound(&self, value: &T) -> Option<&T> {
        let k = search::upper_bound(&self.data, value, &self.cmp);
        k.checked_sub(1).map(|pos| &self.data[pos])
    }

    /// Returns an element equivalent to `value`.
    #[inline]
    pub fn get(&self, value: &T) -> Option<&T> {
        let k = search::exact(&self.data, value, &self.cmp);
        k.checked_sub(1).map(|pos| &self.data[pos])
    }

    /// Returns `true` if an element equivalent to `value` is present.
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        search::exact(&self.data, value, &self.cmp) != 0
    }

    /// Returns the number of elements less than `value`.
    pub fn rank(&self, value: &T) -> usize {
        let k = search::lower_bound(&self.data, value, &self.cmp);
        layout::rank_of(k, self.data.len())
    }

    /// Returns the element at sorted rank `rank` (0 is the smallest).
    pub fn select(&self, rank: usize) -> Option<&T> {
        layout::index_of_rank(rank, self.data.len())
            .checked_sub(1)
            .map(|pos| &self.data[pos])
    }

    /// Returns the smallest element.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        let k = layout::first(self.data.len());
        k.checked_sub(1).map(|pos| &self.data[pos])
    }

    /// Returns the largest element.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        let k = layout::last(self.data.len());
        k.checked_sub(1).map(|pos| &self.data[pos])
    }

    // ========================================================================
    // Sorted iteration
    // ========================================================================

    /// Iterates in sorted order.
    #[inline]
    pub fn sorted_iter(&self) -> SortedIter<'_, T> {
        SortedIter::new(&self.data)
    }

    /// Iterates the elements within `range`, in sorted order.
    pub fn range<R: RangeBounds<T>>(&self, range: R) -> SortedIter<'_, T> {
        SortedIter::range(&self.data, &self.cmp, range)
    }

    /// Returns the backing buffer in layout order.
    pub fn into_boxed_slice(self) -> Box<[T]> {
        self.data
    }
}

impl<T: Ord> From<Vec<T>> for BoxedEytzinger<T> {
    fn from(data: Vec<T>) -> Self {
        Self::new(data)
    }
}

impl<T: Ord> From<Box<[T]>> for BoxedEytzinger<T> {
    fn from(data: Box<[T]>) -> Self {
        Self::new(data.into_vec())
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for BoxedEytzinger<T> {
    fn from(data: [T; N]) -> Self {
        Self::new(Vec::from(data))
    }
}

impl<T: Ord> FromIterator<T> for BoxedEytzinger<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T, C> Index<usize> for BoxedEytzinger<T, C> {
    type Output = T;

    /// Element at layout position `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos >= len`.
    #[inline]
    fn index(&self, pos: usize) -> &T {
        &self.data[pos]
    }
}

impl<T, C> AsRef<[T]> for BoxedEytzinger<T, C> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

impl<'a, T, C> IntoIterator for &'a BoxedEytzinger<T, C> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
