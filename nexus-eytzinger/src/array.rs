//! Fixed-size Eytzinger array with inline storage.

use core::ops::{Index, RangeBounds};

use crate::compare::{Compare, Natural};
use crate::error::LengthMismatch;
use crate::iter::SortedIter;
use crate::{layout, search};

/// An immutable sorted array of exactly `N` elements in Eytzinger layout.
///
/// Elements are sorted by the comparator `C` at construction and then
/// permuted into breadth-first order of an implicit binary search tree.
/// The array is never modified afterwards, so a shared reference can be
/// searched from any number of threads.
///
/// Positional access ([`Index`], [`iter`](Self::iter),
/// [`as_slice`](Self::as_slice)) is in *layout* order. Use
/// [`sorted_iter`](Self::sorted_iter) for sorted order.
///
/// # Example
///
/// ```
/// use nexus_eytzinger::EytzingerArray;
///
/// let arr = EytzingerArray::new([5, 3, 1, 4, 2]);
/// assert_eq!(arr.as_slice(), &[4, 2, 5, 1, 3]);
///
/// let pos = arr.find(&5).unwrap();
/// assert_eq!(pos, 2);
/// assert_eq!(arr[pos], 5);
///
/// // Lower-bound semantics: 0 lands on the smallest element,
/// // 6 is past the largest.
/// assert_eq!(arr.find(&0).map(|p| arr[p]), Some(1));
/// assert_eq!(arr.find(&6), None);
/// ```
#[derive(Debug, Clone)]
pub struct EytzingerArray<T, const N: usize, C = Natural> {
    data: [T; N],
    cmp: C,
}

impl<T: Ord, const N: usize> EytzingerArray<T, N> {
    /// Builds the layout in ascending [`Ord`] order.
    ///
    /// # Panics
    ///
    /// Panics if `N` exceeds [`MAX_LEN`](crate::MAX_LEN).
    pub fn new(data: [T; N]) -> Self {
        Self::with_comparator(data, Natural)
    }
}

impl<T, const N: usize, C: Compare<T>> EytzingerArray<T, N, C> {
    /// Builds the layout under a custom ordering.
    ///
    /// `cmp` is kept for every later search.
    ///
    /// # Panics
    ///
    /// Panics if `N` exceeds [`MAX_LEN`](crate::MAX_LEN).
    ///
    /// # Example
    ///
    /// ```
    /// use nexus_eytzinger::{EytzingerArray, Reverse};
    ///
    /// let arr = EytzingerArray::with_comparator([1, 2, 3, 4, 5], Reverse);
    /// let sorted: Vec<_> = arr.sorted_iter().copied().collect();
    /// assert_eq!(sorted, [5, 4, 3, 2, 1]);
    /// ```
    pub fn with_comparator(mut data: [T; N], cmp: C) -> Self {
        layout::build(&mut data, &cmp);
        Self { data, cmp }
    }

    /// Returns the number of elements, `N`.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// Returns `true` if `N == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
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
    ///
    /// The buffer is never written after construction.
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
    /// `pos` must be less than `N`.
    #[inline]
    pub unsafe fn get_unchecked(&self, pos: usize) -> &T {
        // SAFETY: caller guarantees pos < N.
        unsafe { self.data.get_unchecked(pos) }
    }

    // ========================================================================
    // Search
    // ========================================================================

    /// Returns the layout position of the first element not less than
    /// `value`, or `None` if every element is less than `value`.
    ///
    /// This is a lower-bound search: the element found is not necessarily
    /// equivalent to `value`. Use [`get`](Self::get) or
    /// [`contains`](Self::contains) for exact matches. Among equivalent
    /// elements, which one is found is unspecified.
    ///
    /// # Example
    ///
    /// ```
    /// use nexus_eytzinger::EytzingerArray;
    ///
    /// let arr = EytzingerArray::new([10, 20, 30]);
    /// let pos = arr.find(&15).unwrap();
    /// assert_eq!(arr[pos], 20);
    /// ```
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
    ///
    /// # Example
    ///
    /// ```
    /// use nexus_eytzinger::EytzingerArray;
    ///
    /// let arr = EytzingerArray::new([10, 20, 30]);
    /// assert_eq!(arr.get(&20), Some(&20));
    /// assert_eq!(arr.get(&15), None);
    /// ```
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
    ///
    /// Equal to the sorted rank `value` would have if inserted.
    pub fn rank(&self, value: &T) -> usize {
        let k = search::lower_bound(&self.data, value, &self.cmp);
        layout::rank_of(k, N)
    }

    /// Returns the element at sorted rank `rank` (0 is the smallest).
    pub fn select(&self, rank: usize) -> Option<&T> {
        layout::index_of_rank(rank, N)
            .checked_sub(1)
            .map(|pos| &self.data[pos])
    }

    /// Returns the smallest element.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        layout::first(N).checked_sub(1).map(|pos| &self.data[pos])
    }

    /// Returns the largest element.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        layout::last(N).checked_sub(1).map(|pos| &self.data[pos])
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
    ///
    /// Yields nothing if the start bound lies after the end bound.
    ///
    /// # Example
    ///
    /// ```
    /// use nexus_eytzinger::EytzingerArray;
    ///
    /// let arr = EytzingerArray::new([50, 10, 40, 20, 30]);
    /// let mid: Vec<_> = arr.range(15..=40).copied().collect();
    /// assert_eq!(mid, [20, 30, 40]);
    /// ```
    pub fn range<R: RangeBounds<T>>(&self, range: R) -> SortedIter<'_, T> {
        SortedIter::range(&self.data, &self.cmp, range)
    }

    /// Returns the backing array in layout order.
    pub fn into_inner(self) -> [T; N] {
        self.data
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for EytzingerArray<T, N> {
    fn from(data: [T; N]) -> Self {
        Self::new(data)
    }
}

impl<T: Ord, const N: usize> TryFrom<Vec<T>> for EytzingerArray<T, N> {
    type Error = LengthMismatch<T>;

    fn try_from(value: Vec<T>) -> Result<Self, Self::Error> {
        match <[T; N]>::try_from(value) {
            Ok(data) => Ok(Self::new(data)),
            Err(value) => Err(LengthMismatch { expected: N, value }),
        }
    }
}

impl<T, const N: usize, C> Index<usize> for EytzingerArray<T, N, C> {
    type Output = T;

    /// Element at layout position `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos >= N`.
    #[inline]
    fn index(&self, pos: usize) -> &T {
        &self.data[pos]
    }
}

impl<T, const N: usize, C> AsRef<[T]> for EytzingerArray<T, N, C> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

impl<'a, T, const N: usize, C> IntoIterator for &'a EytzingerArray<T, N, C> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T, const N: usize, C> IntoIterator for EytzingerArray<T, N, C> {
    type Item = T;
    type IntoIter = core::array::IntoIter<T, N>;

    /// Consumes the array, yielding elements in layout order.
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}
