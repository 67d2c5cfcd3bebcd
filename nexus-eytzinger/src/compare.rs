//! Strict weak orderings used to sort and search a layout.
//!
//! A container holds its comparator for its whole lifetime, so the order
//! used to build the layout is always the order used to search it.

use core::cmp::Ordering;

/// A strict weak ordering over `T`.
///
/// `less(a, b)` must be irreflexive and transitive, and incomparability
/// must be transitive. Two elements are *equivalent* when neither is less
/// than the other.
///
/// Any `Fn(&T, &T) -> bool` closure is a comparator:
///
/// ```
/// use nexus_eytzinger::EytzingerArray;
///
/// // Order by absolute value.
/// let arr = EytzingerArray::with_comparator([-3i32, 1, -2], |a: &i32, b: &i32| {
///     a.abs() < b.abs()
/// });
/// let sorted: Vec<_> = arr.sorted_iter().copied().collect();
/// assert_eq!(sorted, [1, -2, -3]);
/// ```
pub trait Compare<T: ?Sized> {
    /// Returns `true` if `a` is ordered strictly before `b`.
    fn less(&self, a: &T, b: &T) -> bool;

    /// Total ordering derived from [`less`](Compare::less).
    ///
    /// Equivalent elements compare as [`Ordering::Equal`].
    #[inline]
    fn ordering(&self, a: &T, b: &T) -> Ordering {
        if self.less(a, b) {
            Ordering::Less
        } else if self.less(b, a) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    /// Returns `true` if neither element is less than the other.
    #[inline]
    fn equivalent(&self, a: &T, b: &T) -> bool {
        !self.less(a, b) && !self.less(b, a)
    }
}

/// Ascending order via [`Ord`]. The default comparator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Natural;

impl<T: Ord + ?Sized> Compare<T> for Natural {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        a < b
    }

    #[inline]
    fn ordering(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Descending order via [`Ord`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Reverse;

impl<T: Ord + ?Sized> Compare<T> for Reverse {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        b < a
    }

    #[inline]
    fn ordering(&self, a: &T, b: &T) -> Ordering {
        b.cmp(a)
    }
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}
