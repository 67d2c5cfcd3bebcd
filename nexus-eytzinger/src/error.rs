//! Error types for fallible construction.

use core::fmt;

/// Input length does not match the container's fixed size.
///
/// Returned by `TryFrom<Vec<T>>` for [`EytzingerArray`](crate::EytzingerArray).
/// Carries the rejected input back to the caller.
///
/// # Example
///
/// ```
/// use nexus_eytzinger::{EytzingerArray, LengthMismatch};
///
/// let err = EytzingerArray::<u32, 4>::try_from(vec![1, 2, 3]).unwrap_err();
/// assert_eq!(err.expected, 4);
/// assert_eq!(err.actual(), 3);
/// assert_eq!(err.into_inner(), vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthMismatch<T> {
    /// Length the container requires.
    pub expected: usize,
    /// The rejected input.
    pub value: Vec<T>,
}

impl<T> LengthMismatch<T> {
    /// Length of the rejected input.
    #[inline]
    pub fn actual(&self) -> usize {
        self.value.len()
    }

    /// Returns the rejected input.
    pub fn into_inner(self) -> Vec<T> {
        self.value
    }
}

impl<T> fmt::Display for LengthMismatch<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "expected {} elements, got {}",
            self.expected,
            self.actual()
        )
    }
}

impl<T: fmt::Debug> std::error::Error for LengthMismatch<T> {}
