//! Immutable sorted arrays in Eytzinger layout with branch-free search.
//!
//! This crate provides lookup tables for latency-critical systems where a
//! set of keys (instrument IDs, price ticks, symbol codes) is known at
//! startup and searched on the hot path. The key insight: store the sorted
//! keys in breadth-first order instead of sorted order.
//!
//! # Design Philosophy
//!
//! A plain sorted array halves the search range each step, but the probes
//! jump all over memory and the comparison result decides a hard-to-predict
//! branch:
//!
//! ```text
//! sorted:     [1, 2, 3, 4, 5, 6, 7]      probes: 4 -> 2 -> 3 (scattered)
//! ```
//!
//! The Eytzinger layout stores the implicit binary search tree level by
//! level. The root is first, its children next, and so on:
//!
//! ```text
//!                4
//!              /   \
//!             2     6
//!            / \   / \
//!           1   3 5   7
//!
//! eytzinger:  [4, 2, 6, 1, 3, 5, 7]      children of k: 2k, 2k+1
//! ```
//!
//! Benefits:
//! - **Branch-free descent**: `k = 2k + (node < target)` replaces the
//!   mispredicted branch with arithmetic
//! - **Cache-friendly top levels**: the first levels of every search share
//!   the same few cache lines
//! - **No pointers, no index table**: positions are pure arithmetic on `k`
//! - **Zero allocation on hot path**: the buffer is built once and never
//!   changes
//!
//! # Quick Start
//!
//! ```
//! use nexus_eytzinger::EytzingerArray;
//!
//! let arr = EytzingerArray::new([5, 3, 1, 4, 2]);
//!
//! // Buffer is in layout order, not sorted order.
//! assert_eq!(arr.as_slice(), &[4, 2, 5, 1, 3]);
//!
//! // find returns a layout position.
//! let pos = arr.find(&5).unwrap();
//! assert_eq!(arr[pos], 5);
//!
//! // Sorted order is still available.
//! let sorted: Vec<_> = arr.sorted_iter().copied().collect();
//! assert_eq!(sorted, [1, 2, 3, 4, 5]);
//! ```
//!
//! # Search Semantics
//!
//! [`find`](EytzingerArray::find) is a lower-bound search. It returns the
//! position of the first element (in sorted order) that is *not less* than
//! the target, or `None` when every element is less than the target:
//!
//! ```
//! use nexus_eytzinger::EytzingerArray;
//!
//! let arr = EytzingerArray::new([10, 20, 30]);
//!
//! assert_eq!(arr.find(&20).map(|p| arr[p]), Some(20)); // present
//! assert_eq!(arr.find(&15).map(|p| arr[p]), Some(20)); // between
//! assert_eq!(arr.find(&5).map(|p| arr[p]), Some(10));  // below all
//! assert_eq!(arr.find(&35), None);                     // above all
//!
//! // Exact matches
//! assert_eq!(arr.get(&15), None);
//! assert!(arr.contains(&30));
//! ```
//!
//! With duplicate elements, which of the equal elements is found is
//! unspecified.
//!
//! # Containers
//!
//! | Type | Size | Storage | Use Case |
//! |------|------|---------|----------|
//! | [`EytzingerArray`] | `N`, compile time | Inline `[T; N]` | Static tables |
//! | [`BoxedEytzinger`] | Runtime | Single `Box<[T]>` | Tables loaded at startup |
//!
//! Both take an optional comparator ([`Natural`] by default, [`Reverse`],
//! or any `Fn(&T, &T) -> bool`). The comparator is stored with the data
//! so construction and search always agree on the order.
//!
//! # Size Limit
//!
//! At most [`MAX_LEN`] (`usize::MAX >> 1`) elements, so the walking index
//! `2k + 1` always fits in a `usize`.
//!
//! # Low-level API
//!
//! The [`layout`] and [`search`] modules expose the permutation and the
//! descent over plain slices, using 1-based tree indices with `0` as "none".

#![warn(missing_docs)]

pub mod array;
pub mod boxed;
pub mod compare;
pub mod error;
pub mod iter;
pub mod layout;
pub mod search;

pub use array::EytzingerArray;
pub use boxed::BoxedEytzinger;
pub use compare::{Compare, Natural, Reverse};
pub use error::LengthMismatch;
pub use iter::SortedIter;
pub use layout::MAX_LEN;

/// Builds an [`EytzingerArray`] from a list of elements, inferring `N`.
///
/// # Example
///
/// ```
/// use nexus_eytzinger::eytzinger;
///
/// let arr = eytzinger![30, 10, 20];
/// assert_eq!(arr.len(), 3);
/// assert_eq!(arr.as_slice(), &[20, 10, 30]);
/// ```
#[macro_export]
macro_rules! eytzinger {
    ($($value:expr),* $(,)?) => {
        $crate::EytzingerArray::new([$($value),*])
    };
}
