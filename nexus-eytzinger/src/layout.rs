//! Eytzinger layout construction and implicit-tree index arithmetic.
//!
//! Positions are described by 1-based *tree indices*: the root is `1`, and
//! node `k` has children `2k` and `2k + 1`. Tree index `k` lives at buffer
//! position `k - 1`. Index `0` never names a node and is used as the
//! "no node" result throughout.
//!
//! ```text
//! sorted:  [1, 2, 3, 4, 5]
//!
//!             4 (k=1)
//!            / \
//!     (k=2) 2   5 (k=3)
//!          / \
//!   (k=4) 1   3 (k=5)
//!
//! layout:  [4, 2, 5, 1, 3]
//! ```
//!
//! An in-order walk of the tree visits the sorted order. The bijection
//! between sorted rank and tree index is a pure function of `n`, so no
//! index table is stored alongside the data.

use crate::compare::Compare;

/// Largest supported number of elements.
///
/// The search walk computes `2k + 1` for `k <= n`, which must fit in a
/// `usize`.
pub const MAX_LEN: usize = usize::MAX >> 1;

/// Sorts `data` under `cmp` and permutes it into Eytzinger order.
///
/// After this returns, an in-order walk of the implicit tree over `data`
/// yields the elements in sorted order. Equal elements keep no particular
/// relative order.
///
/// Allocates a temporary rank table of `data.len()` entries.
///
/// # Panics
///
/// Panics if `data.len()` exceeds [`MAX_LEN`].
///
/// # Example
///
/// ```
/// use nexus_eytzinger::{Natural, layout};
///
/// let mut data = [5, 3, 1, 4, 2];
/// layout::build(&mut data, &Natural);
/// assert_eq!(data, [4, 2, 5, 1, 3]);
/// ```
pub fn build<T, C: Compare<T>>(data: &mut [T], cmp: &C) {
    let n = data.len();
    assert!(n <= MAX_LEN, "length {n} exceeds MAX_LEN");

    data.sort_unstable_by(|a, b| cmp.ordering(a, b));

    let mut ranks = vec![0usize; n];
    let consumed = assign_ranks(&mut ranks, 0, 1);
    debug_assert_eq!(consumed, n);

    gather(data, &mut ranks);
}

/// In-order walk from tree index `k`, writing the next sorted rank into
/// each visited position. Returns the next unconsumed rank.
///
/// Recursion depth is the tree height, `floor(log2(n)) + 1`.
fn assign_ranks(ranks: &mut [usize], mut next: usize, k: usize) -> usize {
    if k <= ranks.len() {
        next = assign_ranks(ranks, next, 2 * k);
        ranks[k - 1] = next;
        next += 1;
        next = assign_ranks(ranks, next, 2 * k + 1);
    }
    next
}

/// Applies `data[i] = old_data[src[i]]` in place by following cycles.
///
/// `src` is consumed as visited-marks: each slot is reset to its own index
/// once placed.
fn gather<T>(data: &mut [T], src: &mut [usize]) {
    for start in 0..data.len() {
        if src[start] == start {
            continue;
        }
        let mut cur = start;
        loop {
            let next = src[cur];
            src[cur] = cur;
            if next == start {
                break;
            }
            data.swap(cur, next);
            cur = next;
        }
    }
}

/// Strips the trailing run of one-bits and one more bit from `k`.
///
/// Walking up from `k`, this is the parent of the first ancestor (or `k`
/// itself) that is a left child, i.e. the nearest ancestor whose left
/// subtree contains `k`. Returns `0` if there is none.
#[inline]
pub(crate) fn strip_right_run(k: usize) -> usize {
    k.checked_shr(k.trailing_ones() + 1).unwrap_or(0)
}

/// Strips the trailing run of zero-bits and one more bit from `k`.
///
/// Mirror of [`strip_right_run`]: the nearest ancestor whose right subtree
/// contains `k`, or `0`.
#[inline]
pub(crate) fn strip_left_run(k: usize) -> usize {
    k.checked_shr(k.trailing_zeros() + 1).unwrap_or(0)
}

/// Tree index of the smallest element, or `0` if `n == 0`.
#[inline]
pub fn first(n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    leftmost(1, n)
}

/// Tree index of the largest element, or `0` if `n == 0`.
#[inline]
pub fn last(n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    rightmost(1, n)
}

#[inline]
fn leftmost(mut k: usize, n: usize) -> usize {
    while 2 * k <= n {
        k *= 2;
    }
    k
}

#[inline]
fn rightmost(mut k: usize, n: usize) -> usize {
    while 2 * k < n {
        k = 2 * k + 1;
    }
    k
}

/// In-order successor of tree index `k` in a tree of `n` nodes.
///
/// Returns `0` when `k` holds the largest element.
///
/// # Example
///
/// ```
/// use nexus_eytzinger::layout;
///
/// // [4, 2, 5, 1, 3]: after 3 (k=5) comes 4 (k=1).
/// assert_eq!(layout::successor(5, 5), 1);
/// assert_eq!(layout::successor(3, 5), 0);
/// ```
#[inline]
pub fn successor(k: usize, n: usize) -> usize {
    debug_assert!(k >= 1 && k <= n);
    if 2 * k < n {
        leftmost(2 * k + 1, n)
    } else {
        strip_right_run(k)
    }
}

/// In-order predecessor of tree index `k` in a tree of `n` nodes.
///
/// Returns `0` when `k` holds the smallest element.
#[inline]
pub fn predecessor(k: usize, n: usize) -> usize {
    debug_assert!(k >= 1 && k <= n);
    if 2 * k <= n {
        rightmost(2 * k, n)
    } else {
        strip_left_run(k)
    }
}

/// Number of nodes in the subtree rooted at tree index `k`.
fn subtree_len(k: usize, n: usize) -> usize {
    let mut len = 0;
    let mut lo = k;
    let mut width = 1usize;
    while lo <= n {
        // Level spans [lo, lo + width), clipped to n.
        len += (n - lo + 1).min(width);
        lo = match lo.checked_mul(2) {
            Some(lo) => lo,
            None => break,
        };
        width *= 2;
    }
    len
}

/// Sorted rank (0-based) of tree index `k` in a tree of `n` nodes.
///
/// By convention `rank_of(0, n) == n`, so "no node" ranks past the end.
///
/// # Example
///
/// ```
/// use nexus_eytzinger::layout;
///
/// // [4, 2, 5, 1, 3]
/// assert_eq!(layout::rank_of(1, 5), 3);
/// assert_eq!(layout::rank_of(4, 5), 0);
/// assert_eq!(layout::rank_of(0, 5), 5);
/// ```
pub fn rank_of(k: usize, n: usize) -> usize {
    if k == 0 {
        return n;
    }
    debug_assert!(k <= n);

    let mut rank = subtree_len(2 * k, n);
    let mut node = k;
    while node > 1 {
        if node & 1 == 1 {
            // Right child: the parent and its left subtree come first.
            rank += subtree_len(node - 1, n) + 1;
        }
        node >>= 1;
    }
    rank
}

/// Tree index holding sorted rank `rank` in a tree of `n` nodes.
///
/// Returns `0` if `rank >= n`. Descends from the root by comparing against
/// left-subtree sizes, `O(log² n)` overall.
pub fn index_of_rank(mut rank: usize, n: usize) -> usize {
    if rank >= n {
        return 0;
    }
    let mut k = 1;
    loop {
        let left = subtree_len(2 * k, n);
        if rank < left {
            k *= 2;
        } else if rank == left {
            return k;
        } else {
            rank -= left + 1;
            k = 2 * k + 1;
        }
    }
}
