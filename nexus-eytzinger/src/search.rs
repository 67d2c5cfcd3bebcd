//! Branch-free descent over an Eytzinger layout.
//!
//! Each step loads one node and turns the comparison into the low bit of
//! the next index:
//!
//! ```text
//! k = 2k + (data[k - 1] < target)
//! ```
//!
//! Once `k` falls off the bottom of the tree its binary digits spell the
//! path taken: a `0` for every left turn, a `1` for every right turn.
//! The answer is the last node where the walk turned left, recovered by
//! discarding the trailing run of ones and the zero above it.
//!
//! All functions here return 1-based tree indices with `0` meaning "none".
//! The search path never allocates, and the only branch in the walk is the
//! loop exit.

use crate::compare::Compare;
use crate::layout::strip_right_run;

/// Walks the tree, going right while `go_right(node)` holds.
///
/// Returns the exit index, before backtracking.
#[inline(always)]
fn descend<T, F>(data: &[T], mut go_right: F) -> usize
where
    F: FnMut(&T) -> bool,
{
    let n = data.len();
    let mut k = 1usize;
    while k <= n {
        // SAFETY: 1 <= k <= n, so k - 1 is in bounds.
        let node = unsafe { data.get_unchecked(k - 1) };
        k = 2 * k + usize::from(go_right(node));
    }
    k
}

/// Tree index of the first element not less than `target`, or `0` if every
/// element is less than `target`.
///
/// `data` must be in Eytzinger order under `cmp`.
///
/// # Example
///
/// ```
/// use nexus_eytzinger::{Natural, layout, search};
///
/// let mut data = [10, 20, 30, 40, 50];
/// layout::build(&mut data, &Natural);
///
/// let k = search::lower_bound(&data, &25, &Natural);
/// assert_eq!(data[k - 1], 30);
/// assert_eq!(search::lower_bound(&data, &60, &Natural), 0);
/// ```
#[inline]
pub fn lower_bound<T, C: Compare<T>>(data: &[T], target: &T, cmp: &C) -> usize {
    strip_right_run(descend(data, |node| cmp.less(node, target)))
}

/// Tree index of the first element greater than `target`, or `0` if no
/// element is greater than `target`.
///
/// `data` must be in Eytzinger order under `cmp`.
#[inline]
pub fn upper_bound<T, C: Compare<T>>(data: &[T], target: &T, cmp: &C) -> usize {
    strip_right_run(descend(data, |node| !cmp.less(target, node)))
}

/// Tree index of an element equivalent to `target`, or `0` if none exists.
///
/// Among several equivalent elements, which one is returned is unspecified.
#[inline]
pub fn exact<T, C: Compare<T>>(data: &[T], target: &T, cmp: &C) -> usize {
    let k = lower_bound(data, target, cmp);
    if k != 0 && !cmp.less(target, &data[k - 1]) {
        k
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::{Natural, Reverse};
    use crate::layout;

    fn laid_out(mut data: Vec<u32>) -> Vec<u32> {
        layout::build(&mut data, &Natural);
        data
    }

    fn value_at(data: &[u32], k: usize) -> Option<u32> {
        (k != 0).then(|| data[k - 1])
    }

    #[test]
    fn empty() {
        let data: Vec<u32> = Vec::new();
        assert_eq!(lower_bound(&data, &1, &Natural), 0);
        assert_eq!(upper_bound(&data, &1, &Natural), 0);
        assert_eq!(exact(&data, &1, &Natural), 0);
    }

    #[test]
    fn single() {
        let data = vec![7u32];
        assert_eq!(lower_bound(&data, &7, &Natural), 1);
        assert_eq!(lower_bound(&data, &3, &Natural), 1);
        assert_eq!(lower_bound(&data, &9, &Natural), 0);
        assert_eq!(exact(&data, &3, &Natural), 0);
        assert_eq!(exact(&data, &7, &Natural), 1);
    }

    #[test]
    fn worked_example() {
        let data = laid_out(vec![5, 3, 1, 4, 2]);
        assert_eq!(data, [4, 2, 5, 1, 3]);

        // 4 < 5 goes right to k=3, 5 < 5 fails, exit at k=6 = 0b110.
        assert_eq!(descend(&data, |node| *node < 5), 6);
        assert_eq!(lower_bound(&data, &5, &Natural), 3);
        assert_eq!(data[2], 5);
    }

    #[test]
    fn lower_bound_between_elements() {
        let data = laid_out(vec![10, 20, 30, 40, 50, 60, 70]);
        assert_eq!(value_at(&data, lower_bound(&data, &5, &Natural)), Some(10));
        assert_eq!(value_at(&data, lower_bound(&data, &10, &Natural)), Some(10));
        assert_eq!(value_at(&data, lower_bound(&data, &11, &Natural)), Some(20));
        assert_eq!(value_at(&data, lower_bound(&data, &69, &Natural)), Some(70));
        assert_eq!(value_at(&data, lower_bound(&data, &70, &Natural)), Some(70));
        assert_eq!(value_at(&data, lower_bound(&data, &71, &Natural)), None);
    }

    #[test]
    fn upper_bound_between_elements() {
        let data = laid_out(vec![10, 20, 30, 40, 50, 60, 70]);
        assert_eq!(value_at(&data, upper_bound(&data, &5, &Natural)), Some(10));
        assert_eq!(value_at(&data, upper_bound(&data, &10, &Natural)), Some(20));
        assert_eq!(value_at(&data, upper_bound(&data, &65, &Natural)), Some(70));
        assert_eq!(value_at(&data, upper_bound(&data, &70, &Natural)), None);
    }

    #[test]
    fn matches_partition_point() {
        for n in 0..=100u32 {
            let sorted: Vec<u32> = (0..n).map(|i| i * 2 + 1).collect();
            let data = laid_out(sorted.clone());

            for target in 0..=(2 * n + 2) {
                let lo = sorted.partition_point(|x| *x < target);
                let hi = sorted.partition_point(|x| *x <= target);
                assert_eq!(
                    value_at(&data, lower_bound(&data, &target, &Natural)),
                    sorted.get(lo).copied(),
                    "n={n} target={target}"
                );
                assert_eq!(
                    value_at(&data, upper_bound(&data, &target, &Natural)),
                    sorted.get(hi).copied(),
                    "n={n} target={target}"
                );
                assert_eq!(
                    exact(&data, &target, &Natural) != 0,
                    target % 2 == 1 && target < 2 * n,
                    "n={n} target={target}"
                );
            }
        }
    }

    #[test]
    fn duplicates_land_on_an_equal_element() {
        let data = laid_out(vec![1, 2, 2, 2, 3, 3, 5, 5, 5, 5]);
        for target in [1, 2, 3, 5] {
            let k = exact(&data, &target, &Natural);
            assert_eq!(value_at(&data, k), Some(target));
        }
        assert_eq!(exact(&data, &4, &Natural), 0);
        assert_eq!(value_at(&data, lower_bound(&data, &4, &Natural)), Some(5));
        assert_eq!(value_at(&data, upper_bound(&data, &2, &Natural)), Some(3));
    }

    #[test]
    fn reverse_order_bounds() {
        let mut data = vec![1u32, 2, 3, 4, 5];
        layout::build(&mut data, &Reverse);

        // Descending: "not less than 3" under Reverse means <= 3.
        assert_eq!(value_at(&data, lower_bound(&data, &3, &Reverse)), Some(3));
        assert_eq!(value_at(&data, upper_bound(&data, &3, &Reverse)), Some(2));
        assert_eq!(value_at(&data, lower_bound(&data, &0, &Reverse)), None);
        assert_eq!(value_at(&data, lower_bound(&data, &9, &Reverse)), Some(5));
    }

    #[test]
    fn repeated_search_is_stable() {
        let data = laid_out((0..1000).collect());
        let first = lower_bound(&data, &377, &Natural);
        for _ in 0..10 {
            assert_eq!(lower_bound(&data, &377, &Natural), first);
        }
    }
}
