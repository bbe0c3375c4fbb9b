use std::cmp::Ordering;

use tracing::debug;

use crate::error::SortError;
use crate::partition::PartitionScheme;

sort_impl!("quick_unstable");

/// Depth budget of [`quick_sort_recursive`], and the ceiling for any budget a caller passes.
pub const DEFAULT_MAX_RECURSION_DEPTH: usize = 1024;

/// Sorts the slice with quicksort using the default [`PartitionScheme`].
///
/// This sort is unstable (i.e., may reorder equal elements) and in-place apart from a work stack
/// of *O*(log(*n*)) ranges. The pivot is always taken from a fixed position, so sorted or
/// reverse sorted input degrades to *O*(*n*^2) comparisons, but never to deep recursion.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    quicksort(v, PartitionScheme::default(), &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    quicksort(v, PartitionScheme::default(), &mut |a, b| {
        compare(a, b) == Ordering::Less
    });
}

/// Sorts the inclusive range `v[start..=end]` in place.
///
/// A range with `start >= end` holds at most one element and is left untouched without looking
/// at `v`. Otherwise `end` must be a valid index into `v`.
pub fn quick_sort<T>(
    v: &mut [T],
    start: usize,
    end: usize,
    scheme: PartitionScheme,
) -> Result<(), SortError>
where
    T: Ord,
{
    quick_sort_by(v, start, end, scheme, |a, b| a.cmp(b))
}

/// [`quick_sort`] with a comparator function.
pub fn quick_sort_by<T, F>(
    v: &mut [T],
    start: usize,
    end: usize,
    scheme: PartitionScheme,
    mut compare: F,
) -> Result<(), SortError>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let Some(range) = sub_range(v, start, end)? else {
        return Ok(());
    };

    quicksort(range, scheme, &mut |a, b| compare(a, b) == Ordering::Less);
    Ok(())
}

/// Sorts the inclusive range `v[start..=end]` by recursing into both partitions.
///
/// Each partition step nests one level deeper. Budgets above [`DEFAULT_MAX_RECURSION_DEPTH`] are
/// clamped to it. Once the budget is in use the sort stops and reports
/// [`SortError::RecursionLimitExceeded`] with the effective limit, leaving `v` a partially sorted
/// permutation of its input. Use [`quick_sort`] for input that may be sorted already.
pub fn quick_sort_recursive<T>(
    v: &mut [T],
    start: usize,
    end: usize,
    scheme: PartitionScheme,
    max_depth: usize,
) -> Result<(), SortError>
where
    T: Ord,
{
    let Some(range) = sub_range(v, start, end)? else {
        return Ok(());
    };

    let max_depth = max_depth.min(DEFAULT_MAX_RECURSION_DEPTH);
    quicksort_recursive(range, scheme, 0, max_depth, &mut |a, b| a.lt(b))
}

/// Validates an inclusive range. `Ok(None)` for ranges of at most one element.
fn sub_range<T>(v: &mut [T], start: usize, end: usize) -> Result<Option<&mut [T]>, SortError> {
    if start >= end {
        return Ok(None);
    }

    let len = v.len();
    if end >= len {
        return Err(SortError::InvalidRange { start, end, len });
    }

    Ok(Some(&mut v[start..=end]))
}

/// Iterative quicksort over all of `v`.
///
/// After each partition the smaller side is sorted next and the larger side is deferred on an
/// explicit stack. The side processed next is at most half of its parent range, which bounds the
/// stack at log2(len) entries no matter how unbalanced the partitions are.
fn quicksort<T, F>(v: &mut [T], scheme: PartitionScheme, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    // Half-open ranges into `v`.
    let mut pending: Vec<(usize, usize)> = Vec::new();
    let mut current = (0, v.len());

    loop {
        let (lo, hi) = current;

        if hi - lo < 2 {
            match pending.pop() {
                Some(next) => {
                    current = next;
                    continue;
                }
                None => return,
            }
        }

        let pivot = lo + scheme.partition(&mut v[lo..hi], is_less);

        let left = (lo, pivot);
        let right = (pivot + 1, hi);

        if pivot - lo <= hi - (pivot + 1) {
            pending.push(right);
            current = left;
        } else {
            pending.push(left);
            current = right;
        }
    }
}

fn quicksort_recursive<T, F>(
    v: &mut [T],
    scheme: PartitionScheme,
    depth: usize,
    max_depth: usize,
    is_less: &mut F,
) -> Result<(), SortError>
where
    F: FnMut(&T, &T) -> bool,
{
    if v.len() < 2 {
        return Ok(());
    }

    if depth >= max_depth {
        debug!(depth, max_depth, len = v.len(), "quicksort recursion budget exhausted");
        return Err(SortError::RecursionLimitExceeded {
            depth: depth + 1,
            limit: max_depth,
        });
    }

    let pivot = scheme.partition(v, is_less);
    let (left, right) = v.split_at_mut(pivot);

    quicksort_recursive(left, scheme, depth + 1, max_depth, is_less)?;
    quicksort_recursive(&mut right[1..], scheme, depth + 1, max_depth, is_less)
}
