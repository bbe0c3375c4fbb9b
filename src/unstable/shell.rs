use std::cmp::Ordering;
use std::iter;

use crate::stable::insertion::insertion_sort_shift_left;

sort_impl!("shell_unstable");

/// Sorts the slice with Shell sort, but might not preserve the order of equal elements.
///
/// Runs a gapped insertion sort for every gap in [`gaps`]. The halving sequence makes this
/// *O*(*n*^2) worst-case.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    shell_sort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    shell_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

/// The gaps used for a slice of length `len`: `len / 2`, halved until 1.
pub fn gaps(len: usize) -> impl Iterator<Item = usize> {
    iter::successors(Some(len / 2), |gap| Some(gap / 2)).take_while(|&gap| gap > 0)
}

fn shell_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    for gap in gaps(len) {
        if gap == 1 {
            // Plain insertion sort finishes the job.
            insertion_sort_shift_left(v, 1, is_less);
            break;
        }

        // Insertion sort of each interleaved subsequence `v[r], v[r + gap], v[r + 2 * gap], ..`.
        for i in gap..len {
            let mut j = i;
            while j >= gap && is_less(&v[j], &v[j - gap]) {
                v.swap(j, j - gap);
                j -= gap;
            }
        }
    }
}
