use std::cmp::Ordering;

sort_impl!("selection_unstable");

/// Sorts the slice with selection sort, but might not preserve the order of equal elements.
///
/// Always *O*(*n*^2) comparisons, but at most `len - 1` swaps.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    selection_sort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    selection_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

fn selection_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    for i in 0..len.saturating_sub(1) {
        let mut min = i;
        for j in (i + 1)..len {
            if is_less(&v[j], &v[min]) {
                min = j;
            }
        }

        // `min` only moves on strictly smaller elements, so equal values are never swapped.
        if min != i {
            v.swap(i, min);
        }
    }
}
