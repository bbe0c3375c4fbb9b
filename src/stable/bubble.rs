use std::cmp::Ordering;

sort_impl!("bubble_stable", stable);

/// Sorts the slice with bubble sort, preserving the order of equal elements.
///
/// Every pass moves the largest remaining element to the end of the unsorted region, so the
/// region shrinks by one per pass. A pass without any swap means the slice is sorted and ends the
/// sort early, which makes already sorted input *O*(*n*). Worst and average case are
/// *O*(*n*^2).
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    bubble_sort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    bubble_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

fn bubble_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    for pass in 0..len.saturating_sub(1) {
        let mut swapped = false;

        for i in 0..len - 1 - pass {
            // Strictly out of order only, equal neighbours stay put.
            if is_less(&v[i + 1], &v[i]) {
                v.swap(i, i + 1);
                swapped = true;
            }
        }

        if !swapped {
            break;
        }
    }
}
