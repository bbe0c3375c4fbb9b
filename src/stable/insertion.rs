use std::cmp::Ordering;

sort_impl!("insertion_stable", stable);

/// Sorts the slice with insertion sort, preserving the order of equal elements.
///
/// Keeps a sorted prefix and inserts each following element into it by shifting the larger
/// prefix elements one slot to the right. *O*(*n*) for sorted input, *O*(*n*^2) otherwise.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    insertion_sort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    insertion_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

fn insertion_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if v.len() >= 2 {
        insertion_sort_shift_left(v, 1, is_less);
    }
}

/// Sorts `v` assuming `v[..offset]` is already sorted.
///
/// # Panics
///
/// Panics if `offset` is 0 or larger than `v.len()`.
pub fn insertion_sort_shift_left<T, F>(v: &mut [T], offset: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    assert!(
        offset != 0 && offset <= len,
        "offset {offset} out of bounds for length {len}"
    );

    for tail in offset..len {
        insert_tail(&mut v[..=tail], is_less);
    }
}

/// Moves the last element of `v` into place, assuming `v[..v.len() - 1]` is sorted.
fn insert_tail<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let tail = v.len() - 1;

    // Find the insertion point. Stopping at the first element that is not greater than the
    // anchor keeps equal elements in input order.
    let mut hole = tail;
    while hole > 0 && is_less(&v[tail], &v[hole - 1]) {
        hole -= 1;
    }

    // Shift `v[hole..tail]` right by one and drop the anchor into the hole.
    v[hole..].rotate_right(1);
}
