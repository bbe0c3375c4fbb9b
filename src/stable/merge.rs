use std::cmp::Ordering;

sort_impl!("merge_stable", stable);

/// Sorts the slice with top-down merge sort, preserving the order of equal elements.
///
/// This sort is stable, *O*(*n* \* log(*n*)) in every case and allocates *O*(*n*) auxiliary
/// memory per recursion level for the copies of both halves. The recursion depth is
/// `ceil(log2(len))`, so it stays shallow for any input that fits in memory.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord + Clone,
{
    merge_sort(v);
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    merge_sort_impl(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

/// Sorts `v` in place and hands it back for chaining.
pub fn merge_sort<T>(v: &mut [T]) -> &mut [T]
where
    T: Ord + Clone,
{
    merge_sort_impl(v, &mut |a, b| a.lt(b));
    v
}

fn merge_sort_impl<T, F>(v: &mut [T], is_less: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len <= 1 {
        return;
    }

    let mid = len / 2;
    let mut left = v[..mid].to_vec();
    let mut right = v[mid..].to_vec();

    merge_sort_impl(&mut left, is_less);
    merge_sort_impl(&mut right, is_less);

    merge(&left, &right, v, is_less);
}

/// Merges the sorted slices `a` and `b` into `out`.
///
/// Ties are taken from `a` first, so merging two stable runs in input order yields a stable run.
///
/// # Panics
///
/// Panics if `out.len() != a.len() + b.len()`.
pub fn merge<T, F>(a: &[T], b: &[T], out: &mut [T], is_less: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    assert_eq!(
        out.len(),
        a.len() + b.len(),
        "merge output must hold both inputs"
    );

    let (mut i, mut j, mut k) = (0, 0, 0);

    while i < a.len() && j < b.len() {
        if is_less(&b[j], &a[i]) {
            out[k] = b[j].clone();
            j += 1;
        } else {
            out[k] = a[i].clone();
            i += 1;
        }
        k += 1;
    }

    // At most one side has elements left, append it as is.
    let a_rest = &a[i..];
    out[k..k + a_rest.len()].clone_from_slice(a_rest);
    k += a_rest.len();

    out[k..].clone_from_slice(&b[j..]);
}
