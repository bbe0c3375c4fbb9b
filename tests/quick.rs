use classic_sorts::unstable::quick::{
    self, quick_sort, quick_sort_recursive, DEFAULT_MAX_RECURSION_DEPTH,
};
use classic_sorts::{PartitionScheme, SortError};

const SCHEMES: [PartitionScheme; 2] = [PartitionScheme::Hoare, PartitionScheme::Lomuto];

#[test]
fn small_input() {
    for scheme in SCHEMES {
        let mut v = [3, 1, 2];
        quick_sort(&mut v, 0, 2, scheme).unwrap();
        assert_eq!(v, [1, 2, 3], "{scheme}");
    }
}

#[test]
fn empty_and_single() {
    for scheme in SCHEMES {
        let mut empty: Vec<i32> = Vec::new();
        quick_sort(&mut empty, 0, 0, scheme).unwrap();
        assert!(empty.is_empty());

        let mut single = [7];
        quick_sort(&mut single, 0, 0, scheme).unwrap();
        assert_eq!(single, [7]);
    }
}

#[test]
fn already_sorted_large_input() {
    // First element pivot on sorted input peels off one element per partition.
    let expected = (0..=10_000).collect::<Vec<i32>>();

    for scheme in SCHEMES {
        let mut v = expected.clone();
        let end = v.len() - 1;
        quick_sort(&mut v, 0, end, scheme).unwrap();
        assert_eq!(v, expected, "{scheme}");
    }
}

#[test]
fn reverse_sorted_large_input() {
    let expected = (0..=10_000).collect::<Vec<i32>>();

    let mut v = expected.clone();
    v.reverse();
    quick::sort(&mut v);
    assert_eq!(v, expected);
}

#[test]
fn sub_range_only() {
    for scheme in SCHEMES {
        let mut v = [9, 8, 5, 3, 4, 1, 0, -1];
        quick_sort(&mut v, 2, 5, scheme).unwrap();
        assert_eq!(v, [9, 8, 1, 3, 4, 5, 0, -1], "{scheme}");
    }
}

#[test]
fn degenerate_ranges_are_no_ops() {
    let mut v = [2, 1];
    quick_sort(&mut v, 1, 1, PartitionScheme::Hoare).unwrap();
    quick_sort(&mut v, 1, 0, PartitionScheme::Hoare).unwrap();
    // `start >= end` never looks at the slice.
    quick_sort(&mut v, 50, 40, PartitionScheme::Lomuto).unwrap();
    assert_eq!(v, [2, 1]);
}

#[test]
fn end_out_of_bounds() {
    let mut v = [3, 2, 1];
    assert_eq!(
        quick_sort(&mut v, 0, 3, PartitionScheme::Hoare),
        Err(SortError::InvalidRange {
            start: 0,
            end: 3,
            len: 3
        })
    );
    // Rejected before anything is moved.
    assert_eq!(v, [3, 2, 1]);

    let mut empty: [i32; 0] = [];
    assert!(matches!(
        quick_sort_recursive(&mut empty, 0, 4, PartitionScheme::Lomuto, 8),
        Err(SortError::InvalidRange { len: 0, .. })
    ));
}

#[test]
fn recursive_within_budget() {
    for scheme in SCHEMES {
        let mut v = vec![5, 2, 9, 1, 5, 6, -3, 0, 12, 7];
        let end = v.len() - 1;
        quick_sort_recursive(&mut v, 0, end, scheme, DEFAULT_MAX_RECURSION_DEPTH).unwrap();
        assert_eq!(v, [-3, 0, 1, 2, 5, 5, 6, 7, 9, 12], "{scheme}");
    }
}

#[test]
fn recursive_reports_exhausted_budget() {
    let mut v = (0..=10_000).collect::<Vec<i32>>();
    let end = v.len() - 1;

    let result = quick_sort_recursive(
        &mut v,
        0,
        end,
        PartitionScheme::Hoare,
        DEFAULT_MAX_RECURSION_DEPTH,
    );
    assert_eq!(
        result,
        Err(SortError::RecursionLimitExceeded {
            depth: DEFAULT_MAX_RECURSION_DEPTH + 1,
            limit: DEFAULT_MAX_RECURSION_DEPTH
        })
    );

    // Nothing is lost when the sort gives up.
    v.sort();
    assert_eq!(v, (0..=10_000).collect::<Vec<i32>>());
}

#[test]
fn recursive_zero_budget() {
    let mut v = [2, 1];
    assert!(matches!(
        quick_sort_recursive(&mut v, 0, 1, PartitionScheme::Lomuto, 0),
        Err(SortError::RecursionLimitExceeded { limit: 0, .. })
    ));
}

#[test]
fn sort_by_reverse() {
    let mut v = [1, 4, 2, 8, 5, 7];
    quick::quick_sort_by(&mut v, 0, 5, PartitionScheme::Lomuto, |a, b| b.cmp(a)).unwrap();
    assert_eq!(v, [8, 7, 5, 4, 2, 1]);
}

#[test]
fn recursive_budget_is_clamped() {
    let mut v = (0..200_000).collect::<Vec<i32>>();

    let result = quick_sort_recursive(&mut v, 0, 199_999, PartitionScheme::Hoare, 1_000_000);
    assert_eq!(
        result,
        Err(SortError::RecursionLimitExceeded {
            depth: DEFAULT_MAX_RECURSION_DEPTH + 1,
            limit: DEFAULT_MAX_RECURSION_DEPTH
        })
    );

    let mut v = [4, 3, 2, 1];
    quick_sort_recursive(&mut v, 0, 3, PartitionScheme::Lomuto, usize::MAX).unwrap();
    assert_eq!(v, [1, 2, 3, 4]);
}
