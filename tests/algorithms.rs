use std::cell::Cell;

use classic_sorts::stable::{bubble, insertion};
use classic_sorts::unstable::{selection, shell};
use classic_sorts::{Algorithm, PartitionScheme};

#[test]
fn every_algorithm_small_input() {
    for scheme in [PartitionScheme::Hoare, PartitionScheme::Lomuto] {
        for algorithm in Algorithm::ALL {
            let mut v = [3, 1, 2];
            let timing = algorithm.run(&mut v, scheme).unwrap();

            assert_eq!(v, [1, 2, 3], "{algorithm} with {scheme}");
            assert_eq!(timing.name(), algorithm.name());
        }
    }
}

#[test]
fn every_algorithm_empty_input() {
    for algorithm in Algorithm::ALL {
        let mut v: Vec<i32> = Vec::new();
        algorithm.run(&mut v, PartitionScheme::default()).unwrap();
        assert!(v.is_empty(), "{algorithm}");
    }
}

#[test]
fn every_algorithm_sorted_input() {
    let expected = (0..=10_000).collect::<Vec<i32>>();

    for algorithm in Algorithm::ALL {
        let mut v = expected.clone();
        algorithm.run(&mut v, PartitionScheme::default()).unwrap();
        assert_eq!(v, expected, "{algorithm}");
    }
}

#[test]
fn bubble_sorted_input_is_one_pass() {
    let comparisons = Cell::new(0);
    let mut v = (0..100).collect::<Vec<i32>>();

    bubble::sort_by(&mut v, |a, b| {
        comparisons.set(comparisons.get() + 1);
        a.cmp(b)
    });

    assert_eq!(comparisons.get(), 99);
}

#[test]
fn bubble_reverse_input() {
    let mut v = (0..50).rev().collect::<Vec<i32>>();
    bubble::sort(&mut v);
    assert_eq!(v, (0..50).collect::<Vec<_>>());
}

#[test]
fn insertion_sorted_input_is_linear() {
    let comparisons = Cell::new(0);
    let mut v = (0..100).collect::<Vec<i32>>();

    insertion::sort_by(&mut v, |a, b| {
        comparisons.set(comparisons.get() + 1);
        a.cmp(b)
    });

    assert_eq!(comparisons.get(), 99);
}

#[test]
fn insertion_shift_left_with_sorted_prefix() {
    let mut v = [1, 4, 9, 3, 0, 7];
    insertion::insertion_sort_shift_left(&mut v, 3, &mut |a, b| a < b);
    assert_eq!(v, [0, 1, 3, 4, 7, 9]);

    let mut v = [2, 1];
    insertion::insertion_sort_shift_left(&mut v, 2, &mut |a, b| a < b);
    assert_eq!(v, [2, 1]);
}

#[test]
#[should_panic]
fn insertion_shift_left_zero_offset() {
    let mut v = [2, 1];
    insertion::insertion_sort_shift_left(&mut v, 0, &mut |a: &i32, b: &i32| a < b);
}

#[test]
fn shell_gap_sequence() {
    assert_eq!(shell::gaps(0).count(), 0);
    assert_eq!(shell::gaps(1).count(), 0);
    assert_eq!(shell::gaps(2).collect::<Vec<_>>(), [1]);
    assert_eq!(shell::gaps(10).collect::<Vec<_>>(), [5, 2, 1]);
    assert_eq!(shell::gaps(634).collect::<Vec<_>>(), [317, 158, 79, 39, 19, 9, 4, 2, 1]);
}

#[test]
fn selection_sorted_input_is_untouched() {
    // Equal keys on sorted input reveal any swap.
    let mut v = [(0, 'a'), (0, 'b'), (1, 'c'), (1, 'd'), (2, 'e')];
    selection::sort_by(&mut v, |a, b| a.0.cmp(&b.0));
    assert_eq!(v, [(0, 'a'), (0, 'b'), (1, 'c'), (1, 'd'), (2, 'e')]);
}

#[test]
fn selection_keeps_equal_minimum_in_place() {
    // An element equal to the current minimum is never swapped forward.
    let mut v = [(1, 'a'), (0, 'b'), (1, 'c'), (0, 'd')];
    selection::sort_by(&mut v, |a, b| a.0.cmp(&b.0));
    assert_eq!(v, [(0, 'b'), (0, 'd'), (1, 'c'), (1, 'a')]);
}
