use std::cmp::Ordering;

pub mod patterns;

pub use paste;

/// Common interface every sort under test and benchmark implements.
pub trait Sort {
    fn name() -> String;

    /// Whether equal elements keep their relative input order.
    fn is_stable() -> bool;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord + Clone;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering;
}

#[macro_export]
macro_rules! instantiate_sort_tests {
    ($sort_impl:ty) => {
        $crate::instantiate_sort_tests_gen!(
            $sort_impl;
            basic,
            empty,
            single,
            fixed_seed,
            idempotent,
            duplicates,
            permutation,
            sort_by_descending,
            stability
        );

        $crate::instantiate_pattern_tests_gen!(
            $sort_impl;
            random,
            random_narrow,
            random_zipf,
            ascending,
            descending,
            saw_ascending,
            pipe_organ,
            all_equal
        );
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! instantiate_sort_tests_gen {
    ($sort_impl:ty; $($test_fn:ident),*) => {
        $(
            #[test]
            fn $test_fn() {
                $crate::tests::$test_fn::<$sort_impl>();
            }
        )*
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! instantiate_pattern_tests_gen {
    ($sort_impl:ty; $($pattern:ident),*) => {
        $(
            $crate::paste::paste! {
                #[test]
                fn [<pattern_ $pattern>]() {
                    $crate::tests::sort_pattern::<$sort_impl>($crate::patterns::$pattern);
                }
            }
        )*
    };
}
