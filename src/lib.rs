//! Classic comparison sorts and a wall-clock timing harness to compare them.

/// Registers the enclosing module's `sort` and `sort_by` as a [`sort_test_tools::Sort`]
/// implementation named `SortImpl`.
macro_rules! sort_impl {
    ($name:expr) => {
        sort_impl!($name, false);
    };
    ($name:expr, stable) => {
        sort_impl!($name, true);
    };
    ($name:expr, $is_stable:literal) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            fn is_stable() -> bool {
                $is_stable
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord + Clone,
            {
                sort(arr);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                T: Clone,
                F: FnMut(&T, &T) -> std::cmp::Ordering,
            {
                sort_by(arr, compare);
            }
        }
    };
}

pub mod algorithm;
pub mod config;
pub mod error;
pub mod harness;
pub mod partition;
pub mod stable;
pub mod unstable;

pub use algorithm::Algorithm;
pub use error::SortError;
pub use partition::PartitionScheme;
