//! The algorithms compared by the `sort_bench` driver and how each one is timed.

use std::fmt;
use std::time::Duration;

use crate::error::SortError;
use crate::harness::{time_it, Stopwatch, Timing};
use crate::partition::PartitionScheme;
use crate::stable::{bubble, insertion, merge, rust_std as rust_std_stable};
use crate::unstable::{quick, rust_std as rust_std_unstable, selection, shell};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Algorithm {
    Bubble,
    Quick,
    Insertion,
    Shell,
    Merge,
    Selection,
    Builtin,
    BuiltinUnstable,
}

impl Algorithm {
    /// Comparison order of the driver.
    pub const ALL: [Algorithm; 8] = [
        Algorithm::Bubble,
        Algorithm::Quick,
        Algorithm::Insertion,
        Algorithm::Shell,
        Algorithm::Merge,
        Algorithm::Selection,
        Algorithm::Builtin,
        Algorithm::BuiltinUnstable,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble_sort",
            Algorithm::Quick => "quick_sort",
            Algorithm::Insertion => "insertion_sort",
            Algorithm::Shell => "shell_sort",
            Algorithm::Merge => "merge_sort",
            Algorithm::Selection => "selection_sort",
            Algorithm::Builtin => "builtin_sort",
            Algorithm::BuiltinUnstable => "builtin_sort_unstable",
        }
    }

    /// Sorts `v` in place and returns the measured time.
    ///
    /// Quick sort and merge sort are timed with a stopwatch around their top-level call, all
    /// other algorithms go through [`time_it`].
    pub fn run<T>(self, v: &mut [T], scheme: PartitionScheme) -> Result<Timing, SortError>
    where
        T: Ord + Clone,
    {
        let in_place: fn(&mut [T]) = match self {
            Algorithm::Quick => {
                let end = v.len().saturating_sub(1);
                let watch = Stopwatch::start(self.name());
                quick::quick_sort(v, 0, end, scheme)?;
                return Ok(watch.stop());
            }
            Algorithm::Merge => {
                let watch = Stopwatch::start(self.name());
                merge::merge_sort(v);
                return Ok(watch.stop());
            }
            Algorithm::Bubble => bubble::sort,
            Algorithm::Insertion => insertion::sort,
            Algorithm::Shell => shell::sort,
            Algorithm::Selection => selection::sort,
            Algorithm::Builtin => rust_std_stable::sort,
            Algorithm::BuiltinUnstable => rust_std_unstable::sort,
        };

        let mut timed = time_it(self.name(), in_place);
        timed.call(v);
        Ok(timed
            .into_last_timing()
            .unwrap_or_else(|| Timing::new(self.name(), Duration::ZERO)))
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
