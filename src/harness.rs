//! Wall-clock timing of sort invocations.
//!
//! Every measurement produces a [`Timing`] and logs it once at info level as
//! `<name> took <elapsed_ms> milliseconds`. Recursive entry points are timed with an explicit
//! [`Stopwatch`] around the outermost call, so nested work is measured exactly once.

use std::fmt;
use std::time::{Duration, Instant};

use sort_test_tools::Sort;
use tracing::info;

/// Elapsed wall-clock time of one named operation.
#[derive(Clone, Debug, PartialEq)]
pub struct Timing {
    name: String,
    elapsed: Duration,
}

impl Timing {
    pub fn new(name: impl Into<String>, elapsed: Duration) -> Self {
        Self {
            name: name.into(),
            elapsed,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Elapsed time in fractional milliseconds.
    pub fn millis(&self) -> f64 {
        self.elapsed.as_nanos() as f64 / 1_000_000.0
    }

    fn report(&self) {
        info!(algorithm = %self.name, elapsed_ms = self.millis(), "{}", self);
    }
}

impl fmt::Display for Timing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} took {} milliseconds", self.name, self.millis())
    }
}

/// Explicit start/stop measurement for a call site.
#[derive(Debug)]
pub struct Stopwatch {
    name: String,
    start: Instant,
}

impl Stopwatch {
    pub fn start(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            start: Instant::now(),
        }
    }

    /// Stops the measurement, logs it and returns it.
    pub fn stop(self) -> Timing {
        let timing = Timing::new(self.name, self.start.elapsed());
        timing.report();
        timing
    }
}

/// An operation wrapped by [`time_it`].
pub struct TimeIt<F> {
    name: String,
    op: F,
    last: Option<Timing>,
}

/// Wraps `op` so that every [`TimeIt::call`] is timed and logged under `name`.
pub fn time_it<F>(name: impl Into<String>, op: F) -> TimeIt<F> {
    TimeIt {
        name: name.into(),
        op,
        last: None,
    }
}

impl<F> TimeIt<F> {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Runs the wrapped operation once with `arg` and returns its output unchanged.
    pub fn call<A, R>(&mut self, arg: A) -> R
    where
        F: FnMut(A) -> R,
    {
        let watch = Stopwatch::start(self.name.as_str());
        let output = (self.op)(arg);
        self.last = Some(watch.stop());
        output
    }

    /// Timing of the most recent [`TimeIt::call`], `None` before the first one.
    pub fn last_timing(&self) -> Option<&Timing> {
        self.last.as_ref()
    }

    pub fn into_last_timing(self) -> Option<Timing> {
        self.last
    }
}

/// Times a single invocation of `f`.
pub fn measure<R>(name: impl Into<String>, f: impl FnOnce() -> R) -> (R, Timing) {
    let watch = Stopwatch::start(name);
    let output = f();
    (output, watch.stop())
}

/// Sorts `v` with `S` and times it under `S::name()`.
pub fn time_sort<S, T>(v: &mut [T]) -> Timing
where
    S: Sort,
    T: Ord + Clone,
{
    let ((), timing) = measure(S::name(), || S::sort(v));
    timing
}
