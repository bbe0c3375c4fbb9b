//! Error types for sorting and benchmark configuration.

use thiserror::Error;

/// Errors reported by the range based entry points and by configuration parsing.
///
/// Sorting a whole slice never fails, empty and single element inputs included. These errors
/// describe broken caller contracts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    /// An inclusive range that does not lie within the sequence.
    #[error("invalid range [{start}, {end}] for sequence of length {len}")]
    InvalidRange { start: usize, end: usize, len: usize },

    /// The recursive quicksort ran out of its depth budget.
    #[error("recursion depth {depth} exceeds limit of {limit}")]
    RecursionLimitExceeded { depth: usize, limit: usize },

    #[error("unknown partition scheme `{0}`, expected `hoare` or `lomuto`")]
    UnknownPartitionScheme(String),

    #[error("unknown input pattern `{0}`")]
    UnknownPattern(String),

    #[error("invalid algorithm filter: {0}")]
    InvalidFilter(String),

    #[error("{0}")]
    InvalidSeed(String),

    /// Generated inputs hold `i32` values counting up from zero.
    #[error("input length {len} exceeds maximum of {max}")]
    InvalidLength { len: usize, max: usize },
}
