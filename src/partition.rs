//! Hoare and Lomuto partition schemes.
//!
//! Both rearrange a slice around a single pivot element and return the pivot's final position
//! `p`, such that every element left of `p` is not greater than the pivot and every element
//! right of `p` is not less than it.

use std::fmt;
use std::str::FromStr;

use crate::error::SortError;

/// Selects the partition routine quicksort uses.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PartitionScheme {
    /// First element as pivot, two pointers scanning towards each other.
    #[default]
    Hoare,
    /// Last element as pivot, a single forward scan.
    Lomuto,
}

impl PartitionScheme {
    pub fn name(self) -> &'static str {
        match self {
            PartitionScheme::Hoare => "hoare",
            PartitionScheme::Lomuto => "lomuto",
        }
    }

    /// Partitions all of `v` and returns the final pivot position. Returns 0 for an empty slice.
    #[inline]
    pub fn partition<T, F>(self, v: &mut [T], is_less: &mut F) -> usize
    where
        F: FnMut(&T, &T) -> bool,
    {
        match self {
            PartitionScheme::Hoare => hoare_partition(v, is_less),
            PartitionScheme::Lomuto => lomuto_partition(v, is_less),
        }
    }
}

impl fmt::Display for PartitionScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PartitionScheme {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hoare" => Ok(PartitionScheme::Hoare),
            "lomuto" => Ok(PartitionScheme::Lomuto),
            _ => Err(SortError::UnknownPartitionScheme(s.to_string())),
        }
    }
}

/// Partitions the inclusive range `v[start..=end]` with the Hoare scheme and returns the pivot's
/// final index in `v`.
pub fn hoare<T: Ord>(v: &mut [T], start: usize, end: usize) -> Result<usize, SortError> {
    let range = checked_range(v, start, end)?;
    Ok(start + hoare_partition(range, &mut |a, b| a.lt(b)))
}

/// Partitions the inclusive range `v[start..=end]` with the Lomuto scheme and returns the pivot's
/// final index in `v`.
pub fn lomuto<T: Ord>(v: &mut [T], start: usize, end: usize) -> Result<usize, SortError> {
    let range = checked_range(v, start, end)?;
    Ok(start + lomuto_partition(range, &mut |a, b| a.lt(b)))
}

fn checked_range<T>(v: &mut [T], start: usize, end: usize) -> Result<&mut [T], SortError> {
    let len = v.len();
    if start > end || end >= len {
        return Err(SortError::InvalidRange { start, end, len });
    }

    Ok(&mut v[start..=end])
}

/// Hoare partition with `v[0]` as pivot.
///
/// The left pointer skips elements not greater than the pivot and stops at the end of the slice.
/// The right pointer skips elements greater than the pivot and stops at the pivot slot, so it
/// can never leave the slice even when the pivot is the minimum. Out-of-order pairs are swapped
/// until the pointers cross, then the pivot is swapped into the right pointer's position.
pub fn hoare_partition<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return 0;
    }

    // Indices are relative to `v`, `rest[i - 1]` is `v[i]`.
    let (pivot, rest) = v.split_at_mut(1);
    let pivot = &pivot[0];

    let mut left = 1;
    let mut right = len - 1;

    while left <= right {
        while left < len && !is_less(pivot, &rest[left - 1]) {
            left += 1;
        }

        while right > 0 && is_less(pivot, &rest[right - 1]) {
            right -= 1;
        }

        if left < right {
            rest.swap(left - 1, right - 1);
        }
    }

    v.swap(0, right);
    right
}

/// Lomuto partition with the last element as pivot.
///
/// Elements not greater than the pivot are swapped into a growing prefix, then the pivot is
/// swapped to the first position after that prefix.
pub fn lomuto_partition<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return 0;
    }

    let pivot_pos = len - 1;
    let mut boundary = 0;

    for i in 0..pivot_pos {
        if !is_less(&v[pivot_pos], &v[i]) {
            v.swap(i, boundary);
            boundary += 1;
        }
    }

    v.swap(boundary, pivot_pos);
    boundary
}
