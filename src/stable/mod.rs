pub mod rust_std;

pub mod bubble;

pub mod insertion;

// Top-down merge sort on owned copies of each half.
pub mod merge;
