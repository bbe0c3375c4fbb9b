pub mod rust_std;

// Iterative quicksort with a selectable partition scheme.
pub mod quick;

// Shell sort with the halving gap sequence.
pub mod shell;

pub mod selection;
