pub mod heap_sort;

pub mod selection_sort;

// Reserved placeholder entry point.
pub mod quick_sort;
