pub mod insertion_sort;

pub mod merge_sort;

// Reserved placeholder entry point.
pub mod bucket_sort;

// Reserved placeholder entry point.
pub mod radix_sort;
