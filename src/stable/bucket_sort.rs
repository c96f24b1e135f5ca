use crate::SortError;

/// Reserved entry point for a range-bucketed distribution sort.
///
/// Not implemented. Returns [`SortError::Unimplemented`] and leaves `v`
/// untouched, so callers can tell "sorted" apart from "nothing happened".
pub fn sort(_v: &mut [i32]) -> Result<(), SortError> {
    Err(SortError::Unimplemented {
        algorithm: "bucket_sort",
    })
}
