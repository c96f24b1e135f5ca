use crate::SortError;

/// Reserved entry point for an in-place partition-exchange quick sort.
///
/// Not implemented. Returns [`SortError::Unimplemented`] and leaves `v`
/// untouched, so callers can tell "sorted" apart from "nothing happened".
pub fn sort(_v: &mut [i32]) -> Result<(), SortError> {
    Err(SortError::Unimplemented {
        algorithm: "quick_sort",
    })
}
