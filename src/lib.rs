use thiserror::Error;

pub use paste::paste;

/// A sort algorithm exposed by this crate, as seen by the shared test and
/// bench machinery. All algorithms here operate on plain machine integers.
pub trait Sort {
    fn name() -> String;

    fn sort(v: &mut [i32]);
}

/// Error returned by the reserved placeholder entry points.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SortError {
    #[error("sort algorithm `{algorithm}` is not implemented")]
    Unimplemented { algorithm: &'static str },
}

// Stamps out the `SortImpl` handle for an algorithm module, delegating to the
// module's whole-slice `sort` entry.
macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl {}

        impl crate::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            fn sort(v: &mut [i32]) {
                sort(v)
            }
        }
    };
}

pub mod patterns;
pub mod stable;
pub mod unstable;
