//! Container error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during array operations.
///
/// Only checked access and storage acquisition surface errors. Every other
/// precondition (unchecked indexing, popping an empty array, inserting or
/// erasing at an invalid index) is a caller bug and panics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// Checked access with an index outside `[0, len)`.
    OutOfRange {
        /// The rejected index.
        index: usize,
        /// Logical length at the time of the access.
        len: usize,
    },
    /// Storage for the requested element count could not be obtained.
    ///
    /// Covers both capacity overflow and allocator refusal. The array that
    /// attempted the growth is left exactly as it was.
    AllocationFailed {
        /// Number of elements requested.
        requested: usize,
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} is out of range for length {len}")
            }
            Self::AllocationFailed { requested } => {
                write!(f, "allocation of {requested} elements failed")
            }
        }
    }
}

impl Error for ArrayError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_display_names_index_and_len() {
        let err = ArrayError::OutOfRange { index: 5, len: 3 };
        assert_eq!(err.to_string(), "index 5 is out of range for length 3");
    }

    #[test]
    fn allocation_failed_display() {
        let err = ArrayError::AllocationFailed { requested: 42 };
        assert_eq!(err.to_string(), "allocation of 42 elements failed");
    }

    #[test]
    fn usable_as_boxed_error() {
        let err: Box<dyn Error> = Box::new(ArrayError::OutOfRange { index: 0, len: 0 });
        assert!(err.source().is_none());
    }
}
