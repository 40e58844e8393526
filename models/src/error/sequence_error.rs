use crate::ErrorLocation;

use thiserror::Error as ThisError;

/// Failures of bounds-checked sequence access.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum SequenceError {
    #[error("Index Error: index {index} out of range for length {len} {location}")]
    IndexOutOfRange {
        index: usize,
        len: usize,
        location: ErrorLocation,
    },

    #[error("Index Error: negative index {index} is not supported (length {len}) {location}")]
    NegativeIndex {
        index: i64,
        len: usize,
        location: ErrorLocation,
    },

    #[error("Slice Error: range {start}..{end} out of range for length {len} {location}")]
    SliceOutOfRange {
        start: usize,
        end: usize,
        len: usize,
        location: ErrorLocation,
    },
}

impl SequenceError {
    #[track_caller]
    pub fn out_of_range(index: usize, len: usize) -> Self {
        SequenceError::IndexOutOfRange {
            index,
            len,
            location: ErrorLocation::caller(),
        }
    }

    #[track_caller]
    pub fn negative(index: i64, len: usize) -> Self {
        SequenceError::NegativeIndex {
            index,
            len,
            location: ErrorLocation::caller(),
        }
    }

    #[track_caller]
    pub fn slice_out_of_range(start: usize, end: usize, len: usize) -> Self {
        SequenceError::SliceOutOfRange {
            start,
            end,
            len,
            location: ErrorLocation::caller(),
        }
    }
}
