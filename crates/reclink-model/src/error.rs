//! Error types for linkage operations.

use std::fmt;

use thiserror::Error;

/// Which record set a pair index points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

/// Errors that can occur in comparison, ranking, refinement, and fusion.
///
/// Missing values never produce an error; comparators report them as `NaN`
/// scores instead, so a single null cell cannot abort a whole table.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum LinkageError {
    /// Malformed parameter (empty column list, wrong arity, and similar).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A named column does not exist where one is required.
    #[error("column not found: {0}")]
    MissingColumn(String),

    /// Two sequences that must be aligned have different lengths.
    #[error("length mismatch: left has {left} values, right has {right}")]
    LengthMismatch { left: usize, right: usize },

    /// A pair index points outside its record set.
    #[error("{side} record index {index} out of bounds for record set of {len}")]
    RecordIndexOutOfBounds {
        side: Side,
        index: usize,
        len: usize,
    },

    /// A guaranteed-unreachable state was reached; always a bug.
    #[error("internal invariant violated: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, LinkageError>;
