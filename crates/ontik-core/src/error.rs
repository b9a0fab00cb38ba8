use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which field of a triplet failed range validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TripletField {
    /// Head entity index.
    Head,
    /// Relation index.
    Relation,
    /// Tail entity index.
    Tail,
}

impl std::fmt::Display for TripletField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Head => write!(f, "head"),
            Self::Relation => write!(f, "relation"),
            Self::Tail => write!(f, "tail"),
        }
    }
}

/// Errors that can occur in ontik-core.
#[derive(Error, Debug)]
pub enum Error {
    /// Construction-time invariant violation: group count does not
    /// match the declared vocabulary size. Fatal, not recoverable.
    #[error("expected {expected} adjacency groups but got {actual}")]
    StructuralMismatch {
        /// Declared group count (one group per entity).
        expected: usize,
        /// Groups actually supplied.
        actual: usize,
    },
    /// A global item index outside `[0, total)`.
    #[error("index {index} out of bounds for store of {total} items")]
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// Total item count at the time of access.
        total: usize,
    },
    /// A triplet field outside its valid id range.
    #[error("expected {field} to be between 0 and {max} but was {value}")]
    TripletOutOfBounds {
        /// Offending field.
        field: TripletField,
        /// Offending value.
        value: usize,
        /// Largest valid id (inclusive).
        max: usize,
    },
}

/// Result type alias for ontik-core.
pub type Result<T> = std::result::Result<T, Error>;
