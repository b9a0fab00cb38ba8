use thiserror::Error;

/// Errors that can occur in ontik-kge.
#[derive(Error, Debug)]
pub enum Error {
    /// Store access error surfaced during evaluation.
    #[error(transparent)]
    Store(#[from] ontik_core::Error),
    /// Embedding rows disagree on dimensionality.
    #[error("embedding row {row} has dimension {actual} but expected {expected}")]
    DimensionMismatch {
        /// Offending row index.
        row: usize,
        /// Dimension of the offending row.
        actual: usize,
        /// Dimension established by the first row.
        expected: usize,
    },
    /// Evaluation requested over a store with no triplets.
    #[error("cannot evaluate over an empty triplet store")]
    EmptyStore,
}

/// Result type alias for ontik-kge.
pub type Result<T> = std::result::Result<T, Error>;
