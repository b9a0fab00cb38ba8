use thiserror::Error;

/// Errors that can occur in ontik-rel.
#[derive(Error, Debug)]
pub enum Error {
    /// A flattened pair index outside `[0, len)`.
    #[error("non-existing pair at position {index} (store holds {total})")]
    PairOutOfBounds {
        /// The offending index.
        index: usize,
        /// Total pair count at the time of access.
        total: usize,
    },
    /// Label count does not match the derived pair count.
    #[error("expected {expected} labels but got {actual}")]
    LabelCount {
        /// Pairs derived from the sentences.
        expected: usize,
        /// Labels actually supplied.
        actual: usize,
    },
    /// A label outside the declared relation vocabulary.
    #[error("undefined label {0:?}")]
    UndefinedLabel(String),
    /// A requested mention number has no marker in the sentence.
    #[error("no <e{number}> marker in sentence")]
    MarkerNotFound {
        /// The missing mention number.
        number: usize,
    },
    /// A record line that does not match the expected format.
    #[error("malformed record at line {line}")]
    MalformedRecord {
        /// 1-based line number in the input.
        line: usize,
    },
    /// IO error while reading records.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for ontik-rel.
pub type Result<T> = std::result::Result<T, Error>;
