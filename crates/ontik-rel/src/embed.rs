//! Word-embedding boundary.

/// Word-vector lookup seam.
///
/// Implementations (fastText bindings, a cached table, a test stub)
/// live outside this crate; the dataset-construction step that turns
/// rewritten sentences into per-word vector sequences consumes this
/// trait and nothing else.
///
/// Returned vectors are owned and independent: the provider must not
/// hand back views into shared storage, so a caller mutating one
/// entry can never corrupt another.
pub trait EmbeddingProvider {
    /// Embedding dimensionality; every returned vector has this length.
    fn dim(&self) -> usize;

    /// Owned embedding for a word. Out-of-vocabulary handling (zero
    /// vector, subword composition) is the implementation's choice.
    fn embedding(&self, word: &str) -> Vec<f32>;
}
