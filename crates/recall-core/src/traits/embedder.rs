use crate::errors::RecallResult;

/// Turns query text into the embedding handed to providers.
pub trait IQueryEmbedder: Send + Sync {
    fn embed(&self, query: &str) -> RecallResult<Vec<f32>>;

    /// The dimensionality of embeddings produced by this embedder.
    fn dimensions(&self) -> usize;

    /// Human-readable embedder name.
    fn name(&self) -> &str;
}
