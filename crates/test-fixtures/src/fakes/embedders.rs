use recall_core::errors::{RecallResult, RetrievalError};
use recall_core::traits::IQueryEmbedder;

/// Deterministic bag-of-bytes embedder, L2-normalized.
pub struct HashEmbedder {
    dims: usize,
}

impl HashEmbedder {
    pub fn new(dims: usize) -> Self {
        Self { dims: dims.max(1) }
    }
}

impl Default for HashEmbedder {
    fn default() -> Self {
        Self::new(16)
    }
}

impl IQueryEmbedder for HashEmbedder {
    fn embed(&self, query: &str) -> RecallResult<Vec<f32>> {
        let mut vector = vec![0.0f32; self.dims];
        for (i, byte) in query.bytes().enumerate() {
            vector[(i + byte as usize) % self.dims] += f32::from(byte);
        }
        let norm = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            vector.iter_mut().for_each(|x| *x /= norm);
        }
        Ok(vector)
    }

    fn dimensions(&self) -> usize {
        self.dims
    }

    fn name(&self) -> &str {
        "hash"
    }
}

/// Embedder whose every call fails with `reason`.
pub struct FailingEmbedder {
    reason: String,
}

impl FailingEmbedder {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl IQueryEmbedder for FailingEmbedder {
    fn embed(&self, _query: &str) -> RecallResult<Vec<f32>> {
        Err(RetrievalError::EmbeddingFailed {
            embedder: self.name().to_string(),
            reason: self.reason.clone(),
        }
        .into())
    }

    fn dimensions(&self) -> usize {
        0
    }

    fn name(&self) -> &str {
        "failing"
    }
}
