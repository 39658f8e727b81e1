use crate::errors::CorticaResult;

/// Embedding generation provider.
///
/// The core never computes embeddings itself; it only consumes vectors of a
/// consistent dimensionality. Implementations live outside this workspace
/// (model inference, remote APIs, test stubs).
pub trait EmbeddingProvider: Send + Sync {
    /// Embed a single text, returning a vector of floats.
    fn embed(&self, text: &str) -> CorticaResult<Vec<f64>>;

    /// The dimensionality of vectors produced by this provider.
    fn dimensions(&self) -> usize;

    /// Human-readable provider name.
    fn name(&self) -> &str;
}
