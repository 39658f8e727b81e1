use serde::Serialize;

use cortica_core::memory::MemoryEntry;

/// A retrieval hit: the entry plus its decay-weighted similarity score.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredEntry {
    pub entry: MemoryEntry,
    /// `cosine(query, entry) x freshness`, in [-1, 1]. Freshness is sampled
    /// before the access refreshes the entry, so the score reflects strength
    /// at the moment of the read.
    pub score: f64,
}
