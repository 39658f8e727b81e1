use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::MemoryId;
use super::metadata::Metadata;

/// One stored memory: content text, its embedding vector, and opaque
/// metadata. Immutable once created.
///
/// The vector's length must match every other entry in the same graph; the
/// graph checks this at store time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryEntry {
    pub id: MemoryId,
    /// The original text. Payload, not identity.
    pub content: String,
    /// Embedding vector, opaque coordinates in Euclidean space.
    pub vector: Vec<f64>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub metadata: Metadata,
}

impl MemoryEntry {
    /// Build a new entry with a freshly generated id.
    pub fn new(
        content: impl Into<String>,
        vector: Vec<f64>,
        metadata: Metadata,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: MemoryId::generate(),
            content: content.into(),
            vector,
            created_at,
            metadata,
        }
    }
}

/// Identity equality: two entries are equal if they have the same id.
/// Content is payload — two stores of identical text are distinct entries.
impl PartialEq for MemoryEntry {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for MemoryEntry {}
