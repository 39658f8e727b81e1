use std::fmt;

use serde::{Deserialize, Serialize};

/// Synthetic identifier for a stored memory entry (UUID v4).
///
/// Assigned per store call, so two entries with identical content text remain
/// distinct identities with independent decay timestamps and edges. Decay
/// state and adjacency are keyed by this id, never by content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MemoryId(String);

impl MemoryId {
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MemoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
