//! # cortica-core
//!
//! Foundation crate for the Cortica memory system.
//! Defines the entry types, errors, config, consumed traits, and the shared
//! similarity utilities. Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod memory;
pub mod similarity;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::GraphConfig;
pub use errors::{CorticaError, CorticaResult};
pub use memory::{MemoryEntry, MemoryId, Metadata, MetadataValue};
pub use traits::{Clock, EmbeddingProvider, SystemClock};
