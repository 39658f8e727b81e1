pub mod entry;
pub mod id;
pub mod metadata;

pub use entry::MemoryEntry;
pub use id::MemoryId;
pub use metadata::{Metadata, MetadataValue};
