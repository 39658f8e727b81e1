pub mod clock;
pub mod embedding;

pub use clock::{Clock, SystemClock};
pub use embedding::EmbeddingProvider;
