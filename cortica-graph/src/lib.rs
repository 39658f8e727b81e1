//! # cortica-graph
//!
//! The memory graph: similarity-linked storage with decay-weighted retrieval,
//! greedy association traversal, and strength-based pruning.
//!
//! Single-writer by construction: every mutating operation takes `&mut self`,
//! so concurrent callers must serialize outside the core (one graph per
//! logical caller, or a lock around the instance).

mod adjacency;
mod graph;
mod pruning;
mod scored;
mod traversal;

pub use adjacency::Neighbor;
pub use graph::MemoryGraph;
pub use scored::ScoredEntry;
