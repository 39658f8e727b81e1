//! # cortica-decay
//!
//! Time-based memory strength. Tracks a last-touched timestamp per entry and
//! converts elapsed time into a strength in [0, 1] via exponential half-life
//! decay. Accessing a memory reinforces it; entries whose strength falls
//! below a threshold become candidates for pruning.

mod engine;
pub mod formula;

pub use engine::DecayEngine;
