use serde::{Deserialize, Serialize};

use crate::errors::{CorticaError, CorticaResult};

/// Default half-life: one hour. Session-scale memory fades within a workday.
pub const DEFAULT_HALF_LIFE_SECS: f64 = 3600.0;

/// Default similarity threshold for auto-linking. Only strongly similar
/// pairs link, which keeps the graph sparse.
pub const DEFAULT_LINK_THRESHOLD: f64 = 0.7;

/// Default strength cutoff below which pruning forgets an entry.
pub const DEFAULT_PRUNE_THRESHOLD: f64 = 0.1;

/// Memory graph configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Whether entries lose strength over time. When false, freshness is
    /// always 1.0 and pruning is a no-op.
    pub use_decay: bool,
    /// Seconds after which an untouched entry's strength halves.
    pub decay_half_life_secs: f64,
    /// Minimum cosine similarity for two entries to be linked at store time.
    pub link_threshold: f64,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            use_decay: true,
            decay_half_life_secs: DEFAULT_HALF_LIFE_SECS,
            link_threshold: DEFAULT_LINK_THRESHOLD,
        }
    }
}

impl GraphConfig {
    /// Reject parameters that would produce NaN or infinite strength values
    /// downstream. Called at graph construction.
    pub fn validate(&self) -> CorticaResult<()> {
        if !self.decay_half_life_secs.is_finite() || self.decay_half_life_secs <= 0.0 {
            return Err(CorticaError::InvalidConfig {
                reason: format!(
                    "decay_half_life_secs must be positive and finite, got {}",
                    self.decay_half_life_secs
                ),
            });
        }
        if !self.link_threshold.is_finite() || !(-1.0..=1.0).contains(&self.link_threshold) {
            return Err(CorticaError::InvalidConfig {
                reason: format!(
                    "link_threshold must lie in [-1, 1], got {}",
                    self.link_threshold
                ),
            });
        }
        Ok(())
    }
}
