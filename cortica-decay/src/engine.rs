use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use cortica_core::errors::{CorticaError, CorticaResult};
use cortica_core::memory::MemoryId;
use cortica_core::traits::{Clock, SystemClock};

use crate::formula;

/// Tracks per-entry last-touched timestamps and derives strength from them.
///
/// The timestamp map is the single source of truth for freshness. Wall-clock
/// methods delegate to the `_at` variants, which take an explicit observation
/// time so callers (and tests) control the clock.
pub struct DecayEngine {
    half_life_secs: f64,
    last_touched: HashMap<MemoryId, DateTime<Utc>>,
    clock: Arc<dyn Clock>,
}

impl fmt::Debug for DecayEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecayEngine")
            .field("half_life_secs", &self.half_life_secs)
            .field("last_touched", &self.last_touched)
            .finish_non_exhaustive()
    }
}

impl DecayEngine {
    /// Create an engine with the given half-life in seconds.
    pub fn new(half_life_secs: f64) -> CorticaResult<Self> {
        Self::with_clock(half_life_secs, Arc::new(SystemClock))
    }

    /// Create with an injected time source.
    pub fn with_clock(half_life_secs: f64, clock: Arc<dyn Clock>) -> CorticaResult<Self> {
        if !half_life_secs.is_finite() || half_life_secs <= 0.0 {
            return Err(CorticaError::InvalidConfig {
                reason: format!("half-life must be positive and finite, got {half_life_secs}"),
            });
        }
        Ok(Self {
            half_life_secs,
            last_touched: HashMap::new(),
            clock,
        })
    }

    pub fn half_life_secs(&self) -> f64 {
        self.half_life_secs
    }

    /// Set the last-touched time for `id` to now. Last write wins.
    pub fn register(&mut self, id: &MemoryId) {
        let now = self.clock.now();
        self.register_at(id, now);
    }

    /// Set the last-touched time for `id` explicitly.
    pub fn register_at(&mut self, id: &MemoryId, timestamp: DateTime<Utc>) {
        self.last_touched.insert(id.clone(), timestamp);
    }

    /// Current strength of `id`, in [0, 1].
    pub fn strength(&self, id: &MemoryId) -> f64 {
        self.strength_at(id, self.clock.now())
    }

    /// Strength of `id` at an explicit observation time.
    ///
    /// An id that was never registered reads as freshly touched: 1.0. An
    /// unknown memory is never penalized for time it was not being tracked.
    pub fn strength_at(&self, id: &MemoryId, now: DateTime<Utc>) -> f64 {
        let last = match self.last_touched.get(id) {
            Some(t) => *t,
            None => return 1.0,
        };
        let elapsed_secs = (now - last).num_milliseconds() as f64 / 1000.0;
        formula::strength(elapsed_secs, self.half_life_secs)
    }

    /// Whether `id` has decayed below `threshold`.
    pub fn should_forget(&self, id: &MemoryId, threshold: f64) -> bool {
        self.should_forget_at(id, threshold, self.clock.now())
    }

    /// Forgettability at an explicit observation time.
    pub fn should_forget_at(&self, id: &MemoryId, threshold: f64, now: DateTime<Utc>) -> bool {
        self.strength_at(id, now) < threshold
    }

    /// Drop the timestamp for `id`. A future entry reusing the identity
    /// starts fresh.
    pub fn forget(&mut self, id: &MemoryId) {
        self.last_touched.remove(id);
    }

    /// Number of tracked identities.
    pub fn tracked(&self) -> usize {
        self.last_touched.len()
    }
}
