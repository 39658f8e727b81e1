//! Shared test helpers: a manually advanced clock and small vector builders.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, TimeZone, Utc};
use cortica_core::traits::Clock;

/// A clock that only moves when told to. Clone handles share the same time.
#[derive(Clone)]
pub struct ManualClock {
    now: Arc<Mutex<DateTime<Utc>>>,
}

impl ManualClock {
    /// Start at a fixed, arbitrary epoch.
    pub fn new() -> Self {
        Self::starting_at(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
    }

    pub fn starting_at(start: DateTime<Utc>) -> Self {
        Self {
            now: Arc::new(Mutex::new(start)),
        }
    }

    /// Advance the shared time by whole seconds.
    pub fn advance_secs(&self, secs: i64) {
        *self.now.lock().unwrap() += Duration::seconds(secs);
    }

    /// Advance the shared time by milliseconds.
    pub fn advance_millis(&self, millis: i64) {
        *self.now.lock().unwrap() += Duration::milliseconds(millis);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

/// 2-D unit vector at `degrees` from the x axis. Handy for building graphs
/// with exact pairwise cosine similarities (cosine of the angle between).
pub fn unit_at_degrees(degrees: f64) -> Vec<f64> {
    let radians = degrees.to_radians();
    vec![radians.cos(), radians.sin()]
}
