//! Half-life strength formula.

/// Strength after `elapsed_secs` without access: `0.5 ^ (elapsed / half_life)`.
///
/// 1.0 at zero elapsed, 0.5 after one half-life, monotonically non-increasing
/// and asymptotic to 0.0, never negative. Negative elapsed (clock skew)
/// clamps to zero so strength never exceeds 1.0.
pub fn strength(elapsed_secs: f64, half_life_secs: f64) -> f64 {
    let elapsed = elapsed_secs.max(0.0);
    0.5f64.powf(elapsed / half_life_secs)
}
