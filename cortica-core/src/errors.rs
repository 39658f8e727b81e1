/// Workspace-wide error type.
///
/// The core is pure computation, so the taxonomy is narrow: bad construction
/// parameters and vector shape errors. Empty-state conditions (querying or
/// pruning an empty graph) are not errors and return empty results instead.
#[derive(Debug, thiserror::Error)]
pub enum CorticaError {
    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("vector dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("threshold out of range: {value} (expected a finite value in [0, 1])")]
    InvalidThreshold { value: f64 },
}

pub type CorticaResult<T> = Result<T, CorticaError>;
