use thiserror::Error;

/// Errors returned by the ranking engine
///
/// Only invalid input is reported. Degenerate but well-typed input
/// (zero-range columns, criteria without a location, malformed comparison
/// keys) is absorbed by the engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RankError {
    #[error("at least one point is required")]
    EmptyPoints,

    #[error("at least one criterion is required")]
    EmptyCriteria,

    #[error("duplicate criterion name: {0}")]
    DuplicateCriterion(String),

    #[error("too many points: {count} (maximum {max})")]
    TooManyPoints { count: usize, max: usize },

    #[error("too many criteria: {count} (maximum {max})")]
    TooManyCriteria { count: usize, max: usize },

    #[error("{what} has length {actual}, expected {expected}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
}

impl RankError {
    /// Whether the error was caused by the caller's input
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, RankError::DimensionMismatch { .. })
    }
}
