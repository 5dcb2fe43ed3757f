//! Error types for the binary GA.
//!
//! Only configuration problems are errors. An objective returning
//! negative infinity is an ordinary fitness value, not a failure.

use thiserror::Error;

/// Errors raised when constructing a GA run.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GaError {
    /// The search domain is empty, inverted, or not finite.
    #[error("invalid domain: lower ({lower}) must be finite and strictly below upper ({upper})")]
    InvalidBounds { lower: f64, upper: f64 },

    /// The required precision is not a positive finite number.
    #[error("precision must be positive and finite, got {0}")]
    InvalidPrecision(f64),

    /// The base population is empty.
    #[error("population_size must be at least 1, got {0}")]
    InvalidPopulationSize(usize),

    /// The offspring growth factor is not positive.
    #[error("growth_factor must be positive and finite, got {0}")]
    InvalidGrowthFactor(f64),

    /// A mutation threshold lies outside `[0, 1]`.
    #[error("{name} must lie in [0, 1], got {value}")]
    InvalidProbability { name: &'static str, value: f64 },

    /// The derived chromosome does not fit in a `u64`.
    #[error("chromosome of {bits} bits exceeds the 63-bit decoding limit")]
    ChromosomeTooLong { bits: usize },

    /// A chromosome of the wrong length was handed to the engine.
    #[error("chromosome length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, GaError>;
