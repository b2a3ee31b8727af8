//! Error types for lphedge-core.

use alloy::primitives::aliases::U160;
use thiserror::Error;

/// Failures of the full-precision integer routines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    #[error("Division by zero")]
    DivisionByZero,

    #[error("Arithmetic overflow")]
    Overflow,
}

/// Core error types.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Math error: {0}")]
    Math(#[from] MathError),

    #[error("Invalid range: lower {lower} must be below upper {upper}")]
    InvalidRange { lower: U160, upper: U160 },

    #[error("Decimal conversion error: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl CoreError {
    /// Returns the math failure, if this error is one.
    pub fn as_math(&self) -> Option<MathError> {
        match self {
            Self::Math(e) => Some(*e),
            _ => None,
        }
    }

    pub fn is_invalid_range(&self) -> bool {
        matches!(self, Self::InvalidRange { .. })
    }
}

/// Result type alias for math operations.
pub type MathResult<T> = std::result::Result<T, MathError>;

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
