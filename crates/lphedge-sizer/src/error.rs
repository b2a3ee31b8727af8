//! Error types for lphedge-sizer.

use lphedge_core::{CoreError, MathError};
use thiserror::Error;

/// Hedge sizing failures.
///
/// Any of these aborts the whole computation; no partial result is produced.
#[derive(Debug, Error)]
pub enum SizerError {
    #[error("Core error: {0}")]
    Core(#[from] CoreError),

    #[error("Invalid participation fraction: {0} bps (max 10000)")]
    InvalidParticipation(u32),

    #[error("Invalid slippage tolerance: {0} bps (max 10000)")]
    InvalidSlippage(u32),
}

impl From<MathError> for SizerError {
    fn from(e: MathError) -> Self {
        Self::Core(CoreError::Math(e))
    }
}

impl SizerError {
    /// Returns the math failure, if this error is one.
    pub fn as_math(&self) -> Option<MathError> {
        match self {
            Self::Core(e) => e.as_math(),
            _ => None,
        }
    }

    pub fn is_invalid_range(&self) -> bool {
        matches!(self, Self::Core(e) if e.is_invalid_range())
    }
}

pub type SizerResult<T> = Result<T, SizerError>;
