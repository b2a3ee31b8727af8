//! Application error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Snapshot error: {0}")]
    Snapshot(String),

    #[error("Core error: {0}")]
    Core(#[from] lphedge_core::CoreError),

    #[error("Sizer error: {0}")]
    Sizer(#[from] lphedge_sizer::SizerError),

    #[error("Telemetry error: {0}")]
    Telemetry(#[from] lphedge_telemetry::TelemetryError),

    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
