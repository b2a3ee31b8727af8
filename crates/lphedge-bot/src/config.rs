//! Application configuration.

use crate::error::{AppError, AppResult};
use lphedge_core::Address;
use lphedge_sizer::{InstrumentSpec, SizerConfig};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Top-level configuration, loaded from TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Address of the party running the computation (0x-prefixed hex).
    pub caller: String,

    /// Decimal precisions of the base asset and the hedge instrument.
    pub instrument: InstrumentSpec,

    /// Slippage and participation settings.
    #[serde(default)]
    pub sizer: SizerConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &str) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("Failed to read config: {e}")))?;
        Self::from_toml(&content)
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_toml(content: &str) -> AppResult<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| AppError::Config(format!("Failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Check addresses and basis-point ranges.
    pub fn validate(&self) -> AppResult<()> {
        self.caller_address()?;
        self.sizer
            .validate()
            .map_err(|e| AppError::Config(e.to_string()))
    }

    /// Parsed caller address.
    pub fn caller_address(&self) -> AppResult<Address> {
        Address::from_str(&self.caller)
            .map_err(|e| AppError::Config(format!("Invalid caller address {}: {e}", self.caller)))
    }
}
