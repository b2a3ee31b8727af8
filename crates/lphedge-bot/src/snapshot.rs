//! Position snapshot input.
//!
//! A snapshot is the externally consistent view of one entity at one
//! sequence value: its liquidity ranges, the pool price, the hedge position
//! and the target recorded after the previous rebalance. Large integers are
//! strings (decimal or `0x` hex) since TOML integers are limited to 64 bits.

use crate::config::AppConfig;
use crate::error::{AppError, AppResult};
use lphedge_core::{Address, PriceRange, I256, U160, U256};
use lphedge_sizer::{HedgeRequest, Participation};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One liquidity range as written in a snapshot file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RangeInput {
    pub sqrt_price_lower: String,
    pub sqrt_price_upper: String,
    pub liquidity: String,
}

/// Opt-in counts as written in a snapshot file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParticipationInput {
    #[serde(default)]
    pub enabled_count: u64,
    #[serde(default)]
    pub total_count: u64,
}

/// Snapshot of one entity, loaded from TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionSnapshot {
    /// Entity address (0x-prefixed hex).
    pub entity: String,
    /// Current pool square-root price (Q64.96).
    pub sqrt_price_x96: String,
    /// Reference mark price for the limit price.
    pub reference_price: String,
    /// Current signed hedge position, in size decimals.
    #[serde(default = "default_zero")]
    pub current_position: String,
    /// Target recorded after the previous rebalance.
    #[serde(default)]
    pub previous_target: Option<String>,
    /// Sequence value (e.g. block height).
    #[serde(default)]
    pub sequence: u64,
    #[serde(default)]
    pub participation: ParticipationInput,
    #[serde(default)]
    pub ranges: Vec<RangeInput>,
}

fn default_zero() -> String {
    "0".to_string()
}

fn parse<T>(field: &str, value: &str) -> AppResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| AppError::Snapshot(format!("Invalid {field} {value:?}: {e}")))
}

impl RangeInput {
    /// Parse into a validated range.
    pub fn to_range(&self) -> AppResult<PriceRange> {
        let lower: U160 = parse("sqrt_price_lower", &self.sqrt_price_lower)?;
        let upper: U160 = parse("sqrt_price_upper", &self.sqrt_price_upper)?;
        let liquidity: u128 = parse("liquidity", &self.liquidity)?;
        Ok(PriceRange::new(lower, upper, liquidity)?)
    }
}

impl PositionSnapshot {
    /// Load a snapshot from a TOML file.
    pub fn from_file(path: &str) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::Snapshot(format!("Failed to read snapshot: {e}")))?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> AppResult<Self> {
        toml::from_str(content)
            .map_err(|e| AppError::Snapshot(format!("Failed to parse snapshot: {e}")))
    }

    /// Build the sizing request for this snapshot under `config`.
    ///
    /// Every field is parsed before anything is computed, so a malformed
    /// snapshot never produces a partial result.
    pub fn to_request(&self, config: &AppConfig) -> AppResult<HedgeRequest> {
        let ranges = self
            .ranges
            .iter()
            .map(RangeInput::to_range)
            .collect::<AppResult<Vec<_>>>()?;

        let previous_target = self
            .previous_target
            .as_deref()
            .map(|v| parse::<I256>("previous_target", v))
            .transpose()?;

        Ok(HedgeRequest {
            sqrt_price: parse("sqrt_price_x96", &self.sqrt_price_x96)?,
            ranges,
            instrument: config.instrument,
            participation: Participation {
                enabled_count: self.participation.enabled_count,
                total_count: self.participation.total_count,
                override_bps: config.sizer.participation_override_bps,
            },
            slippage_bps: config.sizer.slippage_bps,
            reference_price: parse::<U256>("reference_price", &self.reference_price)?,
            current_position: parse("current_position", &self.current_position)?,
            previous_target,
            sequence: self.sequence,
            entity: parse::<Address>("entity", &self.entity)?,
            caller: config.caller_address()?,
        })
    }
}
