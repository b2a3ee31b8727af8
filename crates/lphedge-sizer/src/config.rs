//! Hedge sizing configuration.

use lphedge_core::BPS_DENOMINATOR;
use serde::{Deserialize, Serialize};

use crate::error::{SizerError, SizerResult};

/// Sizing parameters shared by every rebalance of an entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizerConfig {
    /// Slippage tolerance for the adjusting order (bps). Default: 50 (0.5%).
    #[serde(default = "default_slippage_bps")]
    pub slippage_bps: u32,

    /// Participation override (bps). Zero derives the fraction from
    /// opt-in counts. Default: 0.
    #[serde(default)]
    pub participation_override_bps: u32,
}

fn default_slippage_bps() -> u32 {
    50
}

impl Default for SizerConfig {
    fn default() -> Self {
        Self {
            slippage_bps: default_slippage_bps(),
            participation_override_bps: 0,
        }
    }
}

impl SizerConfig {
    /// Reject out-of-range basis-point values.
    pub fn validate(&self) -> SizerResult<()> {
        if self.slippage_bps > BPS_DENOMINATOR {
            return Err(SizerError::InvalidSlippage(self.slippage_bps));
        }
        if self.participation_override_bps > BPS_DENOMINATOR {
            return Err(SizerError::InvalidParticipation(
                self.participation_override_bps,
            ));
        }
        Ok(())
    }
}
