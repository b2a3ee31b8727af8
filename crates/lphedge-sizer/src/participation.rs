//! Participation fraction resolution.
//!
//! The share of exposure to hedge is either an explicit override or the
//! fraction of participants that opted in, in parts-per-ten-thousand.

use lphedge_core::BPS_DENOMINATOR;

use crate::error::{SizerError, SizerResult};

/// Inputs for the effective participation fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Participation {
    /// Participants currently opted in.
    pub enabled_count: u64,
    /// All participants of the entity.
    pub total_count: u64,
    /// Explicit fraction in bps; zero means derive from the counts.
    pub override_bps: u32,
}

impl Participation {
    /// Fixed fraction, ignoring the counts.
    pub fn fixed(bps: u32) -> Self {
        Self {
            override_bps: bps,
            ..Self::default()
        }
    }

    /// Fraction derived from opt-in counts.
    pub fn from_counts(enabled_count: u64, total_count: u64) -> Self {
        Self {
            enabled_count,
            total_count,
            override_bps: 0,
        }
    }

    /// Effective participation in bps (0..=10000).
    ///
    /// A nonzero override wins. Otherwise `enabled * 10000 / total`,
    /// truncated and clamped to 10000; `total == 0` resolves to zero.
    ///
    /// # Errors
    /// [`SizerError::InvalidParticipation`] for an override above 10000.
    pub fn resolve(&self) -> SizerResult<u32> {
        if self.override_bps != 0 {
            if self.override_bps > BPS_DENOMINATOR {
                return Err(SizerError::InvalidParticipation(self.override_bps));
            }
            return Ok(self.override_bps);
        }

        if self.total_count == 0 {
            return Ok(0);
        }

        let fraction = u128::from(self.enabled_count) * u128::from(BPS_DENOMINATOR)
            / u128::from(self.total_count);
        // clamped, so the narrowing cannot fail
        Ok(fraction.min(u128::from(BPS_DENOMINATOR)) as u32)
    }
}
