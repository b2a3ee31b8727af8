//! Concentrated-liquidity domain types.
//!
//! Square-root prices use the Q64.96 fixed-point format: a `U160` whose
//! lowest 96 bits are fractional, so `1.0` is `2^96`.

use alloy::primitives::aliases::U160;
use alloy::primitives::U256;
use std::fmt;

use crate::error::{CoreError, Result};

/// Number of fractional bits in a Q64.96 value.
pub const RESOLUTION: u8 = 96;

/// `2^96`, i.e. `1.0` in Q64.96.
pub const Q96: U256 = U256::from_limbs([0, 1 << 32, 0, 0]);

/// Denominator for parts-per-ten-thousand quantities.
pub const BPS_DENOMINATOR: u32 = 10_000;

/// Widens a Q64.96 square-root price to 256 bits.
#[inline]
pub fn widen_sqrt_price(sqrt_price: U160) -> U256 {
    U256::from(sqrt_price)
}

/// One continuous-liquidity segment of a position.
///
/// Invariant: `sqrt_price_lower < sqrt_price_upper`. [`PriceRange::new`]
/// enforces it; ranges built field-by-field are checked again when their
/// amounts are computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PriceRange {
    /// Square root of the lower price bound (Q64.96).
    pub sqrt_price_lower: U160,
    /// Square root of the upper price bound (Q64.96).
    pub sqrt_price_upper: U160,
    /// Liquidity deployed across the range.
    pub liquidity: u128,
}

impl PriceRange {
    /// Create a validated range.
    ///
    /// # Errors
    /// [`CoreError::InvalidRange`] if `lower >= upper`. Inputs are never
    /// reordered.
    pub fn new(sqrt_price_lower: U160, sqrt_price_upper: U160, liquidity: u128) -> Result<Self> {
        let range = Self {
            sqrt_price_lower,
            sqrt_price_upper,
            liquidity,
        };
        range.validate()?;
        Ok(range)
    }

    /// Check the bound ordering.
    pub fn validate(&self) -> Result<()> {
        ensure_ordered(self.sqrt_price_lower, self.sqrt_price_upper)
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}] L={}",
            self.sqrt_price_lower, self.sqrt_price_upper, self.liquidity
        )
    }
}

/// Fails with [`CoreError::InvalidRange`] unless `lower < upper`.
#[inline]
pub fn ensure_ordered(lower: U160, upper: U160) -> Result<()> {
    if lower >= upper {
        return Err(CoreError::InvalidRange { lower, upper });
    }
    Ok(())
}
