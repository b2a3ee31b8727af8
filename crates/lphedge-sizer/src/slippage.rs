//! Slippage-adjusted limit prices.

use lphedge_core::{mul_div, U256, BPS_DENOMINATOR};

use crate::error::{SizerError, SizerResult};

/// Limit price for an adjusting order.
///
/// - Increasing (buy): `reference * (10000 + slippage_bps) / 10000`
/// - Decreasing (sell): `reference * (10000 - slippage_bps) / 10000`
///
/// Floor division. A tolerance of zero returns `reference` unchanged.
///
/// # Errors
/// [`SizerError::InvalidSlippage`] for a tolerance above 10000 bps; math
/// overflow if the buy-side price exceeds 256 bits.
pub fn limit_price(reference: U256, slippage_bps: u32, is_increasing: bool) -> SizerResult<U256> {
    if slippage_bps > BPS_DENOMINATOR {
        return Err(SizerError::InvalidSlippage(slippage_bps));
    }
    if slippage_bps == 0 {
        return Ok(reference);
    }

    let factor = if is_increasing {
        BPS_DENOMINATOR + slippage_bps
    } else {
        BPS_DENOMINATOR - slippage_bps
    };

    Ok(mul_div(
        reference,
        U256::from(factor),
        U256::from(BPS_DENOMINATOR),
    )?)
}
