//! Decimal-precision scaling between raw integer amounts.
//!
//! Raw amounts are integers in some number of decimals (18 for most ERC-20
//! base assets, the instrument's `szDecimals` for perp sizes). Conversion
//! between precisions is exact in the widening direction and truncating in
//! the narrowing direction. `rust_decimal` is only used to render raw sizes
//! in human units.

use alloy::primitives::{I256, U256};
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::{MathError, MathResult, Result};

/// `10^exp`, or `None` if it does not fit in 256 bits (exp > 77).
#[inline]
pub fn pow10(exp: u32) -> Option<U256> {
    U256::from(10u8).checked_pow(U256::from(exp))
}

/// Rescale `amount` from `from_decimals` to `to_decimals`.
///
/// - Widening multiplies by `10^(to - from)`; fails with
///   [`MathError::Overflow`] if the result exceeds 256 bits.
/// - Narrowing divides by `10^(from - to)`, truncating. A divisor beyond
///   256 bits yields zero.
pub fn scale_decimals(amount: U256, from_decimals: u8, to_decimals: u8) -> MathResult<U256> {
    if to_decimals >= from_decimals {
        let exp = u32::from(to_decimals - from_decimals);
        if amount.is_zero() {
            return Ok(U256::ZERO);
        }
        let factor = pow10(exp).ok_or(MathError::Overflow)?;
        amount.checked_mul(factor).ok_or(MathError::Overflow)
    } else {
        let exp = u32::from(from_decimals - to_decimals);
        Ok(match pow10(exp) {
            Some(divisor) => amount / divisor,
            None => U256::ZERO,
        })
    }
}

/// Render a raw signed size as a `Decimal` with `decimals` fractional digits.
///
/// # Errors
/// Fails if the value exceeds `Decimal`'s 96-bit mantissa or `decimals`
/// exceeds its maximum scale (28).
pub fn to_decimal(raw: I256, decimals: u8) -> Result<Decimal> {
    let mut value = Decimal::from_str(&raw.to_string())?;
    value.set_scale(u32::from(decimals))?;
    Ok(value)
}

/// Unsigned counterpart of [`to_decimal`].
pub fn to_decimal_unsigned(raw: U256, decimals: u8) -> Result<Decimal> {
    let mut value = Decimal::from_str(&raw.to_string())?;
    value.set_scale(u32::from(decimals))?;
    Ok(value)
}
