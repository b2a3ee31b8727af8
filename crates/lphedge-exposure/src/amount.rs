//! Base-asset amount held by liquidity between two square-root prices.

use lphedge_core::{
    div_rounding_up, ensure_ordered, mul_div_rounding_up, widen_sqrt_price, CoreError, Result,
    U160, U256, RESOLUTION,
};

/// Base-asset amount for `liquidity` spread over `[sqrt_low, sqrt_high]`.
///
/// `ceil((liquidity << 96) * (high - low) / (high * low))`
///
/// Rounded up so exposure is never under-reported. `high * low` can exceed
/// 256 bits, so the division is split as `ceil(ceil(n / high) / low)`,
/// which is equal to the single ceiling for positive integers.
///
/// # Errors
/// - [`CoreError::InvalidRange`] if `sqrt_low >= sqrt_high` or `sqrt_low == 0`.
/// - Math overflow if the amount does not fit in 256 bits.
pub fn base_amount_delta(sqrt_low: U160, sqrt_high: U160, liquidity: u128) -> Result<U256> {
    ensure_ordered(sqrt_low, sqrt_high)?;
    if sqrt_low.is_zero() {
        return Err(CoreError::InvalidRange {
            lower: sqrt_low,
            upper: sqrt_high,
        });
    }

    let low = widen_sqrt_price(sqrt_low);
    let high = widen_sqrt_price(sqrt_high);

    let numerator1 = U256::from(liquidity) << usize::from(RESOLUTION);
    let numerator2 = high - low;

    let per_high = mul_div_rounding_up(numerator1, numerator2, high)?;
    Ok(div_rounding_up(per_high, low)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lphedge_core::Q96;

    fn q(n: u64, d: u64) -> U160 {
        let q96 = U160::from(1u8) << 96;
        q96 * U160::from(n) / U160::from(d)
    }

    #[test]
    fn test_full_range_amount() {
        // L * (1/sqrt(1) - 1/sqrt(4)) = L / 2
        let amount = base_amount_delta(q(1, 1), q(2, 1), 1_000_000).unwrap();
        assert_eq!(amount, U256::from(500_000u64));
    }

    #[test]
    fn test_sub_range_rounds_up() {
        // L * (1/1.5 - 1/2) = L / 6 = 166666.67
        let amount = base_amount_delta(q(3, 2), q(2, 1), 1_000_000).unwrap();
        assert_eq!(amount, U256::from(166_667u64));
    }

    #[test]
    fn test_zero_liquidity() {
        let amount = base_amount_delta(q(1, 1), q(2, 1), 0).unwrap();
        assert_eq!(amount, U256::ZERO);
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let err = base_amount_delta(q(2, 1), q(1, 1), 1).unwrap_err();
        assert!(err.is_invalid_range());
    }

    #[test]
    fn test_equal_bounds_rejected() {
        let err = base_amount_delta(q(1, 1), q(1, 1), 1).unwrap_err();
        assert!(err.is_invalid_range());
    }

    #[test]
    fn test_zero_lower_bound_rejected() {
        let err = base_amount_delta(U160::ZERO, q(1, 1), 1).unwrap_err();
        assert!(err.is_invalid_range());
    }

    #[test]
    fn test_max_liquidity_wide_range() {
        // Widest bounds with max liquidity stay within 256 bits
        let amount = base_amount_delta(U160::from(1u8), U160::MAX, u128::MAX).unwrap();
        assert!(amount > U256::ZERO);
        assert!(amount <= U256::from(u128::MAX) * Q96);
    }
}
