//! Per-range and aggregate base-asset exposure.
//!
//! A range holds only the base asset while the price is at or below its lower
//! bound, only the quote asset at or above its upper bound, and a mix in
//! between. The base-asset share of an in-range position is the amount for
//! the remaining sub-range `[price, upper]`.

use lphedge_core::{CoreError, MathError, PriceRange, Result, U160, U256};
use tracing::debug;

use crate::amount::base_amount_delta;

/// Where the current price sits relative to a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeState {
    /// Price at or below the lower bound: fully in base asset.
    Below,
    /// Price strictly inside the range.
    Within,
    /// Price at or above the upper bound: fully in quote asset.
    Above,
}

impl RangeState {
    /// Classify `sqrt_price` against `range`.
    pub fn classify(range: &PriceRange, sqrt_price: U160) -> Self {
        if sqrt_price <= range.sqrt_price_lower {
            Self::Below
        } else if sqrt_price >= range.sqrt_price_upper {
            Self::Above
        } else {
            Self::Within
        }
    }
}

impl std::fmt::Display for RangeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Below => write!(f, "below"),
            Self::Within => write!(f, "within"),
            Self::Above => write!(f, "above"),
        }
    }
}

/// Exposure of a single range at a given price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeExposure {
    pub range: PriceRange,
    pub state: RangeState,
    /// Base-asset amount, in base-asset native decimals.
    pub base_amount: U256,
}

/// Base-asset amount currently held by `range` at `sqrt_price`.
///
/// # Errors
/// [`CoreError::InvalidRange`] for inverted bounds, whatever the price.
pub fn exposure_for_range(range: &PriceRange, sqrt_price: U160) -> Result<U256> {
    Ok(range_exposure(range, sqrt_price)?.base_amount)
}

/// Like [`exposure_for_range`], also reporting the range state.
pub fn range_exposure(range: &PriceRange, sqrt_price: U160) -> Result<RangeExposure> {
    range.validate()?;

    let state = RangeState::classify(range, sqrt_price);
    let base_amount = match state {
        RangeState::Below => base_amount_delta(
            range.sqrt_price_lower,
            range.sqrt_price_upper,
            range.liquidity,
        )?,
        RangeState::Within => {
            base_amount_delta(sqrt_price, range.sqrt_price_upper, range.liquidity)?
        }
        RangeState::Above => U256::ZERO,
    };

    debug!(
        range = %range,
        sqrt_price = %sqrt_price,
        state = %state,
        base_amount = %base_amount,
        "Range exposure"
    );

    Ok(RangeExposure {
        range: *range,
        state,
        base_amount,
    })
}

/// Sum of [`exposure_for_range`] over `ranges`.
///
/// Each range is rounded up on its own, so the total can exceed the exposure
/// of a single merged range by up to one unit per range. An empty sequence
/// yields zero.
pub fn total_exposure<'a, I>(ranges: I, sqrt_price: U160) -> Result<U256>
where
    I: IntoIterator<Item = &'a PriceRange>,
{
    ranges.into_iter().try_fold(U256::ZERO, |acc, range| {
        let amount = exposure_for_range(range, sqrt_price)?;
        acc.checked_add(amount)
            .ok_or(CoreError::Math(MathError::Overflow))
    })
}

/// Per-range exposures plus their total.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExposureBreakdown {
    pub ranges: Vec<RangeExposure>,
    pub total: U256,
}

impl ExposureBreakdown {
    /// Number of ranges currently holding any base asset.
    pub fn active_count(&self) -> usize {
        self.ranges
            .iter()
            .filter(|r| !r.base_amount.is_zero())
            .count()
    }
}

/// Compute [`range_exposure`] for every range and the checked total.
pub fn exposure_breakdown(ranges: &[PriceRange], sqrt_price: U160) -> Result<ExposureBreakdown> {
    let mut breakdown = ExposureBreakdown {
        ranges: Vec::with_capacity(ranges.len()),
        total: U256::ZERO,
    };
    for range in ranges {
        let exposure = range_exposure(range, sqrt_price)?;
        breakdown.total = breakdown
            .total
            .checked_add(exposure.base_amount)
            .ok_or(CoreError::Math(MathError::Overflow))?;
        breakdown.ranges.push(exposure);
    }
    Ok(breakdown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn q(n: u64, d: u64) -> U160 {
        (U160::from(1u8) << 96) * U160::from(n) / U160::from(d)
    }

    fn unit_range(liquidity: u128) -> PriceRange {
        PriceRange::new(q(1, 1), q(2, 1), liquidity).unwrap()
    }

    #[test]
    fn test_classify() {
        let range = unit_range(1);
        assert_eq!(RangeState::classify(&range, q(1, 2)), RangeState::Below);
        assert_eq!(RangeState::classify(&range, q(1, 1)), RangeState::Below);
        assert_eq!(RangeState::classify(&range, q(3, 2)), RangeState::Within);
        assert_eq!(RangeState::classify(&range, q(2, 1)), RangeState::Above);
        assert_eq!(RangeState::classify(&range, q(3, 1)), RangeState::Above);
    }

    #[test]
    fn test_exposure_in_range() {
        let range = unit_range(1_000_000);
        assert_eq!(
            exposure_for_range(&range, q(3, 2)).unwrap(),
            U256::from(166_667u64)
        );
    }

    #[test]
    fn test_exposure_below_range() {
        let range = unit_range(1_000_000);
        assert_eq!(
            exposure_for_range(&range, q(1, 2)).unwrap(),
            U256::from(500_000u64)
        );
        // at the lower bound counts as fully base
        assert_eq!(
            exposure_for_range(&range, q(1, 1)).unwrap(),
            U256::from(500_000u64)
        );
    }

    #[test]
    fn test_exposure_above_range() {
        let range = unit_range(1_000_000);
        assert_eq!(exposure_for_range(&range, q(3, 1)).unwrap(), U256::ZERO);
        assert_eq!(exposure_for_range(&range, q(2, 1)).unwrap(), U256::ZERO);
    }

    #[test]
    fn test_total_rounds_each_range() {
        let ranges = [unit_range(1_000_000), unit_range(2_000_000)];
        assert_eq!(
            total_exposure(&ranges, q(3, 2)).unwrap(),
            U256::from(500_001u64)
        );
    }

    #[test]
    fn test_total_empty_is_zero() {
        assert_eq!(total_exposure(&Vec::<PriceRange>::new(), q(1, 1)).unwrap(), U256::ZERO);
    }

    #[test]
    fn test_invalid_range_regardless_of_price() {
        let inverted = PriceRange {
            sqrt_price_lower: q(2, 1),
            sqrt_price_upper: q(1, 1),
            liquidity: 1_000_000,
        };
        for price in [q(1, 4), q(1, 1), q(3, 2), q(2, 1), q(5, 1)] {
            let err = exposure_for_range(&inverted, price).unwrap_err();
            assert!(err.is_invalid_range(), "price {price}");
        }
    }

    #[test]
    fn test_invalid_range_aborts_total() {
        let inverted = PriceRange {
            sqrt_price_lower: q(2, 1),
            sqrt_price_upper: q(1, 1),
            liquidity: 1,
        };
        let ranges = [unit_range(1_000_000), inverted];
        assert!(total_exposure(&ranges, q(3, 2)).unwrap_err().is_invalid_range());
        assert!(exposure_breakdown(&ranges, q(3, 2))
            .unwrap_err()
            .is_invalid_range());
    }

    #[test]
    fn test_breakdown_matches_total() {
        let ranges = [
            unit_range(1_000_000),
            PriceRange::new(q(2, 1), q(3, 1), 1_000_000).unwrap(),
            PriceRange::new(q(1, 4), q(1, 2), 1_000_000).unwrap(),
        ];
        let price = q(3, 2);
        let breakdown = exposure_breakdown(&ranges, price).unwrap();
        assert_eq!(breakdown.total, total_exposure(&ranges, price).unwrap());
        assert_eq!(breakdown.ranges[0].state, RangeState::Within);
        assert_eq!(breakdown.ranges[1].state, RangeState::Below);
        assert_eq!(breakdown.ranges[2].state, RangeState::Above);
        assert_eq!(breakdown.active_count(), 2);
    }

    #[test]
    fn test_below_beats_within_beats_above() {
        let range = unit_range(1_000_000);
        let below = exposure_for_range(&range, q(1, 2)).unwrap();
        let within = exposure_for_range(&range, q(3, 2)).unwrap();
        let above = exposure_for_range(&range, q(3, 1)).unwrap();
        assert!(below > within);
        assert!(within > above);

        let empty = unit_range(0);
        for price in [q(1, 2), q(3, 2), q(3, 1)] {
            assert_eq!(exposure_for_range(&empty, price).unwrap(), U256::ZERO);
        }
    }

    fn arb_range() -> impl Strategy<Value = PriceRange> {
        (1u128 << 64..1u128 << 100, 1u128..1u128 << 100, 0u128..1u128 << 100).prop_map(
            |(lower, width, liquidity)| PriceRange {
                sqrt_price_lower: U160::from(lower),
                sqrt_price_upper: U160::from(lower + width),
                liquidity,
            },
        )
    }

    proptest! {
        #[test]
        fn prop_non_increasing_in_price(
            range in arb_range(),
            a in 1u128..1u128 << 101,
            b in 1u128..1u128 << 101,
        ) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let at_lo = exposure_for_range(&range, U160::from(lo)).unwrap();
            let at_hi = exposure_for_range(&range, U160::from(hi)).unwrap();
            prop_assert!(at_lo >= at_hi);
        }

        #[test]
        fn prop_total_is_permutation_invariant(
            (ranges, shuffled) in proptest::collection::vec(arb_range(), 0..8)
                .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle())),
            price in 1u128..1u128 << 101,
        ) {
            let price = U160::from(price);
            let total = total_exposure(&ranges, price).unwrap();
            prop_assert_eq!(total, total_exposure(&shuffled, price).unwrap());

            let sum = ranges
                .iter()
                .map(|r| exposure_for_range(r, price).unwrap())
                .fold(U256::ZERO, |acc, x| acc + x);
            prop_assert_eq!(total, sum);
        }
    }
}
