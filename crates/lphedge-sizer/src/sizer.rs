//! Exposure to hedge target, delta and order parameters.
//!
//! ```text
//! ranges + sqrt price ─→ exposure_breakdown (base decimals)
//!                          └─ scale_decimals (size decimals)
//!                               └─ × participation / 10000, negated ─→ target
//! target − current position ─→ delta ─→ side, size, limit price, request id
//! ```
//!
//! The computation is a pure function of the request. The caller supplies
//! the position snapshot, the sequence value and the previous target, and is
//! responsible for recording the new target only after acting on the result.

use lphedge_core::{
    mul_div, scale_decimals, to_decimal, to_decimal_unsigned, Address, MathError, OrderSide,
    PriceRange, I256, U160, U256, BPS_DENOMINATOR,
};
use lphedge_exposure::{exposure_breakdown, RangeExposure};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::SizerResult;
use crate::participation::Participation;
use crate::request_id::RequestId;
use crate::slippage::limit_price;

/// Decimal precisions of the base asset and the hedge instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstrumentSpec {
    /// Size decimals of the derivative instrument (szDecimals).
    pub size_decimals: u8,
    /// Native decimals of the base asset.
    pub base_decimals: u8,
}

/// One rebalance computation's inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HedgeRequest {
    /// Current square-root price (Q64.96).
    pub sqrt_price: U160,
    /// The position's liquidity ranges.
    pub ranges: Vec<PriceRange>,
    pub instrument: InstrumentSpec,
    pub participation: Participation,
    /// Slippage tolerance for the adjusting order (bps).
    pub slippage_bps: u32,
    /// Reference mark price the limit price is derived from.
    pub reference_price: U256,
    /// Current signed hedge position, in size decimals.
    pub current_position: I256,
    /// Target recorded by the caller after the previous rebalance.
    pub previous_target: Option<I256>,
    /// Caller-supplied sequence value (e.g. block height).
    pub sequence: u64,
    /// Entity whose exposure is hedged.
    pub entity: Address,
    /// Party performing the computation.
    pub caller: Address,
}

/// Order needed to move the position onto the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HedgeOrder {
    /// True when the position must grow (buy).
    pub is_increasing: bool,
    /// Unsigned order size, in size decimals.
    pub size: U256,
    /// Slippage-adjusted limit price.
    pub limit_price: U256,
    pub request_id: RequestId,
}

impl HedgeOrder {
    pub fn side(&self) -> OrderSide {
        OrderSide::from_increasing(self.is_increasing)
    }

    /// Order size in instrument units.
    pub fn size_decimal(&self, size_decimals: u8) -> lphedge_core::Result<Decimal> {
        to_decimal_unsigned(self.size, size_decimals)
    }
}

/// Result of one rebalance computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HedgeResult {
    /// Aggregate base-asset exposure, in base decimals.
    pub exposure: U256,
    /// Per-range contributions to `exposure`.
    pub ranges: Vec<RangeExposure>,
    /// Exposure rescaled to size decimals.
    pub scaled_exposure: U256,
    /// Effective participation (bps).
    pub participation_bps: u32,
    pub size_decimals: u8,
    pub current_position: I256,
    pub previous_target: Option<I256>,
    /// Signed target hedge position, in size decimals.
    pub target: I256,
    /// `target - current_position`.
    pub delta: I256,
    /// `None` when the position already equals the target.
    pub order: Option<HedgeOrder>,
}

impl HedgeResult {
    pub fn needs_order(&self) -> bool {
        self.order.is_some()
    }

    /// Whether the target differs from the previously recorded one.
    pub fn target_changed(&self) -> bool {
        self.previous_target != Some(self.target)
    }

    pub fn is_increasing(&self) -> bool {
        self.delta.is_positive()
    }

    /// Target in instrument units.
    pub fn target_decimal(&self) -> lphedge_core::Result<Decimal> {
        to_decimal(self.target, self.size_decimals)
    }

    /// Delta in instrument units.
    pub fn delta_decimal(&self) -> lphedge_core::Result<Decimal> {
        to_decimal(self.delta, self.size_decimals)
    }
}

/// Outcome of [`compute_hedge`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HedgeOutcome {
    /// Participation is zero: no target change and no order.
    NoAction,
    Hedge(HedgeResult),
}

impl HedgeOutcome {
    pub fn is_no_action(&self) -> bool {
        matches!(self, Self::NoAction)
    }

    pub fn result(&self) -> Option<&HedgeResult> {
        match self {
            Self::NoAction => None,
            Self::Hedge(result) => Some(result),
        }
    }
}

/// Signed target for a scaled exposure: `-(scaled * bps / 10000)`, floored.
pub fn target_size(scaled_exposure: U256, participation_bps: u32) -> SizerResult<I256> {
    let magnitude = mul_div(
        scaled_exposure,
        U256::from(participation_bps),
        U256::from(BPS_DENOMINATOR),
    )?;
    let magnitude = I256::try_from(magnitude).map_err(|_| MathError::Overflow)?;
    Ok(-magnitude)
}

/// Compute the hedge for one rebalance request.
///
/// # Errors
/// Any invalid range, invalid fraction or tolerance, or arithmetic failure
/// aborts the computation.
pub fn compute_hedge(request: &HedgeRequest) -> SizerResult<HedgeOutcome> {
    let participation_bps = request.participation.resolve()?;
    if participation_bps == 0 {
        warn!(
            entity = %request.entity,
            enabled = request.participation.enabled_count,
            total = request.participation.total_count,
            "Zero participation, no hedge action"
        );
        return Ok(HedgeOutcome::NoAction);
    }

    let breakdown = exposure_breakdown(&request.ranges, request.sqrt_price)?;
    let exposure = breakdown.total;
    let scaled_exposure = scale_decimals(
        exposure,
        request.instrument.base_decimals,
        request.instrument.size_decimals,
    )?;
    let target = target_size(scaled_exposure, participation_bps)?;
    let delta = target
        .checked_sub(request.current_position)
        .ok_or(MathError::Overflow)?;

    debug!(
        entity = %request.entity,
        ranges = request.ranges.len(),
        active_ranges = breakdown.active_count(),
        exposure = %exposure,
        scaled_exposure = %scaled_exposure,
        participation_bps,
        "Exposure computed"
    );

    let order = if delta.is_zero() {
        None
    } else {
        let is_increasing = delta.is_positive();
        let size = delta.unsigned_abs();
        let limit_price = limit_price(request.reference_price, request.slippage_bps, is_increasing)?;
        let request_id = RequestId::derive(
            request.sequence,
            request.entity,
            target,
            size,
            request.caller,
        );
        Some(HedgeOrder {
            is_increasing,
            size,
            limit_price,
            request_id,
        })
    };

    let result = HedgeResult {
        exposure,
        ranges: breakdown.ranges,
        scaled_exposure,
        participation_bps,
        size_decimals: request.instrument.size_decimals,
        current_position: request.current_position,
        previous_target: request.previous_target,
        target,
        delta,
        order,
    };

    match &result.order {
        Some(order) => info!(
            entity = %request.entity,
            target = %result.target,
            current = %result.current_position,
            delta = %result.delta,
            side = %order.side(),
            size = %order.size,
            limit_price = %order.limit_price,
            request_id = %order.request_id,
            "Hedge rebalance required"
        ),
        None => info!(
            entity = %request.entity,
            target = %result.target,
            current = %result.current_position,
            "Hedge on target, no order"
        ),
    }

    Ok(HedgeOutcome::Hedge(result))
}
