//! JSON report of a rebalance computation.
//!
//! Integers are rendered as decimal strings so 256-bit values survive JSON
//! consumers that parse numbers as doubles. The `*_decimal` renderings are
//! `null` when the value does not fit in a `Decimal`.

use lphedge_exposure::RangeExposure;
use lphedge_sizer::{HedgeOrder, HedgeOutcome, HedgeResult};
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderReport {
    pub side: String,
    pub is_increasing: bool,
    /// Raw size, in size decimals.
    pub size: String,
    /// Size in instrument units.
    pub size_decimal: Option<Decimal>,
    pub limit_price: String,
    pub request_id: String,
    pub cloid: String,
}

impl OrderReport {
    fn new(order: &HedgeOrder, size_decimals: u8) -> Self {
        Self {
            side: order.side().to_string(),
            is_increasing: order.is_increasing,
            size: order.size.to_string(),
            size_decimal: order.size_decimal(size_decimals).ok(),
            limit_price: order.limit_price.to_string(),
            request_id: order.request_id.to_string(),
            cloid: order.request_id.cloid_hex(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RangeReport {
    pub sqrt_price_lower: String,
    pub sqrt_price_upper: String,
    pub liquidity: String,
    /// Price position relative to the range: below, within or above.
    pub state: String,
    pub base_amount: String,
}

fn range_reports(ranges: &[RangeExposure]) -> Vec<RangeReport> {
    ranges
        .iter()
        .map(|r| RangeReport {
            sqrt_price_lower: r.range.sqrt_price_lower.to_string(),
            sqrt_price_upper: r.range.sqrt_price_upper.to_string(),
            liquidity: r.range.liquidity.to_string(),
            state: r.state.to_string(),
            base_amount: r.base_amount.to_string(),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultReport {
    pub entity: String,
    pub sequence: u64,
    pub exposure: String,
    pub scaled_exposure: String,
    pub participation_bps: u32,
    pub current_position: String,
    pub previous_target: Option<String>,
    pub target: String,
    /// Target in instrument units.
    pub target_decimal: Option<Decimal>,
    pub target_changed: bool,
    pub delta: String,
    pub order: Option<OrderReport>,
    pub ranges: Vec<RangeReport>,
}

impl ResultReport {
    fn new(entity: String, sequence: u64, result: &HedgeResult) -> Self {
        let order = result
            .order
            .as_ref()
            .map(|o| OrderReport::new(o, result.size_decimals));
        Self {
            entity,
            sequence,
            exposure: result.exposure.to_string(),
            scaled_exposure: result.scaled_exposure.to_string(),
            participation_bps: result.participation_bps,
            current_position: result.current_position.to_string(),
            previous_target: result.previous_target.map(|t| t.to_string()),
            target: result.target.to_string(),
            target_decimal: result.target_decimal().ok(),
            target_changed: result.target_changed(),
            delta: result.delta.to_string(),
            order,
            ranges: range_reports(&result.ranges),
        }
    }
}

/// Report for one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum HedgeReport {
    NoAction { entity: String, sequence: u64 },
    Hedge(ResultReport),
}

impl HedgeReport {
    pub fn new(entity: String, sequence: u64, outcome: &HedgeOutcome) -> Self {
        match outcome {
            HedgeOutcome::NoAction => Self::NoAction { entity, sequence },
            HedgeOutcome::Hedge(result) => Self::Hedge(ResultReport::new(entity, sequence, result)),
        }
    }
}
