//! Rebalance runner.
//!
//! Loads a snapshot, runs one hedge computation and produces the report.
//! Placing the order and recording the new target are left to whoever
//! consumes the report; they must only do so for a successful result.

use crate::config::AppConfig;
use crate::error::AppResult;
use crate::report::HedgeReport;
use crate::snapshot::PositionSnapshot;
use lphedge_sizer::{compute_hedge, HedgeOutcome};
use tracing::info;

/// Runs rebalance computations under one configuration.
#[derive(Debug, Clone)]
pub struct Rebalancer {
    config: AppConfig,
}

impl Rebalancer {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Compute the hedge for `snapshot`.
    ///
    /// `sequence_override` replaces the snapshot's sequence value, for callers
    /// that number rebalances themselves.
    pub fn rebalance(
        &self,
        snapshot: &PositionSnapshot,
        sequence_override: Option<u64>,
    ) -> AppResult<(HedgeOutcome, HedgeReport)> {
        let mut request = snapshot.to_request(&self.config)?;
        if let Some(sequence) = sequence_override {
            request.sequence = sequence;
        }

        info!(
            entity = %request.entity,
            sequence = request.sequence,
            ranges = request.ranges.len(),
            "Rebalance requested"
        );

        let outcome = compute_hedge(&request)?;

        let report = HedgeReport::new(snapshot.entity.clone(), request.sequence, &outcome);
        Ok((outcome, report))
    }
}
