//! LP hedge rebalance runner.
//!
//! Thin orchestration around the sizing engine:
//! - TOML configuration (instrument decimals, slippage, participation)
//! - Position snapshot loading and parsing into a `HedgeRequest`
//! - One `compute_hedge` call per snapshot
//! - JSON report of the outcome for order placement and bookkeeping

pub mod app;
pub mod config;
pub mod error;
pub mod report;
pub mod snapshot;

pub use app::Rebalancer;
pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use report::HedgeReport;
pub use snapshot::PositionSnapshot;
