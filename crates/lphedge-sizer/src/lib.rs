//! Hedge sizing for concentrated-liquidity exposure.
//!
//! Turns a position's base-asset exposure into a signed target size for an
//! offsetting perp position and the order needed to reach it:
//! - `Participation`: share of exposure to hedge (override or opt-in counts)
//! - `compute_hedge`: exposure → scaled target → delta → order parameters
//! - `limit_price`: slippage-bounded limit price
//! - `RequestId`: deterministic identifier for order deduplication
//!
//! # Architecture
//!
//! ```text
//! HedgeRequest ─→ compute_hedge()
//!                  ├─ Participation::resolve()   (0 → NoAction)
//!                  ├─ lphedge_exposure::exposure_breakdown()
//!                  ├─ scale_decimals() + target_size()
//!                  └─ limit_price() + RequestId::derive()
//!                       ↓
//!                  HedgeOutcome (order placement is the caller's job)
//! ```

pub mod config;
pub mod error;
pub mod participation;
pub mod request_id;
pub mod sizer;
pub mod slippage;

pub use config::SizerConfig;
pub use error::{SizerError, SizerResult};
pub use participation::Participation;
pub use request_id::RequestId;
pub use sizer::{
    compute_hedge, target_size, HedgeOrder, HedgeOutcome, HedgeRequest, HedgeResult,
    InstrumentSpec,
};
pub use slippage::limit_price;
