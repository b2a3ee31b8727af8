//! Base-asset exposure of a concentrated-liquidity position.
//!
//! Given the current square-root price, each `PriceRange` is classified as
//! below, within, or above the price and its base-asset holding computed
//! with ceiling rounding. `total_exposure` sums those holdings.

pub mod amount;
pub mod exposure;

pub use amount::base_amount_delta;
pub use exposure::{
    exposure_breakdown, exposure_for_range, range_exposure, total_exposure, ExposureBreakdown,
    RangeExposure, RangeState,
};
