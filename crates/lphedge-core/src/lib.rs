//! Core arithmetic and domain types for the LP hedge engine.
//!
//! This crate provides the building blocks shared by the exposure and
//! sizing crates:
//! - `math`: full-precision `a * b / d` with floor and ceiling rounding
//! - `PriceRange`: one concentrated-liquidity segment (Q64.96 bounds)
//! - `decimal`: rescaling raw amounts between decimal precisions
//! - `OrderSide`: direction of a hedge adjustment
//! - `CoreError`, `MathError`: the error taxonomy

pub mod decimal;
pub mod error;
pub mod math;
pub mod order;
pub mod types;

pub use alloy::primitives::aliases::U160;
pub use alloy::primitives::{Address, B256, I256, U256};

pub use decimal::{pow10, scale_decimals, to_decimal, to_decimal_unsigned};
pub use error::{CoreError, MathError, MathResult, Result};
pub use math::{div_rounding_up, full_mul_div, mul_div, mul_div_rounding_up, Rounding};
pub use order::OrderSide;
pub use types::{ensure_ordered, widen_sqrt_price, PriceRange, BPS_DENOMINATOR, Q96, RESOLUTION};
