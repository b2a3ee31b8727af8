//! Full-precision multiply-then-divide over 256-bit unsigned integers.
//!
//! `a * b` is held as a 512-bit value split across two 256-bit words, so the
//! product never overflows even when both operands are close to `U256::MAX`.
//! The quotient is recovered with integer operations only: the remainder is
//! subtracted from the wide product, the power-of-two factor of the
//! denominator is divided out, and the exact quotient is obtained by
//! multiplying with the modular inverse of the odd remainder of the
//! denominator (mod 2^256).

use alloy::primitives::U256;

use crate::error::{MathError, MathResult};

/// Rounding mode for [`full_mul_div`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rounding {
    /// Round toward zero.
    #[default]
    Down,
    /// Round toward positive infinity.
    Up,
}

impl Rounding {
    pub fn from_round_up(round_up: bool) -> Self {
        if round_up {
            Self::Up
        } else {
            Self::Down
        }
    }
}

/// Computes `a * b / denominator` without intermediate overflow.
///
/// # Errors
/// - [`MathError::DivisionByZero`] when `denominator == 0`.
/// - [`MathError::Overflow`] when the result does not fit in 256 bits, or
///   when rounding up would step past `U256::MAX`.
pub fn full_mul_div(
    a: U256,
    b: U256,
    denominator: U256,
    rounding: Rounding,
) -> MathResult<U256> {
    if denominator.is_zero() {
        return Err(MathError::DivisionByZero);
    }

    // 512-bit product: prod1 * 2^256 + prod0
    let mut prod0 = a.wrapping_mul(b);
    let mm = a.mul_mod(b, U256::MAX);
    let mut prod1 = mm
        .wrapping_sub(prod0)
        .wrapping_sub(U256::from(u8::from(mm < prod0)));

    let remainder = a.mul_mod(b, denominator);

    let floor = if prod1.is_zero() {
        prod0 / denominator
    } else {
        // Quotient must fit in 256 bits.
        if denominator <= prod1 {
            return Err(MathError::Overflow);
        }

        // Make the product exactly divisible.
        prod1 = prod1.wrapping_sub(U256::from(u8::from(remainder > prod0)));
        prod0 = prod0.wrapping_sub(remainder);

        // Largest power of two dividing the denominator.
        let twos = denominator & denominator.wrapping_neg();
        let odd = denominator / twos;
        prod0 /= twos;

        // 2^256 / twos, which wraps to zero when twos == 1.
        let flip = (U256::ZERO.wrapping_sub(twos) / twos).wrapping_add(U256::from(1u8));
        prod0 |= prod1.wrapping_mul(flip);

        prod0.wrapping_mul(inverse_mod_2_256(odd))
    };

    match rounding {
        Rounding::Down => Ok(floor),
        Rounding::Up if remainder.is_zero() => Ok(floor),
        Rounding::Up => floor
            .checked_add(U256::from(1u8))
            .ok_or(MathError::Overflow),
    }
}

/// Inverse of an odd `d` modulo 2^256.
///
/// `(3 * d) ^ 2` is correct to four bits; each Newton step
/// `inv = inv * (2 - d * inv)` doubles the number of correct bits
/// (8, 16, 32, 64, 128, 256).
fn inverse_mod_2_256(d: U256) -> U256 {
    let two = U256::from(2u8);
    let mut inv = d.wrapping_mul(U256::from(3u8)) ^ two;
    for _ in 0..6 {
        inv = inv.wrapping_mul(two.wrapping_sub(d.wrapping_mul(inv)));
    }
    inv
}

/// `floor(a * b / denominator)`.
#[inline]
pub fn mul_div(a: U256, b: U256, denominator: U256) -> MathResult<U256> {
    full_mul_div(a, b, denominator, Rounding::Down)
}

/// `ceil(a * b / denominator)`.
#[inline]
pub fn mul_div_rounding_up(a: U256, b: U256, denominator: U256) -> MathResult<U256> {
    full_mul_div(a, b, denominator, Rounding::Up)
}

/// `ceil(a / denominator)`.
pub fn div_rounding_up(a: U256, denominator: U256) -> MathResult<U256> {
    if denominator.is_zero() {
        return Err(MathError::DivisionByZero);
    }
    let (quotient, remainder) = a.div_rem(denominator);
    if remainder.is_zero() {
        Ok(quotient)
    } else {
        // quotient < U256::MAX whenever remainder != 0 and denominator > 1
        Ok(quotient + U256::from(1u8))
    }
}
