//! Widened integer helpers for reserve and share math.
//!
//! Products such as `amount_in × reserve_out` or `amount × total_shares`
//! can exceed `u128` even when every operand and the final quotient fit.
//! These helpers perform the multiplication in 256 bits
//! ([`ethnum::U256`]) and only narrow the final result, failing with
//! [`AmmError::ArithmeticOverflow`] instead of wrapping.
//!
//! # Examples
//!
//! ```
//! use hydra_cpmm::math::{isqrt_product, mul_div};
//!
//! // 1000 × 8000 / 6000 = 1333 (floor)
//! assert_eq!(mul_div(1_000, 8_000, 6_000), Ok(1_333));
//!
//! // The intermediate product overflows u128 but the quotient does not.
//! assert_eq!(mul_div(u128::MAX, 3, 4), Ok(u128::MAX / 4 * 3 + 2));
//!
//! assert_eq!(isqrt_product(1_000, 4_000), Ok(2_000));
//! ```

use ethnum::U256;

use crate::error::{AmmError, Result};

/// Largest value representable as a `u128`, widened.
const U128_MAX_WIDE: U256 = U256::new(u128::MAX);

/// Computes `floor(a × b / denominator)` with a 256-bit intermediate.
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if `denominator` is zero.
/// - [`AmmError::ArithmeticOverflow`] if the quotient does not fit in `u128`.
pub fn mul_div(a: u128, b: u128, denominator: u128) -> Result<u128> {
    if denominator == 0 {
        return Err(AmmError::DivisionByZero);
    }
    let quotient = U256::from(a) * U256::from(b) / U256::from(denominator);
    narrow(quotient)
}

/// Computes `floor(numerator_a × numerator_b / (addend_a + addend_b))`.
///
/// Both the product and the sum are formed in 256 bits, so neither can
/// wrap.  This is the exact shape of the constant-product quote.
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if the sum is zero.
/// - [`AmmError::ArithmeticOverflow`] if the quotient does not fit in `u128`.
pub fn mul_div_sum(
    numerator_a: u128,
    numerator_b: u128,
    addend_a: u128,
    addend_b: u128,
) -> Result<u128> {
    let denominator = U256::from(addend_a) + U256::from(addend_b);
    if denominator == U256::ZERO {
        return Err(AmmError::DivisionByZero);
    }
    let quotient = U256::from(numerator_a) * U256::from(numerator_b) / denominator;
    narrow(quotient)
}

/// Integer square root of `a × b`, computed without overflow.
///
/// The result is `floor(√(a·b))`, which never exceeds `max(a, b)` and
/// therefore always fits in `u128`.
///
/// # Errors
///
/// Returns [`AmmError::ArithmeticOverflow`] only if narrowing fails, which
/// cannot happen for valid inputs.
pub fn isqrt_product(a: u128, b: u128) -> Result<u128> {
    narrow(isqrt(U256::from(a) * U256::from(b)))
}

/// Returns the full 256-bit product `a × b`.
#[must_use]
pub fn wide_product(a: u128, b: u128) -> U256 {
    U256::from(a) * U256::from(b)
}

/// Integer square root via Newton's method.
fn isqrt(n: U256) -> U256 {
    if n == U256::ZERO {
        return U256::ZERO;
    }
    let mut x = n;
    // ceil(n / 2) without forming n + 1
    let mut y = (x >> 1) + (x & U256::ONE);
    while y < x {
        x = y;
        y = (x + n / x) >> 1;
    }
    x
}

fn narrow(value: U256) -> Result<u128> {
    if value > U128_MAX_WIDE {
        return Err(AmmError::ArithmeticOverflow("result exceeds u128 range"));
    }
    Ok(value.as_u128())
}
