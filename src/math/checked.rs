//! Checked arithmetic trait for domain wrapper types.
//!
//! The [`CheckedArithmetic`] trait provides fallible arithmetic that
//! returns [`AmmError`] instead of panicking or wrapping.  Overflow and
//! underflow are distinct variants so callers can tell a reserve that grew
//! too large from one that would go negative.
//!
//! # Examples
//!
//! ```
//! use hydra_cpmm::domain::Amount;
//! use hydra_cpmm::math::CheckedArithmetic;
//!
//! let a = Amount::new(100);
//! assert_eq!(a.safe_add(&Amount::new(50)), Ok(Amount::new(150)));
//! assert!(a.safe_sub(&Amount::new(101)).is_err());
//! ```

use crate::domain::{Amount, Shares};
use crate::error::AmmError;

/// Fallible arithmetic for domain wrapper types.
///
/// # Contract
///
/// - **No panics**: all error conditions produce `Err`.
/// - **No saturation**: results never clamp.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ArithmeticOverflow`] if the result exceeds the
    /// representable range.
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ArithmeticUnderflow`] if the result would be
    /// negative.
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError>;

    /// Computes `floor(self × numerator / denominator)` through a 256-bit
    /// intermediate.
    ///
    /// # Errors
    ///
    /// - [`AmmError::DivisionByZero`] if `denominator` is zero.
    /// - [`AmmError::ArithmeticOverflow`] if the result does not fit.
    fn scale(&self, numerator: u128, denominator: u128) -> Result<Self, AmmError>;
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_add(other)
            .ok_or(AmmError::ArithmeticOverflow("amount addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_sub(other)
            .ok_or(AmmError::ArithmeticUnderflow("amount subtraction underflow"))
    }

    #[inline]
    fn scale(&self, numerator: u128, denominator: u128) -> Result<Self, AmmError> {
        super::mul_div(self.get(), numerator, denominator).map(Amount::new)
    }
}

impl CheckedArithmetic for Shares {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_add(other)
            .ok_or(AmmError::ArithmeticOverflow("share addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_sub(other)
            .ok_or(AmmError::ArithmeticUnderflow("share subtraction underflow"))
    }

    #[inline]
    fn scale(&self, numerator: u128, denominator: u128) -> Result<Self, AmmError> {
        super::mul_div(self.get(), numerator, denominator).map(Shares::new)
    }
}
