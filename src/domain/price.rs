//! Fixed-point exchange rate between the two pool assets.

use core::fmt;

use super::Amount;
use crate::error::AmmError;
use crate::math::mul_div;

/// An exchange rate expressed as a `u128` scaled by [`Price::SCALE`]
/// (`1e18`): units of the quote asset per unit of the base asset.
///
/// # Examples
///
/// ```
/// use hydra_cpmm::domain::{Amount, Price};
///
/// // 2 000 quote per 1 000 base → 2.0
/// let p = Price::from_reserves(Amount::new(1_000), Amount::new(2_000)).expect("non-zero base");
/// assert_eq!(p.raw(), 2 * Price::SCALE);
/// assert_eq!(p.to_string(), "2.000000000000000000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Price(u128);

impl Price {
    /// Fixed-point scale factor: `1.0` is represented as `1e18`.
    pub const SCALE: u128 = 1_000_000_000_000_000_000;

    /// Wraps an already-scaled raw value.
    #[must_use]
    pub const fn from_raw(raw: u128) -> Self {
        Self(raw)
    }

    /// Computes `quote_reserve × SCALE / base_reserve`, floored.
    ///
    /// # Errors
    ///
    /// - [`AmmError::DivisionByZero`] if `base_reserve` is zero.
    /// - [`AmmError::ArithmeticOverflow`] if the scaled price does not fit
    ///   in `u128`.
    pub fn from_reserves(base_reserve: Amount, quote_reserve: Amount) -> Result<Self, AmmError> {
        if base_reserve.is_zero() {
            return Err(AmmError::DivisionByZero);
        }
        mul_div(quote_reserve.get(), Self::SCALE, base_reserve.get()).map(Self)
    }

    /// Returns the scaled raw value.
    #[must_use]
    pub const fn raw(&self) -> u128 {
        self.0
    }

    /// Returns the integer part of the rate.
    #[must_use]
    pub const fn integer_part(&self) -> u128 {
        self.0 / Self::SCALE
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:018}", self.integer_part(), self.0 % Self::SCALE)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn balanced_reserves_price_one() {
        let Ok(p) = Price::from_reserves(Amount::new(500), Amount::new(500)) else {
            panic!("expected Ok");
        };
        assert_eq!(p.raw(), Price::SCALE);
        assert_eq!(p.integer_part(), 1);
    }

    #[test]
    fn fractional_price() {
        let Ok(p) = Price::from_reserves(Amount::new(2_000_000), Amount::new(1_000_000)) else {
            panic!("expected Ok");
        };
        assert_eq!(p.raw(), Price::SCALE / 2);
        assert_eq!(p.integer_part(), 0);
        assert_eq!(p.to_string(), "0.500000000000000000");
    }

    #[test]
    fn floors_repeating_fraction() {
        let Ok(p) = Price::from_reserves(Amount::new(3), Amount::new(1)) else {
            panic!("expected Ok");
        };
        assert_eq!(p.raw(), 333_333_333_333_333_333);
    }

    #[test]
    fn zero_base_rejected() {
        assert_eq!(
            Price::from_reserves(Amount::ZERO, Amount::new(1)),
            Err(AmmError::DivisionByZero)
        );
    }

    #[test]
    fn huge_ratio_overflows() {
        let Err(AmmError::ArithmeticOverflow(_)) = Price::from_reserves(Amount::new(1), Amount::MAX)
        else {
            panic!("expected ArithmeticOverflow");
        };
    }
}
