//! Reserve bookkeeping and constant-product pricing.
//!
//! The [`ReserveLedger`] is the pool's own record of how much of each asset
//! it controls.  Quotes and spot prices are derived from it:
//!
//! ```text
//! amount_out = floor(amount_in × reserve_out / (reserve_in + amount_in))
//! price(X→Y) = floor(reserve_Y × 1e18 / reserve_X)
//! ```
//!
//! There is no fee: the only thing keeping `reserve_a × reserve_b` from
//! decreasing across a swap is the floor in the quote.

use ethnum::U256;

use crate::domain::{Amount, AssetSide, Price, ReserveDelta};
use crate::error::AmmError;
use crate::math::{mul_div_sum, wide_product, CheckedArithmetic};

/// Quotes the output of a zero-fee constant-product swap.
///
/// The product `amount_in × reserve_out` and the sum
/// `reserve_in + amount_in` are formed in 256 bits, so large reserves
/// cannot wrap.  The result is always strictly less than `reserve_out`.
///
/// # Errors
///
/// Returns [`AmmError::InvalidInput`] unless `amount_in`, `reserve_in`
/// and `reserve_out` are all positive.
///
/// # Examples
///
/// ```
/// use hydra_cpmm::domain::Amount;
/// use hydra_cpmm::pool::quote;
///
/// let out = quote(Amount::new(1_000), Amount::new(5_000), Amount::new(8_000));
/// assert_eq!(out, Ok(Amount::new(1_333)));
/// ```
pub fn quote(amount_in: Amount, reserve_in: Amount, reserve_out: Amount) -> Result<Amount, AmmError> {
    if amount_in.is_zero() {
        return Err(AmmError::InvalidInput("amount_in must be positive"));
    }
    if reserve_in.is_zero() {
        return Err(AmmError::InvalidInput("reserve_in must be positive"));
    }
    if reserve_out.is_zero() {
        return Err(AmmError::InvalidInput("reserve_out must be positive"));
    }
    mul_div_sum(
        amount_in.get(),
        reserve_out.get(),
        reserve_in.get(),
        amount_in.get(),
    )
    .map(Amount::new)
}

/// Returns the price of X in units of Y: `reserve_y × 1e18 / reserve_x`.
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if `reserve_x` is zero.
/// - [`AmmError::ArithmeticOverflow`] if the scaled price exceeds `u128`.
pub fn spot_price(reserve_x: Amount, reserve_y: Amount) -> Result<Price, AmmError> {
    Price::from_reserves(reserve_x, reserve_y)
}

/// The pool's recorded reserves of asset A and asset B.
///
/// # Examples
///
/// ```
/// use hydra_cpmm::domain::{Amount, AssetSide, ReserveDelta};
/// use hydra_cpmm::pool::ReserveLedger;
///
/// let mut reserves = ReserveLedger::new(Amount::new(1_000), Amount::new(1_000));
/// reserves.apply_delta(AssetSide::A, ReserveDelta::Increase(Amount::new(500))).expect("fits");
/// assert_eq!(reserves.reserve_a(), Amount::new(1_500));
///
/// let too_much = ReserveDelta::Decrease(Amount::new(2_000));
/// assert!(reserves.apply_delta(AssetSide::B, too_much).is_err());
/// assert_eq!(reserves.reserve_b(), Amount::new(1_000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ReserveLedger {
    reserve_a: Amount,
    reserve_b: Amount,
}

impl ReserveLedger {
    /// A ledger holding nothing.
    pub const EMPTY: Self = Self {
        reserve_a: Amount::ZERO,
        reserve_b: Amount::ZERO,
    };

    /// Creates a ledger with the given reserves.
    #[must_use]
    pub const fn new(reserve_a: Amount, reserve_b: Amount) -> Self {
        Self {
            reserve_a,
            reserve_b,
        }
    }

    /// Returns the reserve of asset A.
    pub const fn reserve_a(&self) -> Amount {
        self.reserve_a
    }

    /// Returns the reserve of asset B.
    pub const fn reserve_b(&self) -> Amount {
        self.reserve_b
    }

    /// Returns the reserve on `side`.
    pub const fn reserve(&self, side: AssetSide) -> Amount {
        match side {
            AssetSide::A => self.reserve_a,
            AssetSide::B => self.reserve_b,
        }
    }

    /// Returns `(reserve_in, reserve_out)` for a trade selling `side_in`.
    pub const fn oriented(&self, side_in: AssetSide) -> (Amount, Amount) {
        (self.reserve(side_in), self.reserve(side_in.other()))
    }

    /// Returns `true` once both reserves are positive.
    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        !self.reserve_a.is_zero() && !self.reserve_b.is_zero()
    }

    /// Returns `true` if both reserves are zero.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.reserve_a.is_zero() && self.reserve_b.is_zero()
    }

    /// Returns the constant-product invariant `reserve_a × reserve_b`.
    #[must_use]
    pub fn invariant(&self) -> U256 {
        wide_product(self.reserve_a.get(), self.reserve_b.get())
    }

    /// Returns a copy of the ledger with `delta` applied to `side`.
    ///
    /// Used to stage a new state that is committed only after every
    /// external call of an operation has succeeded.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ArithmeticOverflow`] if an increase overflows.
    /// - [`AmmError::ArithmeticUnderflow`] if a decrease goes below zero.
    pub fn with_delta(&self, side: AssetSide, delta: ReserveDelta) -> Result<Self, AmmError> {
        let current = self.reserve(side);
        let updated = match delta {
            ReserveDelta::Increase(amount) => current.safe_add(&amount)?,
            ReserveDelta::Decrease(amount) => current
                .safe_sub(&amount)
                .map_err(|_| AmmError::ArithmeticUnderflow("reserve would go negative"))?,
        };
        let mut next = *self;
        match side {
            AssetSide::A => next.reserve_a = updated,
            AssetSide::B => next.reserve_b = updated,
        }
        Ok(next)
    }

    /// Applies `delta` to the reserve on `side` in place.
    ///
    /// The ledger is unchanged if an error is returned.
    ///
    /// # Errors
    ///
    /// Same as [`ReserveLedger::with_delta`].
    pub fn apply_delta(&mut self, side: AssetSide, delta: ReserveDelta) -> Result<(), AmmError> {
        *self = self.with_delta(side, delta)?;
        Ok(())
    }

    /// Quotes a swap selling `amount_in` of `side_in` against these reserves.
    ///
    /// # Errors
    ///
    /// Same as [`quote`].
    pub fn quote(&self, side_in: AssetSide, amount_in: Amount) -> Result<Amount, AmmError> {
        let (reserve_in, reserve_out) = self.oriented(side_in);
        quote(amount_in, reserve_in, reserve_out)
    }

    /// Returns the price of `base` in units of the other asset.
    ///
    /// # Errors
    ///
    /// Same as [`spot_price`].
    pub fn spot_price(&self, base: AssetSide) -> Result<Price, AmmError> {
        let (reserve_x, reserve_y) = self.oriented(base);
        spot_price(reserve_x, reserve_y)
    }
}
