//! Pool-share ledger seam.
//!
//! The share ledger is the single record of who owns how much of the
//! pool.  Share accounting never keeps a parallel per-account map: every
//! credit is a [`ShareLedger::mint`] and every debit a
//! [`ShareLedger::burn`], so the ledger's balances always sum to its
//! total supply and to the pool's total shares.

use crate::domain::{AccountId, Shares};
use crate::error::AmmError;

/// A fungible ledger for pool shares.
///
/// # Implementors
///
/// - [`InMemoryShareLedger`](crate::ledger::InMemoryShareLedger)
pub trait ShareLedger {
    /// Returns `account`'s share balance.
    #[must_use]
    fn balance_of(&self, account: &AccountId) -> Shares;

    /// Returns the sum of all balances.
    #[must_use]
    fn total_supply(&self) -> Shares;

    /// Issues `shares` to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ArithmeticOverflow`] if the supply would overflow.
    fn mint(&mut self, to: &AccountId, shares: Shares) -> Result<(), AmmError>;

    /// Destroys `shares` held by `from`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InsufficientShares`] if `from` holds fewer than
    /// `shares`.
    fn burn(&mut self, from: &AccountId, shares: Shares) -> Result<(), AmmError>;

    /// Moves `shares` between holders.  Supply is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InsufficientShares`] if `from` holds fewer than
    /// `shares`.
    fn transfer(&mut self, from: &AccountId, to: &AccountId, shares: Shares)
        -> Result<(), AmmError>;
}
