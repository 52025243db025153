//! Fungible asset contract seam.
//!
//! [`AssetLedger`] is the narrow contract the pool engine relies on for
//! each of its two assets.  Transfer calls report success as a `bool`, the
//! way token contracts do; the engine treats every `false` as fatal for
//! the operation in progress and never assumes a call succeeded.
//!
//! # Caller identity
//!
//! Ledgers in this crate have no ambient "message sender".  The invoking
//! account is passed explicitly: `sender` for [`AssetLedger::transfer`]
//! (tokens leave the sender's own balance) and `spender` for
//! [`AssetLedger::transfer_from`] (tokens leave `owner`'s balance under an
//! allowance granted to `spender`).

use crate::domain::{AccountId, Amount, AssetId};
use crate::error::AmmError;

/// A fungible asset ledger ("asset contract").
///
/// # Implementors
///
/// - [`InMemoryAssetLedger`](crate::ledger::InMemoryAssetLedger): a
///   self-contained reference ledger with balances and allowances.
pub trait AssetLedger {
    /// Returns the identity of the asset this ledger tracks.
    #[must_use]
    fn asset_id(&self) -> AssetId;

    /// Returns `account`'s balance.
    #[must_use]
    fn balance_of(&self, account: &AccountId) -> Amount;

    /// Moves `amount` from `sender`'s own balance to `dest`.
    ///
    /// Returns `false` (and changes nothing) if the transfer cannot be
    /// made.
    #[must_use]
    fn transfer(&mut self, sender: &AccountId, dest: &AccountId, amount: Amount) -> bool;

    /// Moves `amount` from `owner` to `dest`, consuming an allowance that
    /// `owner` granted to `spender`.
    ///
    /// Returns `false` (and changes nothing) if the balance or allowance
    /// is insufficient.
    #[must_use]
    fn transfer_from(
        &mut self,
        spender: &AccountId,
        owner: &AccountId,
        dest: &AccountId,
        amount: Amount,
    ) -> bool;

    /// Creates `amount` new units for `to`.
    ///
    /// Owner-gated.  Used by deployment and tests to fund accounts; the
    /// pool engine never mints underlying assets.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Unauthorized`] if `caller` is not the ledger owner.
    /// - [`AmmError::ArithmeticOverflow`] if the supply would overflow.
    fn mint(&mut self, caller: &AccountId, to: &AccountId, amount: Amount) -> Result<(), AmmError>;
}
