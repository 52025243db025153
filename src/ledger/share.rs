//! In-memory pool-share ledger.

use std::collections::BTreeMap;

use crate::domain::{AccountId, Shares};
use crate::error::AmmError;
use crate::math::CheckedArithmetic;
use crate::traits::ShareLedger;

/// Pool-share balances held in memory.
///
/// The total supply is maintained alongside the balances and always equals
/// their sum; accounts whose balance drops to zero are removed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InMemoryShareLedger {
    total_supply: Shares,
    balances: BTreeMap<AccountId, Shares>,
}

impl InMemoryShareLedger {
    /// Creates an empty share ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterates over every holder with a non-zero balance.
    pub fn holders(&self) -> impl Iterator<Item = (&AccountId, &Shares)> {
        self.balances.iter()
    }

    fn set_balance(&mut self, account: AccountId, shares: Shares) {
        if shares.is_zero() {
            self.balances.remove(&account);
        } else {
            self.balances.insert(account, shares);
        }
    }
}

impl ShareLedger for InMemoryShareLedger {
    fn balance_of(&self, account: &AccountId) -> Shares {
        self.balances.get(account).copied().unwrap_or(Shares::ZERO)
    }

    fn total_supply(&self) -> Shares {
        self.total_supply
    }

    fn mint(&mut self, to: &AccountId, shares: Shares) -> Result<(), AmmError> {
        let supply = self.total_supply.safe_add(&shares)?;
        let balance = self.balance_of(to).safe_add(&shares)?;
        self.total_supply = supply;
        self.set_balance(*to, balance);
        Ok(())
    }

    fn burn(&mut self, from: &AccountId, shares: Shares) -> Result<(), AmmError> {
        let balance = self
            .balance_of(from)
            .checked_sub(&shares)
            .ok_or(AmmError::InsufficientShares)?;
        let supply = self.total_supply.safe_sub(&shares)?;
        self.total_supply = supply;
        self.set_balance(*from, balance);
        Ok(())
    }

    fn transfer(
        &mut self,
        from: &AccountId,
        to: &AccountId,
        shares: Shares,
    ) -> Result<(), AmmError> {
        let from_after = self
            .balance_of(from)
            .checked_sub(&shares)
            .ok_or(AmmError::InsufficientShares)?;
        if from == to {
            return Ok(());
        }
        let to_after = self.balance_of(to).safe_add(&shares)?;
        self.set_balance(*from, from_after);
        self.set_balance(*to, to_after);
        Ok(())
    }
}
