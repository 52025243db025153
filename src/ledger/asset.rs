//! In-memory fungible asset ledger.

use std::collections::BTreeMap;

use crate::domain::{AccountId, Amount, AssetId};
use crate::error::AmmError;
use crate::math::CheckedArithmetic;
use crate::traits::AssetLedger;

/// A self-contained asset ledger with balances, allowances and an
/// owner-gated mint.
///
/// Accounts with a zero balance are not stored.
///
/// # Examples
///
/// ```
/// use hydra_cpmm::domain::{AccountId, Amount, AssetId};
/// use hydra_cpmm::ledger::InMemoryAssetLedger;
/// use hydra_cpmm::traits::AssetLedger;
///
/// let owner = AccountId::from_bytes([1u8; 32]);
/// let alice = AccountId::from_bytes([2u8; 32]);
/// let mut gold = InMemoryAssetLedger::new(AssetId::from_bytes([9u8; 32]), owner);
///
/// gold.mint(&owner, &alice, Amount::new(500)).expect("owner may mint");
/// assert_eq!(gold.balance_of(&alice), Amount::new(500));
/// assert!(gold.mint(&alice, &alice, Amount::new(1)).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InMemoryAssetLedger {
    asset_id: AssetId,
    owner: AccountId,
    total_supply: Amount,
    balances: BTreeMap<AccountId, Amount>,
    allowances: BTreeMap<(AccountId, AccountId), Amount>,
}

impl InMemoryAssetLedger {
    /// Creates an empty ledger for `asset_id` whose mint is gated on `owner`.
    #[must_use]
    pub fn new(asset_id: AssetId, owner: AccountId) -> Self {
        Self {
            asset_id,
            owner,
            total_supply: Amount::ZERO,
            balances: BTreeMap::new(),
            allowances: BTreeMap::new(),
        }
    }

    /// Returns the account allowed to mint.
    #[must_use]
    pub const fn owner(&self) -> AccountId {
        self.owner
    }

    /// Returns the total amount ever minted (nothing is burned).
    pub const fn total_supply(&self) -> Amount {
        self.total_supply
    }

    /// Sets the amount `spender` may move out of `owner`'s balance.
    pub fn approve(&mut self, owner: &AccountId, spender: &AccountId, amount: Amount) {
        if amount.is_zero() {
            self.allowances.remove(&(*owner, *spender));
        } else {
            self.allowances.insert((*owner, *spender), amount);
        }
    }

    /// Returns the remaining allowance of `spender` over `owner`'s balance.
    pub fn allowance(&self, owner: &AccountId, spender: &AccountId) -> Amount {
        self.allowances
            .get(&(*owner, *spender))
            .copied()
            .unwrap_or(Amount::ZERO)
    }

    fn set_balance(&mut self, account: AccountId, amount: Amount) {
        if amount.is_zero() {
            self.balances.remove(&account);
        } else {
            self.balances.insert(account, amount);
        }
    }

    // Debits `from` and credits `dest`; leaves state untouched on failure.
    fn move_balance(&mut self, from: &AccountId, dest: &AccountId, amount: Amount) -> bool {
        let Ok(from_after) = self.balance_of(from).safe_sub(&amount) else {
            return false;
        };
        if from == dest {
            return true;
        }
        let Ok(dest_after) = self.balance_of(dest).safe_add(&amount) else {
            return false;
        };
        self.set_balance(*from, from_after);
        self.set_balance(*dest, dest_after);
        true
    }
}

impl AssetLedger for InMemoryAssetLedger {
    fn asset_id(&self) -> AssetId {
        self.asset_id
    }

    fn balance_of(&self, account: &AccountId) -> Amount {
        self.balances.get(account).copied().unwrap_or(Amount::ZERO)
    }

    fn transfer(&mut self, sender: &AccountId, dest: &AccountId, amount: Amount) -> bool {
        self.move_balance(sender, dest, amount)
    }

    fn transfer_from(
        &mut self,
        spender: &AccountId,
        owner: &AccountId,
        dest: &AccountId,
        amount: Amount,
    ) -> bool {
        let Ok(remaining) = self.allowance(owner, spender).safe_sub(&amount) else {
            return false;
        };
        if !self.move_balance(owner, dest, amount) {
            return false;
        }
        self.approve(owner, spender, remaining);
        true
    }

    fn mint(&mut self, caller: &AccountId, to: &AccountId, amount: Amount) -> Result<(), AmmError> {
        if *caller != self.owner {
            return Err(AmmError::Unauthorized);
        }
        let supply = self.total_supply.safe_add(&amount)?;
        let balance = self.balance_of(to).safe_add(&amount)?;
        self.total_supply = supply;
        self.set_balance(*to, balance);
        Ok(())
    }
}
