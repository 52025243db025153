//! Outcomes of the public pool operations.

use super::{AccountId, AssetId, Amount, Shares};

/// Outcome of a successful deposit, in the caller's asset order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DepositReceipt {
    used_a: Amount,
    used_b: Amount,
    shares_issued: Shares,
}

impl DepositReceipt {
    /// Creates a deposit receipt.
    pub const fn new(used_a: Amount, used_b: Amount, shares_issued: Shares) -> Self {
        Self {
            used_a,
            used_b,
            shares_issued,
        }
    }

    /// Amount of the request's `asset_a` pulled from the caller.
    pub const fn used_a(&self) -> Amount {
        self.used_a
    }

    /// Amount of the request's `asset_b` pulled from the caller.
    pub const fn used_b(&self) -> Amount {
        self.used_b
    }

    /// Shares credited to the recipient.
    pub const fn shares_issued(&self) -> Shares {
        self.shares_issued
    }
}

/// Outcome of a successful withdrawal, in the caller's asset order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WithdrawReceipt {
    amount_a: Amount,
    amount_b: Amount,
}

impl WithdrawReceipt {
    /// Creates a withdrawal receipt.
    pub const fn new(amount_a: Amount, amount_b: Amount) -> Self {
        Self { amount_a, amount_b }
    }

    /// Amount of the request's `asset_a` sent to the recipient.
    pub const fn amount_a(&self) -> Amount {
        self.amount_a
    }

    /// Amount of the request's `asset_b` sent to the recipient.
    pub const fn amount_b(&self) -> Amount {
        self.amount_b
    }
}

/// Outcome of a successful swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapReceipt {
    asset_in: AssetId,
    asset_out: AssetId,
    amount_in: Amount,
    amount_out: Amount,
}

impl SwapReceipt {
    /// Creates a swap receipt.
    pub const fn new(
        asset_in: AssetId,
        asset_out: AssetId,
        amount_in: Amount,
        amount_out: Amount,
    ) -> Self {
        Self {
            asset_in,
            asset_out,
            amount_in,
            amount_out,
        }
    }

    /// The asset sold.
    #[must_use]
    pub const fn asset_in(&self) -> AssetId {
        self.asset_in
    }

    /// The asset bought.
    #[must_use]
    pub const fn asset_out(&self) -> AssetId {
        self.asset_out
    }

    /// Amount pulled from the caller.
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Amount sent to the recipient.
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }
}

/// A participant's share position, derived from the share ledger.
///
/// There is no separate per-account record: a `ShareAccount` is a
/// snapshot read from the ledger, and a zero balance is equivalent to the
/// account not existing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShareAccount {
    owner: AccountId,
    balance: Shares,
}

impl ShareAccount {
    /// Creates a share-account snapshot.
    pub const fn new(owner: AccountId, balance: Shares) -> Self {
        Self { owner, balance }
    }

    /// The account holder.
    #[must_use]
    pub const fn owner(&self) -> AccountId {
        self.owner
    }

    /// Shares held.
    pub const fn balance(&self) -> Shares {
        self.balance
    }

    /// Returns `true` if the account holds no shares.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.balance.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deposit_receipt_accessors() {
        let r = DepositReceipt::new(Amount::new(1), Amount::new(2), Shares::new(3));
        assert_eq!(r.used_a(), Amount::new(1));
        assert_eq!(r.used_b(), Amount::new(2));
        assert_eq!(r.shares_issued(), Shares::new(3));
    }

    #[test]
    fn swap_receipt_accessors() {
        let gold = AssetId::from_bytes([1u8; 32]);
        let silver = AssetId::from_bytes([2u8; 32]);
        let r = SwapReceipt::new(gold, silver, Amount::new(10), Amount::new(9));
        assert_eq!(r.asset_in(), gold);
        assert_eq!(r.asset_out(), silver);
        assert_eq!(r.amount_in(), Amount::new(10));
        assert_eq!(r.amount_out(), Amount::new(9));
    }

    #[test]
    fn empty_share_account() {
        let acct = ShareAccount::new(AccountId::zero(), Shares::ZERO);
        assert!(acct.is_empty());
        assert_eq!(acct.owner(), AccountId::zero());
    }
}
