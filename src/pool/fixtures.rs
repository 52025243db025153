//! Test-only pool fixtures.
//!
//! [`ScriptedLedger`] wraps the in-memory asset ledger with switches that
//! make it refuse or fake transfers, so tests can drive the engine's
//! failure paths.

use crate::config::{InitialSharePolicy, PoolConfig};
use crate::domain::{AccountId, Amount, AssetId, AssetPair, Timestamp};
use crate::error::AmmError;
use crate::ledger::{InMemoryAssetLedger, InMemoryShareLedger, ManualClock};
use crate::traits::AssetLedger;

use super::PoolEngine;

pub(crate) const NOW: Timestamp = Timestamp::from_secs(1_000_000);
pub(crate) const LATER: Timestamp = Timestamp::from_secs(1_000_060);
pub(crate) const FUNDING: u128 = 1_000_000_000_000;

pub(crate) fn acct(b: u8) -> AccountId {
    AccountId::from_bytes([b; 32])
}

pub(crate) fn gold() -> AssetId {
    AssetId::from_bytes([0x61; 32])
}

pub(crate) fn silver() -> AssetId {
    AssetId::from_bytes([0x62; 32])
}

pub(crate) fn minter() -> AccountId {
    acct(0xee)
}

pub(crate) fn pool_account() -> AccountId {
    acct(0xb0)
}

pub(crate) fn owner() -> AccountId {
    acct(0x01)
}

pub(crate) fn alice() -> AccountId {
    acct(0x02)
}

pub(crate) fn bob() -> AccountId {
    acct(0x03)
}

/// Asset ledger whose transfers can be switched off or faked.
#[derive(Debug, Clone)]
pub(crate) struct ScriptedLedger {
    pub(crate) inner: InMemoryAssetLedger,
    /// `transfer_from` returns `false`.
    pub(crate) refuse_pulls: bool,
    /// `transfer` returns `false`.
    pub(crate) refuse_sends: bool,
    /// `transfer_from` returns `true` without moving anything.
    pub(crate) fake_pulls: bool,
    /// `transfer_from` returns `true` but moves `amount` from `dest` back
    /// to `owner`.
    pub(crate) reverse_pulls: bool,
}

impl ScriptedLedger {
    pub(crate) fn new(inner: InMemoryAssetLedger) -> Self {
        Self {
            inner,
            refuse_pulls: false,
            refuse_sends: false,
            fake_pulls: false,
            reverse_pulls: false,
        }
    }
}

impl AssetLedger for ScriptedLedger {
    fn asset_id(&self) -> AssetId {
        self.inner.asset_id()
    }

    fn balance_of(&self, account: &AccountId) -> Amount {
        self.inner.balance_of(account)
    }

    fn transfer(&mut self, sender: &AccountId, dest: &AccountId, amount: Amount) -> bool {
        if self.refuse_sends {
            return false;
        }
        self.inner.transfer(sender, dest, amount)
    }

    fn transfer_from(
        &mut self,
        spender: &AccountId,
        owner: &AccountId,
        dest: &AccountId,
        amount: Amount,
    ) -> bool {
        if self.refuse_pulls {
            return false;
        }
        if self.fake_pulls {
            return true;
        }
        if self.reverse_pulls {
            return self.inner.transfer(dest, owner, amount);
        }
        self.inner.transfer_from(spender, owner, dest, amount)
    }

    fn mint(&mut self, caller: &AccountId, to: &AccountId, amount: Amount) -> Result<(), AmmError> {
        self.inner.mint(caller, to, amount)
    }
}

pub(crate) type TestPool = PoolEngine<ScriptedLedger, InMemoryShareLedger, ManualClock>;

/// A ledger for `asset` with every named account funded and the pool
/// approved to move their balances.
pub(crate) fn funded_ledger(asset: AssetId) -> ScriptedLedger {
    let mut ledger = InMemoryAssetLedger::new(asset, minter());
    for holder in [owner(), alice(), bob()] {
        let Ok(()) = ledger.mint(&minter(), &holder, Amount::new(FUNDING)) else {
            panic!("minter may mint");
        };
        ledger.approve(&holder, &pool_account(), Amount::MAX);
    }
    ScriptedLedger::new(ledger)
}

/// An empty pool with the given first-deposit policy.
pub(crate) fn empty_pool_with(policy: InitialSharePolicy) -> TestPool {
    let Ok(pair) = AssetPair::new(gold(), silver()) else {
        panic!("distinct assets");
    };
    let Ok(config) = PoolConfig::new(pair, pool_account(), policy) else {
        panic!("valid config");
    };
    let Ok(pool) = PoolEngine::new(
        config,
        funded_ledger(gold()),
        funded_ledger(silver()),
        InMemoryShareLedger::new(),
        ManualClock::new(NOW),
    ) else {
        panic!("ledgers match pair");
    };
    pool
}

/// A pool seeded by `owner()` with `(reserve_a, reserve_b)`.
pub(crate) fn seeded_pool(reserve_a: u128, reserve_b: u128) -> TestPool {
    let mut pool = empty_pool_with(InitialSharePolicy::GeometricMean);
    let Ok(_) = pool.bootstrap(&owner(), Amount::new(reserve_a), Amount::new(reserve_b)) else {
        panic!("bootstrap");
    };
    pool
}

/// Mutable access to the scripted ledger for `asset`.
pub(crate) fn ledger_mut(pool: &mut TestPool, asset: AssetId) -> &mut ScriptedLedger {
    let Some(ledger) = pool.asset_ledger_mut(&asset) else {
        panic!("asset in pair");
    };
    ledger
}

/// Pool-account balances of both assets.
pub(crate) fn pool_balances(pool: &TestPool) -> (Amount, Amount) {
    let (Some(a), Some(b)) = (pool.asset_ledger(&gold()), pool.asset_ledger(&silver())) else {
        panic!("asset in pair");
    };
    (a.balance_of(&pool_account()), b.balance_of(&pool_account()))
}

/// `account`'s balances of both assets.
pub(crate) fn balances_of(pool: &TestPool, account: &AccountId) -> (Amount, Amount) {
    let (Some(a), Some(b)) = (pool.asset_ledger(&gold()), pool.asset_ledger(&silver())) else {
        panic!("asset in pair");
    };
    (a.balance_of(account), b.balance_of(account))
}
