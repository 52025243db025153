//! Property-based tests for the pool's pricing and accounting guarantees.
//!
//! 1. **Quote monotonicity**: more input never buys less, and the output
//!    stays strictly below the output reserve.
//! 2. **Constant product**: `reserve_a × reserve_b` never decreases across
//!    a swap.
//! 3. **Share conservation**: the holders' balances always sum to the
//!    pool's total shares.
//! 4. **Round trip**: deposit then withdraw the issued shares never pays
//!    out more than was put in.
//! 5. **Zero reserves**: quoting against an empty side always fails.

use proptest::prelude::*;

use super::fixtures::{alice, bob, gold, owner, seeded_pool, silver, TestPool, LATER};
use super::quote;
use crate::domain::{
    AccountId, Amount, AssetId, DepositRequest, Shares, SwapPath, SwapRequest, WithdrawRequest,
};
use crate::error::AmmError;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn swap(pool: &mut TestPool, who: AccountId, amount_in: u128, asset_in: AssetId, asset_out: AssetId) -> Result<Amount, AmmError> {
    let path = SwapPath::new(asset_in, asset_out)?;
    pool.swap(
        &who,
        SwapRequest {
            amount_in: Amount::new(amount_in),
            amount_out_min: Amount::ZERO,
            path,
            recipient: who,
            deadline: LATER,
        },
    )
    .map(|r| r.amount_out())
}

fn deposit(pool: &mut TestPool, who: AccountId, a: u128, b: u128) -> Result<(Amount, Amount, Shares), AmmError> {
    pool.deposit(
        &who,
        DepositRequest {
            asset_a: gold(),
            asset_b: silver(),
            desired_a: Amount::new(a),
            desired_b: Amount::new(b),
            min_a: Amount::ZERO,
            min_b: Amount::ZERO,
            recipient: who,
            deadline: LATER,
        },
    )
    .map(|r| (r.used_a(), r.used_b(), r.shares_issued()))
}

fn withdraw(pool: &mut TestPool, who: AccountId, shares: Shares) -> Result<(Amount, Amount), AmmError> {
    pool.withdraw(
        &who,
        WithdrawRequest {
            asset_a: gold(),
            asset_b: silver(),
            shares,
            min_a: Amount::ZERO,
            min_b: Amount::ZERO,
            recipient: who,
            deadline: LATER,
        },
    )
    .map(|r| (r.amount_a(), r.amount_b()))
}

fn holders_sum(pool: &TestPool) -> u128 {
    pool.share_ledger().holders().map(|(_, s)| s.get()).sum()
}

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// Reserves in [1_000, 1_000_000_000].
fn reserve_strategy() -> impl Strategy<Value = u128> {
    1_000u128..=1_000_000_000u128
}

/// One step of a random workload.
#[derive(Debug, Clone)]
enum Op {
    Swap { amount: u128, a_to_b: bool, bob: bool },
    Deposit { a: u128, b: u128, bob: bool },
    Withdraw { per_mille: u128, bob: bool },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (1u128..=1_000_000u128, any::<bool>(), any::<bool>())
            .prop_map(|(amount, a_to_b, bob)| Op::Swap { amount, a_to_b, bob }),
        (1u128..=1_000_000u128, 1u128..=1_000_000u128, any::<bool>())
            .prop_map(|(a, b, bob)| Op::Deposit { a, b, bob }),
        (1u128..=1_000u128, any::<bool>()).prop_map(|(per_mille, bob)| Op::Withdraw { per_mille, bob }),
    ]
}

// ---------------------------------------------------------------------------
// Property 1: quote monotonicity and bound
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_quote_monotonic_and_bounded(
        reserve_in in 1u128..=u128::MAX / 4,
        reserve_out in 1u128..=u128::MAX / 4,
        amount in 1u128..=u128::MAX / 4,
        extra in 1u128..=1_000_000u128,
    ) {
        let Ok(small) = quote(Amount::new(amount), Amount::new(reserve_in), Amount::new(reserve_out)) else {
            return Err(TestCaseError::fail("quote failed"));
        };
        let Ok(large) = quote(Amount::new(amount + extra), Amount::new(reserve_in), Amount::new(reserve_out)) else {
            return Err(TestCaseError::fail("quote failed"));
        };
        prop_assert!(small < Amount::new(reserve_out));
        prop_assert!(large < Amount::new(reserve_out));
        prop_assert!(large >= small, "quote decreased: {} -> {}", small, large);
    }

    // -----------------------------------------------------------------------
    // Property 5: zero reserves never quote
    // -----------------------------------------------------------------------

    #[test]
    fn prop_zero_reserve_never_quotes(amount in 1u128..=u128::MAX, reserve in 0u128..=u128::MAX) {
        prop_assert!(quote(Amount::new(amount), Amount::ZERO, Amount::new(reserve)).is_err());
        prop_assert!(quote(Amount::new(amount), Amount::new(reserve), Amount::ZERO).is_err());
    }
}

// ---------------------------------------------------------------------------
// Property 2: constant product non-decrease
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_swap_never_decreases_k(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        amounts in prop::collection::vec((1u128..=10_000_000u128, any::<bool>()), 1..8),
    ) {
        let mut pool = seeded_pool(ra, rb);
        for (amount, a_to_b) in amounts {
            let k_before = pool.reserves().invariant();
            let (asset_in, asset_out) = if a_to_b { (gold(), silver()) } else { (silver(), gold()) };
            if swap(&mut pool, alice(), amount, asset_in, asset_out).is_err() {
                continue;
            }
            prop_assert!(pool.reserves().invariant() >= k_before);
            prop_assert!(pool.reserves().is_initialized());
        }
    }

    // -----------------------------------------------------------------------
    // Property 3: share conservation
    // -----------------------------------------------------------------------

    #[test]
    fn prop_shares_conserved(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        ops in prop::collection::vec(op_strategy(), 1..16),
    ) {
        let mut pool = seeded_pool(ra, rb);
        for op in ops {
            match op {
                Op::Swap { amount, a_to_b, bob: use_bob } => {
                    let who = if use_bob { bob() } else { alice() };
                    let (asset_in, asset_out) = if a_to_b { (gold(), silver()) } else { (silver(), gold()) };
                    let _ = swap(&mut pool, who, amount, asset_in, asset_out);
                }
                Op::Deposit { a, b, bob: use_bob } => {
                    let who = if use_bob { bob() } else { alice() };
                    let _ = deposit(&mut pool, who, a, b);
                }
                Op::Withdraw { per_mille, bob: use_bob } => {
                    let who = if use_bob { bob() } else { owner() };
                    let held = pool.share_account(&who).balance().get();
                    let _ = withdraw(&mut pool, who, Shares::new(held * per_mille / 1_000));
                }
            }
            prop_assert_eq!(holders_sum(&pool), pool.total_shares().get());
            prop_assert_eq!(pool.share_ledger().holders().count() > 0, !pool.total_shares().is_zero());
        }
    }

    // -----------------------------------------------------------------------
    // Property 4: deposit / withdraw round trip
    // -----------------------------------------------------------------------

    #[test]
    fn prop_round_trip_never_profits(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        a in 1u128..=1_000_000_000u128,
        b in 1u128..=1_000_000_000u128,
    ) {
        let mut pool = seeded_pool(ra, rb);
        let Ok((used_a, used_b, issued)) = deposit(&mut pool, alice(), a, b) else {
            return Ok(());
        };
        let Ok((out_a, out_b)) = withdraw(&mut pool, alice(), issued) else {
            return Err(TestCaseError::fail("withdrawing fresh shares failed"));
        };
        prop_assert!(out_a <= used_a, "a: {} > {}", out_a, used_a);
        prop_assert!(out_b <= used_b, "b: {} > {}", out_b, used_b);
        prop_assert!(used_a <= Amount::new(a));
        prop_assert!(used_b <= Amount::new(b));
    }
}
