//! Proportional ownership math over the share ledger.
//!
//! Share balances live only in the [`ShareLedger`]; this module computes
//! how many shares a deposit is worth and what a redemption pays out, and
//! routes every credit and debit through the ledger so the pool never
//! keeps a second copy of who owns what.

use crate::config::InitialSharePolicy;
use crate::domain::{AccountId, Amount, ShareAccount, Shares};
use crate::error::AmmError;
use crate::math::{isqrt_product, mul_div, CheckedArithmetic};
use crate::traits::ShareLedger;

/// Returns the shares a deposit of `(amount_a, amount_b)` is worth.
///
/// With shares outstanding the result is
/// `min(amount_a × total / reserve_a, amount_b × total / reserve_b)`.
/// With no shares outstanding the issuance follows `policy`:
///
/// - [`InitialSharePolicy::GeometricMean`]: `floor(√(amount_a × amount_b))`
/// - [`InitialSharePolicy::ReserveSum`]: `amount_a + amount_b`, unscaled
///
/// A zero result is returned as-is; rejecting it is the caller's decision.
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if shares are outstanding but a reserve
///   is zero.
/// - [`AmmError::ArithmeticOverflow`] if the issuance exceeds `u128`.
///
/// # Examples
///
/// ```
/// use hydra_cpmm::config::InitialSharePolicy;
/// use hydra_cpmm::domain::{Amount, Shares};
/// use hydra_cpmm::pool::shares_for_deposit;
///
/// let first = shares_for_deposit(
///     Amount::new(1_000),
///     Amount::new(4_000),
///     Amount::ZERO,
///     Amount::ZERO,
///     Shares::ZERO,
///     InitialSharePolicy::GeometricMean,
/// );
/// assert_eq!(first, Ok(Shares::new(2_000)));
/// ```
pub fn shares_for_deposit(
    amount_a: Amount,
    amount_b: Amount,
    reserve_a: Amount,
    reserve_b: Amount,
    total_shares: Shares,
    policy: InitialSharePolicy,
) -> Result<Shares, AmmError> {
    if total_shares.is_zero() {
        return match policy {
            InitialSharePolicy::GeometricMean => {
                isqrt_product(amount_a.get(), amount_b.get()).map(Shares::new)
            }
            InitialSharePolicy::ReserveSum => amount_a
                .safe_add(&amount_b)
                .map(Shares::from_amount)
                .map_err(|_| AmmError::ArithmeticOverflow("initial share issuance overflow")),
        };
    }
    let total = total_shares.get();
    let by_a = mul_div(amount_a.get(), total, reserve_a.get())?;
    let by_b = mul_div(amount_b.get(), total, reserve_b.get())?;
    Ok(Shares::new(by_a.min(by_b)))
}

/// Returns what redeeming `shares` out of `total_shares` pays:
/// `(shares × reserve_a / total, shares × reserve_b / total)`, floored.
///
/// Redeeming the whole supply returns both reserves exactly.
///
/// # Errors
///
/// Returns [`AmmError::InvalidInput`] if `shares` or `total_shares` is
/// zero, or if `shares` exceeds `total_shares`.
pub fn amounts_for_withdrawal(
    shares: Shares,
    reserve_a: Amount,
    reserve_b: Amount,
    total_shares: Shares,
) -> Result<(Amount, Amount), AmmError> {
    if shares.is_zero() {
        return Err(AmmError::InvalidInput("shares must be positive"));
    }
    if total_shares.is_zero() {
        return Err(AmmError::InvalidInput("pool has no shares outstanding"));
    }
    if shares > total_shares {
        return Err(AmmError::InvalidInput("shares exceed total supply"));
    }
    let amount_a = reserve_a.scale(shares.get(), total_shares.get())?;
    let amount_b = reserve_b.scale(shares.get(), total_shares.get())?;
    Ok((amount_a, amount_b))
}

/// Issues `shares` to `owner` on the share ledger.
///
/// # Errors
///
/// Propagates the ledger's error; a failed mint leaves balances unchanged.
pub fn credit<S: ShareLedger>(ledger: &mut S, owner: &AccountId, shares: Shares) -> Result<(), AmmError> {
    ledger.mint(owner, shares)
}

/// Burns `shares` held by `owner`.
///
/// # Errors
///
/// Returns [`AmmError::InsufficientShares`] if `owner` holds fewer than
/// `shares`; the ledger is not touched in that case.
pub fn debit<S: ShareLedger>(ledger: &mut S, owner: &AccountId, shares: Shares) -> Result<(), AmmError> {
    if ledger.balance_of(owner) < shares {
        return Err(AmmError::InsufficientShares);
    }
    ledger.burn(owner, shares)
}

/// Returns `owner`'s position as recorded on the share ledger.
#[must_use]
pub fn share_account<S: ShareLedger>(ledger: &S, owner: &AccountId) -> ShareAccount {
    ShareAccount::new(*owner, ledger.balance_of(owner))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::ledger::InMemoryShareLedger;

    fn amt(v: u128) -> Amount {
        Amount::new(v)
    }

    fn acct(b: u8) -> AccountId {
        AccountId::from_bytes([b; 32])
    }

    // -- shares_for_deposit ---------------------------------------------------

    #[test]
    fn first_deposit_geometric_mean() {
        let Ok(s) = shares_for_deposit(
            amt(100),
            amt(400),
            Amount::ZERO,
            Amount::ZERO,
            Shares::ZERO,
            InitialSharePolicy::GeometricMean,
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(s, Shares::new(200));
    }

    #[test]
    fn first_deposit_reserve_sum() {
        let Ok(s) = shares_for_deposit(
            amt(100),
            amt(400),
            Amount::ZERO,
            Amount::ZERO,
            Shares::ZERO,
            InitialSharePolicy::ReserveSum,
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(s, Shares::new(500));
    }

    #[test]
    fn reserve_sum_overflow() {
        let result = shares_for_deposit(
            Amount::MAX,
            amt(1),
            Amount::ZERO,
            Amount::ZERO,
            Shares::ZERO,
            InitialSharePolicy::ReserveSum,
        );
        assert!(matches!(result, Err(AmmError::ArithmeticOverflow(_))));
    }

    #[test]
    fn proportional_takes_minimum() {
        // 1000/1000 reserves, 2000 shares; b side is the binding one.
        let Ok(s) = shares_for_deposit(
            amt(500),
            amt(250),
            amt(1_000),
            amt(1_000),
            Shares::new(2_000),
            InitialSharePolicy::GeometricMean,
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(s, Shares::new(500));
    }

    #[test]
    fn proportional_rounds_down_to_zero() {
        let Ok(s) = shares_for_deposit(
            amt(1),
            amt(1),
            amt(1_000),
            amt(1_000),
            Shares::new(10),
            InitialSharePolicy::GeometricMean,
        ) else {
            panic!("expected Ok");
        };
        assert!(s.is_zero());
    }

    #[test]
    fn outstanding_shares_with_empty_reserve() {
        let result = shares_for_deposit(
            amt(1),
            amt(1),
            Amount::ZERO,
            amt(1_000),
            Shares::new(10),
            InitialSharePolicy::GeometricMean,
        );
        assert_eq!(result, Err(AmmError::DivisionByZero));
    }

    // -- amounts_for_withdrawal -----------------------------------------------

    #[test]
    fn withdrawal_is_proportional() {
        let Ok((a, b)) = amounts_for_withdrawal(Shares::new(250), amt(1_000), amt(3_000), Shares::new(1_000))
        else {
            panic!("expected Ok");
        };
        assert_eq!((a, b), (amt(250), amt(750)));
    }

    #[test]
    fn withdrawal_of_whole_supply_is_exact() {
        let Ok((a, b)) = amounts_for_withdrawal(Shares::new(7), amt(1_001), amt(13), Shares::new(7)) else {
            panic!("expected Ok");
        };
        assert_eq!((a, b), (amt(1_001), amt(13)));
    }

    #[test]
    fn withdrawal_rejects_zero_and_excess() {
        assert!(matches!(
            amounts_for_withdrawal(Shares::ZERO, amt(1), amt(1), Shares::new(1)),
            Err(AmmError::InvalidInput(_))
        ));
        assert!(matches!(
            amounts_for_withdrawal(Shares::new(1), amt(1), amt(1), Shares::ZERO),
            Err(AmmError::InvalidInput(_))
        ));
        assert!(matches!(
            amounts_for_withdrawal(Shares::new(2), amt(1), amt(1), Shares::new(1)),
            Err(AmmError::InvalidInput(_))
        ));
    }

    // -- ledger-backed credit / debit -----------------------------------------

    #[test]
    fn credit_and_debit_go_through_ledger() {
        let mut ledger = InMemoryShareLedger::new();
        let Ok(()) = credit(&mut ledger, &acct(1), Shares::new(300)) else {
            panic!("credit");
        };
        let Ok(()) = debit(&mut ledger, &acct(1), Shares::new(100)) else {
            panic!("debit");
        };
        assert_eq!(share_account(&ledger, &acct(1)).balance(), Shares::new(200));
        assert_eq!(ledger.total_supply(), Shares::new(200));
    }

    #[test]
    fn debit_beyond_balance() {
        let mut ledger = InMemoryShareLedger::new();
        let Ok(()) = credit(&mut ledger, &acct(1), Shares::new(5)) else {
            panic!("credit");
        };
        assert_eq!(
            debit(&mut ledger, &acct(1), Shares::new(6)),
            Err(AmmError::InsufficientShares)
        );
        assert_eq!(ledger.balance_of(&acct(1)), Shares::new(5));
    }

    #[test]
    fn absent_account_is_empty() {
        let ledger = InMemoryShareLedger::new();
        let view = share_account(&ledger, &acct(9));
        assert!(view.is_empty());
        assert_eq!(view.owner(), acct(9));
    }
}
