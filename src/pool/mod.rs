//! The constant-product pool.
//!
//! | Component | Role |
//! |-----------|------|
//! | [`ReserveLedger`] | Recorded reserves, quotes and spot prices |
//! | [`shares_for_deposit`], [`amounts_for_withdrawal`] | Share issuance and redemption over the share ledger |
//! | [`PoolEngine`] | Deposit, withdraw and swap against the asset ledgers |
//!
//! # Pricing
//!
//! Swaps carry no fee:
//!
//! ```text
//! amount_out = floor(amount_in × reserve_out / (reserve_in + amount_in))
//! ```
//!
//! Flooring the output is what keeps `reserve_a × reserve_b` from
//! decreasing.

mod engine;
mod journal;
mod reserve_ledger;
mod share_accounting;

#[cfg(test)]
#[allow(clippy::panic)]
pub(crate) mod fixtures;
#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;

pub use engine::{optimal_deposit, PoolEngine};
pub use reserve_ledger::{quote, spot_price, ReserveLedger};
pub use share_accounting::{amounts_for_withdrawal, credit, debit, share_account, shares_for_deposit};
