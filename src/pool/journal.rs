//! Record of external effects made during one pool operation.
//!
//! The engine stages every local change and only commits after all
//! collaborator calls succeed.  Collaborator calls cannot be staged, so
//! each successful one is recorded here and, if a later step fails,
//! undone in reverse order.

use tracing::warn;

use crate::domain::{AccountId, Amount, AssetSide, Shares};
use crate::math::{mul_div, wide_product};
use crate::traits::{AssetLedger, ShareLedger};

/// One completed collaborator call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum JournalEntry {
    /// `amount` of `side` moved from `from` into the pool.
    PulledIn {
        side: AssetSide,
        from: AccountId,
        amount: Amount,
    },
    /// `amount` of `side` moved from the pool to `to`.
    SentOut {
        side: AssetSide,
        to: AccountId,
        amount: Amount,
    },
    /// `shares` burned from `from`.
    SharesBurned { from: AccountId, shares: Shares },
}

/// Outcome of [`Journal::unwind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Unwound {
    /// Burned shares left burned because their payout stayed with the
    /// recipient.
    pub(crate) forfeited: Shares,
    /// `false` if any compensation failed.
    pub(crate) complete: bool,
}

/// Outbound totals for one asset during an unwind.
#[derive(Debug, Clone, Copy, Default)]
struct Payout {
    sent: Amount,
    kept: Amount,
}

impl Payout {
    fn add(total: Amount, amount: Amount) -> Amount {
        total.checked_add(&amount).unwrap_or(Amount::MAX)
    }

    /// `ceil(burned × kept / sent)`: the part of `burned` this payout
    /// already settled.
    fn settled(&self, burned: Shares) -> Shares {
        if self.kept.is_zero() {
            return Shares::ZERO;
        }
        let Ok(floor) = mul_div(burned.get(), self.kept.get(), self.sent.get()) else {
            return burned;
        };
        if wide_product(floor, self.sent.get()) < wide_product(burned.get(), self.kept.get()) {
            Shares::new(floor.saturating_add(1).min(burned.get()))
        } else {
            Shares::new(floor)
        }
    }
}

/// Ordered list of collaborator calls for the operation in flight.
#[derive(Debug, Default)]
pub(crate) struct Journal {
    entries: Vec<JournalEntry>,
}

impl Journal {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, entry: JournalEntry) {
        self.entries.push(entry);
    }

    #[cfg(test)]
    pub(crate) fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    /// Undoes every recorded call, newest first.
    ///
    /// Inbound pulls are refunded with a plain transfer from the pool.
    /// Outbound sends are reclaimed with `transfer_from`, which only
    /// succeeds if the recipient has granted the pool an allowance.
    /// Burned shares are re-minted, less the fraction already paid out by
    /// a send that could not be reclaimed (rounded up, per asset, the
    /// larger of the two).  A compensation that fails is logged and
    /// skipped; the remaining entries are still processed.
    pub(crate) fn unwind<L, S>(
        self,
        pool: &AccountId,
        asset_a: &mut L,
        asset_b: &mut L,
        shares: &mut S,
    ) -> Unwound
    where
        L: AssetLedger,
        S: ShareLedger,
    {
        let mut outcome = Unwound {
            forfeited: Shares::ZERO,
            complete: true,
        };
        let (mut payout_a, mut payout_b) = (Payout::default(), Payout::default());
        for entry in self.entries.into_iter().rev() {
            match entry {
                JournalEntry::PulledIn { side, from, amount } => {
                    let ledger = match side {
                        AssetSide::A => &mut *asset_a,
                        AssetSide::B => &mut *asset_b,
                    };
                    if !ledger.transfer(pool, &from, amount) {
                        warn!(%side, %from, %amount, "refund of inbound transfer failed");
                        outcome.complete = false;
                    }
                }
                JournalEntry::SentOut { side, to, amount } => {
                    let (ledger, payout) = match side {
                        AssetSide::A => (&mut *asset_a, &mut payout_a),
                        AssetSide::B => (&mut *asset_b, &mut payout_b),
                    };
                    payout.sent = Payout::add(payout.sent, amount);
                    if !ledger.transfer_from(pool, &to, pool, amount) {
                        warn!(%side, %to, %amount, "reclaim of outbound transfer failed");
                        payout.kept = Payout::add(payout.kept, amount);
                        outcome.complete = false;
                    }
                }
                JournalEntry::SharesBurned { from, shares: burned } => {
                    let settled = payout_a.settled(burned).max(payout_b.settled(burned));
                    let restored = burned.checked_sub(&settled).unwrap_or(Shares::ZERO);
                    if !settled.is_zero() {
                        warn!(
                            %from,
                            %burned,
                            forfeited = %settled,
                            "burned shares kept against unreclaimed payout"
                        );
                        outcome.forfeited =
                            outcome.forfeited.checked_add(&settled).unwrap_or(burned);
                    }
                    if restored.is_zero() {
                        continue;
                    }
                    if let Err(err) = shares.mint(&from, restored) {
                        warn!(%from, %restored, %err, "re-mint of burned shares failed");
                        outcome.complete = false;
                    }
                }
            }
        }
        outcome
    }
}
