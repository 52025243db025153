//! The pool engine: deposit, withdraw and swap against two asset ledgers.
//!
//! # Operation order
//!
//! Every mutating operation runs the same sequence:
//!
//! 1. deadline and input checks
//! 2. pure computation of the amounts, the share delta and the next
//!    [`ReserveLedger`]
//! 3. collaborator calls (asset transfers, share mint/burn), each recorded
//!    in a journal
//! 4. commit of the staged reserves
//!
//! A failure in step 3 unwinds the journal and returns the original error.
//! Reserves are only written in step 4.  The one exception is an unwind
//! that cannot recover a payout: the reserves are then reset to what the
//! pool account actually holds, and the shares burned for that payout stay
//! burned.

use tracing::{debug, info, warn};

use super::journal::{Journal, JournalEntry};
use super::reserve_ledger::{quote, ReserveLedger};
use super::share_accounting::{amounts_for_withdrawal, credit, debit, share_account, shares_for_deposit};
use crate::config::PoolConfig;
use crate::domain::{
    AccountId, Amount, AssetId, AssetSide, DepositReceipt, DepositRequest, Price, ReserveDelta,
    ShareAccount, Shares, SwapPath, SwapReceipt, SwapRequest, Timestamp, WithdrawReceipt,
    WithdrawRequest,
};
use crate::error::AmmError;
use crate::math::mul_div;
use crate::traits::{AssetLedger, Clock, ShareLedger};

/// Chooses how much of each asset a deposit actually uses.
///
/// Amounts are on the pool's A/B sides.  The A-desired branch is tried
/// first:
///
/// 1. `b_optimal = desired_a × reserve_b / reserve_a`.  If
///    `b_optimal <= desired_b` the deposit is `(desired_a, b_optimal)` and
///    `min_b` must hold.
/// 2. Otherwise `a_optimal = desired_b × reserve_a / reserve_b`, which must
///    not exceed `desired_a` and must meet `min_a`; the deposit is
///    `(a_optimal, desired_b)`.
///
/// When `b_optimal == desired_b` branch 1 is taken, so only `min_b` is
/// checked.
///
/// # Errors
///
/// - [`AmmError::SlippageExceeded`] if the governing bound is not met.
/// - [`AmmError::DivisionByZero`] if a reserve is zero.
///
/// # Examples
///
/// ```
/// use hydra_cpmm::domain::Amount;
/// use hydra_cpmm::pool::optimal_deposit;
///
/// let used = optimal_deposit(
///     Amount::new(500),
///     Amount::new(500),
///     Amount::new(400),
///     Amount::new(400),
///     Amount::new(1_000),
///     Amount::new(1_000),
/// );
/// assert_eq!(used, Ok((Amount::new(500), Amount::new(500))));
/// ```
pub fn optimal_deposit(
    desired_a: Amount,
    desired_b: Amount,
    min_a: Amount,
    min_b: Amount,
    reserve_a: Amount,
    reserve_b: Amount,
) -> Result<(Amount, Amount), AmmError> {
    let b_optimal = Amount::new(mul_div(desired_a.get(), reserve_b.get(), reserve_a.get())?);
    if b_optimal <= desired_b {
        if b_optimal < min_b {
            return Err(AmmError::SlippageExceeded("asset B amount below minimum"));
        }
        return Ok((desired_a, b_optimal));
    }
    let a_optimal = Amount::new(mul_div(desired_b.get(), reserve_a.get(), reserve_b.get())?);
    if a_optimal > desired_a {
        return Err(AmmError::SlippageExceeded("asset A amount above desired"));
    }
    if a_optimal < min_a {
        return Err(AmmError::SlippageExceeded("asset A amount below minimum"));
    }
    Ok((a_optimal, desired_b))
}

/// Converts a pair between the caller's order and the pool's A/B order,
/// where `first_side` is the pool side of the caller's first asset.  The
/// mapping is its own inverse.
fn reorder<T>(first_side: AssetSide, first: T, second: T) -> (T, T) {
    match first_side {
        AssetSide::A => (first, second),
        AssetSide::B => (second, first),
    }
}

/// A two-asset constant-product pool.
///
/// The engine owns its collaborators: one [`AssetLedger`] per asset, the
/// [`ShareLedger`] that records pool ownership and the [`Clock`] used for
/// deadlines.  The pool's holdings sit on the asset ledgers under
/// [`PoolConfig::pool_account`]; the engine acts as that account when it
/// moves assets.
///
/// Callers must have granted the pool account an allowance on each asset
/// ledger before depositing or swapping.
///
/// # Examples
///
/// ```
/// use hydra_cpmm::config::{InitialSharePolicy, PoolConfig};
/// use hydra_cpmm::domain::{AccountId, Amount, AssetId, AssetPair, Shares, SwapPath, SwapRequest, Timestamp};
/// use hydra_cpmm::ledger::{InMemoryAssetLedger, InMemoryShareLedger, ManualClock};
/// use hydra_cpmm::pool::PoolEngine;
/// use hydra_cpmm::traits::AssetLedger;
///
/// let (gold, silver) = (AssetId::from_bytes([1; 32]), AssetId::from_bytes([2; 32]));
/// let (minter, pool, alice) = (
///     AccountId::from_bytes([9; 32]),
///     AccountId::from_bytes([8; 32]),
///     AccountId::from_bytes([7; 32]),
/// );
///
/// let mut a = InMemoryAssetLedger::new(gold, minter);
/// let mut b = InMemoryAssetLedger::new(silver, minter);
/// for ledger in [&mut a, &mut b] {
///     ledger.mint(&minter, &alice, Amount::new(1_000_000)).expect("minter");
///     ledger.approve(&alice, &pool, Amount::MAX);
/// }
///
/// let pair = AssetPair::new(gold, silver).expect("distinct");
/// let config = PoolConfig::new(pair, pool, InitialSharePolicy::GeometricMean).expect("valid");
/// let clock = ManualClock::new(Timestamp::from_secs(1_000));
/// let mut engine = PoolEngine::new(config, a, b, InMemoryShareLedger::new(), clock).expect("ledgers match");
///
/// engine.bootstrap(&alice, Amount::new(5_000), Amount::new(8_000)).expect("seeded");
///
/// let request = SwapRequest {
///     amount_in: Amount::new(1_000),
///     amount_out_min: Amount::new(1_300),
///     path: SwapPath::new(gold, silver).expect("distinct"),
///     recipient: alice,
///     deadline: Timestamp::from_secs(1_060),
/// };
/// let receipt = engine.swap(&alice, request).expect("swap");
/// assert_eq!(receipt.amount_out(), Amount::new(1_333));
/// ```
#[derive(Debug)]
pub struct PoolEngine<L, S, C> {
    config: PoolConfig,
    reserves: ReserveLedger,
    asset_a: L,
    asset_b: L,
    shares: S,
    clock: C,
}

impl<L, S, C> PoolEngine<L, S, C>
where
    L: AssetLedger,
    S: ShareLedger,
    C: Clock,
{
    /// Creates an empty pool over the given collaborators.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if the configuration is
    /// invalid, if a ledger's asset does not match its side of the pair,
    /// or if the share ledger already has shares outstanding.
    pub fn new(
        config: PoolConfig,
        asset_a: L,
        asset_b: L,
        share_ledger: S,
        clock: C,
    ) -> Result<Self, AmmError> {
        config.validate()?;
        if asset_a.asset_id() != config.pair().asset_a() {
            return Err(AmmError::InvalidConfiguration(
                "asset A ledger does not match the configured pair",
            ));
        }
        if asset_b.asset_id() != config.pair().asset_b() {
            return Err(AmmError::InvalidConfiguration(
                "asset B ledger does not match the configured pair",
            ));
        }
        if !share_ledger.total_supply().is_zero() {
            return Err(AmmError::InvalidConfiguration(
                "share ledger must start with no shares outstanding",
            ));
        }
        Ok(Self {
            config,
            reserves: ReserveLedger::EMPTY,
            asset_a,
            asset_b,
            shares: share_ledger,
            clock,
        })
    }

    // -- accessors ------------------------------------------------------------

    /// Returns the pool configuration.
    #[must_use]
    pub const fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Returns the recorded reserves.
    #[must_use]
    pub const fn reserves(&self) -> ReserveLedger {
        self.reserves
    }

    /// Returns the recorded reserve of `asset`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidInput`] if `asset` is not in the pair.
    pub fn reserve_of(&self, asset: &AssetId) -> Result<Amount, AmmError> {
        Ok(self.reserves.reserve(self.side_of(asset)?))
    }

    /// Returns the shares outstanding, read from the share ledger.
    #[must_use]
    pub fn total_shares(&self) -> Shares {
        self.shares.total_supply()
    }

    /// Returns `owner`'s share position.
    #[must_use]
    pub fn share_account(&self, owner: &AccountId) -> ShareAccount {
        share_account(&self.shares, owner)
    }

    /// Returns `true` once the pool holds both assets and has shares
    /// outstanding.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.reserves.is_initialized() && !self.total_shares().is_zero()
    }

    /// Returns the ledger for `asset`, or `None` if it is not in the pair.
    #[must_use]
    pub fn asset_ledger(&self, asset: &AssetId) -> Option<&L> {
        match self.config.pair().side_of(asset)? {
            AssetSide::A => Some(&self.asset_a),
            AssetSide::B => Some(&self.asset_b),
        }
    }

    /// Mutable access to the ledger for `asset`.
    ///
    /// Changes made here bypass the engine.  Assets sent straight to the
    /// pool account are picked up by the next swap's reserve resync.
    pub fn asset_ledger_mut(&mut self, asset: &AssetId) -> Option<&mut L> {
        let side = self.config.pair().side_of(asset)?;
        Some(self.ledger_mut(side))
    }

    /// Returns the share ledger.
    #[must_use]
    pub const fn share_ledger(&self) -> &S {
        &self.shares
    }

    /// Returns the clock.
    #[must_use]
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// Mutable access to the clock.
    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    // -- read-only pricing ----------------------------------------------------

    /// Returns the price of `asset_x` in units of `asset_y`, scaled by 1e18.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidInput`] if the assets are not the pool's pair.
    /// - [`AmmError::DivisionByZero`] if the reserve of `asset_x` is zero.
    pub fn get_price(&self, asset_x: &AssetId, asset_y: &AssetId) -> Result<Price, AmmError> {
        let side_x = self.config.pair().orient(asset_x, asset_y)?;
        self.reserves.spot_price(side_x)
    }

    /// Constant-product quote for arbitrary reserves.
    ///
    /// # Errors
    ///
    /// Same as [`quote`].
    pub fn get_amount_out(
        &self,
        amount_in: Amount,
        reserve_in: Amount,
        reserve_out: Amount,
    ) -> Result<Amount, AmmError> {
        quote(amount_in, reserve_in, reserve_out)
    }

    /// Previews what [`PoolEngine::swap`] would pay out at the recorded
    /// reserves.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidInput`] if the path is not the pool's pair, or
    ///   if the amount or a reserve is zero.
    pub fn quote_swap(&self, amount_in: Amount, path: &SwapPath) -> Result<Amount, AmmError> {
        let side_in = self.config.pair().orient(&path.asset_in(), &path.asset_out())?;
        self.reserves.quote(side_in, amount_in)
    }

    // -- mutating operations --------------------------------------------------

    /// Seeds an empty pool with `(amount_a, amount_b)` from `owner` and
    /// issues the initial shares to `owner`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidConfiguration`] if the pool already holds
    ///   reserves or has shares outstanding.
    /// - [`AmmError::InvalidInput`] if either amount is zero.
    /// - [`AmmError::InsufficientLiquidityMinted`] if the issuance is zero.
    /// - [`AmmError::TransferFailed`] if pulling either asset fails.
    pub fn bootstrap(
        &mut self,
        owner: &AccountId,
        amount_a: Amount,
        amount_b: Amount,
    ) -> Result<DepositReceipt, AmmError> {
        if !self.reserves.is_empty() || !self.total_shares().is_zero() {
            return Err(AmmError::InvalidConfiguration("pool is already initialized"));
        }
        if amount_a.is_zero() || amount_b.is_zero() {
            return Err(AmmError::InvalidInput("initial amounts must be positive"));
        }
        let issued = self.initial_issuance(amount_a, amount_b)?;
        self.settle_deposit(owner, owner, amount_a, amount_b, issued)?;
        info!(
            %owner,
            %amount_a,
            %amount_b,
            shares = %issued,
            policy = %self.config.initial_share_policy(),
            "pool bootstrapped"
        );
        Ok(DepositReceipt::new(amount_a, amount_b, issued))
    }

    /// Adds liquidity from `caller` and issues shares to the request's
    /// recipient.
    ///
    /// On a pool with shares outstanding the amounts used follow
    /// [`optimal_deposit`]; on an empty pool the desired amounts are used
    /// as given and shares follow the configured initial-share policy.
    /// The request's assets may be given in either order; the receipt
    /// follows the request's order.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Expired`] if the deadline has passed.
    /// - [`AmmError::InvalidInput`] if the assets are not the pool's pair
    ///   or a desired amount is zero.
    /// - [`AmmError::SlippageExceeded`] if a bound is not met.
    /// - [`AmmError::InsufficientLiquidityMinted`] if no shares would be
    ///   issued.
    /// - [`AmmError::TransferFailed`] if pulling either asset fails.
    pub fn deposit(
        &mut self,
        caller: &AccountId,
        request: DepositRequest,
    ) -> Result<DepositReceipt, AmmError> {
        self.ensure_live(request.deadline)?;
        let first_side = self.config.pair().orient(&request.asset_a, &request.asset_b)?;
        if request.desired_a.is_zero() || request.desired_b.is_zero() {
            return Err(AmmError::InvalidInput("desired amounts must be positive"));
        }
        let (desired_a, desired_b) = reorder(first_side, request.desired_a, request.desired_b);
        let (min_a, min_b) = reorder(first_side, request.min_a, request.min_b);

        let total = self.total_shares();
        let (used_a, used_b, issued) = if total.is_zero() {
            (desired_a, desired_b, self.initial_issuance(desired_a, desired_b)?)
        } else {
            let (ra, rb) = (self.reserves.reserve_a(), self.reserves.reserve_b());
            let (used_a, used_b) = optimal_deposit(desired_a, desired_b, min_a, min_b, ra, rb)?;
            let issued = shares_for_deposit(
                used_a,
                used_b,
                ra,
                rb,
                total,
                self.config.initial_share_policy(),
            )?;
            if issued.is_zero() {
                return Err(AmmError::InsufficientLiquidityMinted);
            }
            (used_a, used_b, issued)
        };

        self.settle_deposit(caller, &request.recipient, used_a, used_b, issued)?;
        debug!(
            %caller,
            recipient = %request.recipient,
            %used_a,
            %used_b,
            shares = %issued,
            "deposit settled"
        );
        let (first, second) = reorder(first_side, used_a, used_b);
        Ok(DepositReceipt::new(first, second, issued))
    }

    /// Burns `caller`'s shares and pays the proportional reserves to the
    /// request's recipient.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Expired`] if the deadline has passed.
    /// - [`AmmError::InvalidInput`] if the assets are not the pool's pair
    ///   or `shares` is zero.
    /// - [`AmmError::InsufficientShares`] if `caller` holds fewer shares.
    /// - [`AmmError::SlippageExceeded`] if a payout is below its minimum.
    /// - [`AmmError::TransferFailed`] if the pool account holds less than
    ///   a payout, or if paying either asset fails.
    pub fn withdraw(
        &mut self,
        caller: &AccountId,
        request: WithdrawRequest,
    ) -> Result<WithdrawReceipt, AmmError> {
        self.ensure_live(request.deadline)?;
        let first_side = self.config.pair().orient(&request.asset_a, &request.asset_b)?;
        if self.shares.balance_of(caller) < request.shares {
            return Err(AmmError::InsufficientShares);
        }
        let (amount_a, amount_b) = amounts_for_withdrawal(
            request.shares,
            self.reserves.reserve_a(),
            self.reserves.reserve_b(),
            self.total_shares(),
        )?;
        let (min_a, min_b) = reorder(first_side, request.min_a, request.min_b);
        if amount_a < min_a {
            return Err(AmmError::SlippageExceeded("asset A amount below minimum"));
        }
        if amount_b < min_b {
            return Err(AmmError::SlippageExceeded("asset B amount below minimum"));
        }
        let next = self
            .reserves
            .with_delta(AssetSide::A, ReserveDelta::Decrease(amount_a))?
            .with_delta(AssetSide::B, ReserveDelta::Decrease(amount_b))?;
        if self.pool_balance(AssetSide::A) < amount_a {
            return Err(AmmError::TransferFailed("pool holds less asset A than the payout"));
        }
        if self.pool_balance(AssetSide::B) < amount_b {
            return Err(AmmError::TransferFailed("pool holds less asset B than the payout"));
        }

        let mut journal = Journal::new();
        if let Err(err) = self.pay_out(&mut journal, caller, &request, amount_a, amount_b) {
            return Err(self.abort(journal, err));
        }
        self.reserves = next;
        debug!(
            %caller,
            recipient = %request.recipient,
            shares = %request.shares,
            %amount_a,
            %amount_b,
            "withdrawal settled"
        );
        let (first, second) = reorder(first_side, amount_a, amount_b);
        Ok(WithdrawReceipt::new(first, second))
    }

    /// Sells `amount_in` of the path's input asset from `caller` and pays
    /// the quoted output to the request's recipient.
    ///
    /// The engine samples its own balances around the inbound transfer
    /// and requires that exactly the named input asset arrived.  After the
    /// payout both reserves are reset to the pool account's observed
    /// balances, so assets sent to the pool outside the engine become part
    /// of the reserves.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Expired`] if the deadline has passed.
    /// - [`AmmError::InvalidInput`] if the path is not the pool's pair, or
    ///   if the amount or a reserve is zero.
    /// - [`AmmError::SlippageExceeded`] if the output is below
    ///   `amount_out_min`.
    /// - [`AmmError::InsufficientOutput`] if the output is zero.
    /// - [`AmmError::InvalidSwapDirection`] if the observed balance change
    ///   does not match the path.
    /// - [`AmmError::TransferFailed`] if either transfer fails.
    pub fn swap(&mut self, caller: &AccountId, request: SwapRequest) -> Result<SwapReceipt, AmmError> {
        self.ensure_live(request.deadline)?;
        let path = request.path;
        let side_in = self.config.pair().orient(&path.asset_in(), &path.asset_out())?;
        let amount_out = self.reserves.quote(side_in, request.amount_in)?;
        if amount_out < request.amount_out_min {
            return Err(AmmError::SlippageExceeded("output below minimum"));
        }
        if amount_out.is_zero() {
            return Err(AmmError::InsufficientOutput);
        }

        let mut journal = Journal::new();
        let observed = self.exchange(&mut journal, caller, &request, side_in, amount_out);
        let next = match observed {
            Ok(next) => next,
            Err(err) => return Err(self.abort(journal, err)),
        };
        self.reserves = next;
        debug!(
            %caller,
            recipient = %request.recipient,
            asset_in = %path.asset_in(),
            amount_in = %request.amount_in,
            %amount_out,
            reserve_a = %next.reserve_a(),
            reserve_b = %next.reserve_b(),
            "swap settled"
        );
        Ok(SwapReceipt::new(
            path.asset_in(),
            path.asset_out(),
            request.amount_in,
            amount_out,
        ))
    }

    /// Moves `shares` from `from` to `to` on the share ledger.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InsufficientShares`] if `from` holds fewer than
    /// `shares`.
    pub fn transfer_shares(
        &mut self,
        from: &AccountId,
        to: &AccountId,
        shares: Shares,
    ) -> Result<(), AmmError> {
        self.shares.transfer(from, to, shares)
    }

    // -- internals ------------------------------------------------------------

    fn side_of(&self, asset: &AssetId) -> Result<AssetSide, AmmError> {
        self.config
            .pair()
            .side_of(asset)
            .ok_or(AmmError::InvalidInput("asset is not part of the pool pair"))
    }

    fn ledger(&self, side: AssetSide) -> &L {
        match side {
            AssetSide::A => &self.asset_a,
            AssetSide::B => &self.asset_b,
        }
    }

    fn ledger_mut(&mut self, side: AssetSide) -> &mut L {
        match side {
            AssetSide::A => &mut self.asset_a,
            AssetSide::B => &mut self.asset_b,
        }
    }

    fn pool_balance(&self, side: AssetSide) -> Amount {
        self.ledger(side).balance_of(&self.config.pool_account())
    }

    fn ensure_live(&self, deadline: Timestamp) -> Result<(), AmmError> {
        if deadline.has_passed(self.clock.now()) {
            return Err(AmmError::Expired);
        }
        Ok(())
    }

    fn initial_issuance(&self, amount_a: Amount, amount_b: Amount) -> Result<Shares, AmmError> {
        let issued = shares_for_deposit(
            amount_a,
            amount_b,
            Amount::ZERO,
            Amount::ZERO,
            Shares::ZERO,
            self.config.initial_share_policy(),
        )?;
        if issued.is_zero() {
            return Err(AmmError::InsufficientLiquidityMinted);
        }
        Ok(issued)
    }

    /// Pulls both assets from `payer`, mints to `recipient`, then commits
    /// the increased reserves.
    fn settle_deposit(
        &mut self,
        payer: &AccountId,
        recipient: &AccountId,
        used_a: Amount,
        used_b: Amount,
        issued: Shares,
    ) -> Result<(), AmmError> {
        let next = self
            .reserves
            .with_delta(AssetSide::A, ReserveDelta::Increase(used_a))?
            .with_delta(AssetSide::B, ReserveDelta::Increase(used_b))?;
        let mut journal = Journal::new();
        if let Err(err) = self.collect(&mut journal, payer, recipient, used_a, used_b, issued) {
            return Err(self.abort(journal, err));
        }
        self.reserves = next;
        Ok(())
    }

    fn collect(
        &mut self,
        journal: &mut Journal,
        payer: &AccountId,
        recipient: &AccountId,
        used_a: Amount,
        used_b: Amount,
        issued: Shares,
    ) -> Result<(), AmmError> {
        self.pull(journal, AssetSide::A, payer, used_a)?;
        self.pull(journal, AssetSide::B, payer, used_b)?;
        credit(&mut self.shares, recipient, issued)
    }

    /// Burns the caller's shares, then sends both assets to the recipient.
    fn pay_out(
        &mut self,
        journal: &mut Journal,
        caller: &AccountId,
        request: &WithdrawRequest,
        amount_a: Amount,
        amount_b: Amount,
    ) -> Result<(), AmmError> {
        debit(&mut self.shares, caller, request.shares)?;
        journal.record(JournalEntry::SharesBurned {
            from: *caller,
            shares: request.shares,
        });
        self.send(journal, AssetSide::A, &request.recipient, amount_a)?;
        self.send(journal, AssetSide::B, &request.recipient, amount_b)
    }

    /// Runs the transfers of a swap and returns the resynced reserves.
    fn exchange(
        &mut self,
        journal: &mut Journal,
        caller: &AccountId,
        request: &SwapRequest,
        side_in: AssetSide,
        amount_out: Amount,
    ) -> Result<ReserveLedger, AmmError> {
        let pool = self.config.pool_account();
        let side_out = side_in.other();
        let before_in = self.pool_balance(side_in);
        let before_out = self.pool_balance(side_out);

        if !self
            .ledger_mut(side_in)
            .transfer_from(&pool, caller, &pool, request.amount_in)
        {
            return Err(inbound_failure(side_in));
        }
        let after_in = self.pool_balance(side_in);
        let after_out = self.pool_balance(side_out);
        let Some(received) = after_in.checked_sub(&before_in) else {
            return Err(AmmError::InvalidSwapDirection);
        };
        if !received.is_zero() {
            journal.record(JournalEntry::PulledIn {
                side: side_in,
                from: *caller,
                amount: received,
            });
        }
        if received < request.amount_in || after_out > before_out {
            return Err(AmmError::InvalidSwapDirection);
        }

        self.send(journal, side_out, &request.recipient, amount_out)?;
        Ok(ReserveLedger::new(
            self.pool_balance(AssetSide::A),
            self.pool_balance(AssetSide::B),
        ))
    }

    fn pull(
        &mut self,
        journal: &mut Journal,
        side: AssetSide,
        from: &AccountId,
        amount: Amount,
    ) -> Result<(), AmmError> {
        let pool = self.config.pool_account();
        if !self.ledger_mut(side).transfer_from(&pool, from, &pool, amount) {
            return Err(inbound_failure(side));
        }
        journal.record(JournalEntry::PulledIn {
            side,
            from: *from,
            amount,
        });
        Ok(())
    }

    fn send(
        &mut self,
        journal: &mut Journal,
        side: AssetSide,
        to: &AccountId,
        amount: Amount,
    ) -> Result<(), AmmError> {
        let pool = self.config.pool_account();
        if !self.ledger_mut(side).transfer(&pool, to, amount) {
            return Err(match side {
                AssetSide::A => AmmError::TransferFailed("outbound transfer of asset A failed"),
                AssetSide::B => AmmError::TransferFailed("outbound transfer of asset B failed"),
            });
        }
        journal.record(JournalEntry::SentOut {
            side,
            to: *to,
            amount,
        });
        Ok(())
    }

    /// Undoes the journal and hands back `err` for the caller to return.
    ///
    /// If the pool account ends up holding less than a recorded reserve,
    /// both reserves are reset to the observed balances.
    fn abort(&mut self, journal: Journal, err: AmmError) -> AmmError {
        warn!(%err, "operation aborted, unwinding collaborator calls");
        let pool = self.config.pool_account();
        let unwound = journal.unwind(&pool, &mut self.asset_a, &mut self.asset_b, &mut self.shares);
        let held = ReserveLedger::new(
            self.pool_balance(AssetSide::A),
            self.pool_balance(AssetSide::B),
        );
        let short_a = held.reserve_a() < self.reserves.reserve_a();
        let short_b = held.reserve_b() < self.reserves.reserve_b();
        if short_a || short_b {
            warn!(
                reserve_a = %held.reserve_a(),
                reserve_b = %held.reserve_b(),
                forfeited = %unwound.forfeited,
                complete = unwound.complete,
                "reserves reset to pool holdings"
            );
            self.reserves = held;
        }
        err
    }
}

const fn inbound_failure(side: AssetSide) -> AmmError {
    match side {
        AssetSide::A => AmmError::TransferFailed("inbound transfer of asset A failed"),
        AssetSide::B => AmmError::TransferFailed("inbound transfer of asset B failed"),
    }
}
