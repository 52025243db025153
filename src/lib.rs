//! # Hydra CPMM
//!
//! A two-asset constant-product liquidity pool: participants deposit a pair
//! of fungible assets for proportional pool shares, redeem shares for a
//! proportional slice of the reserves, and swap one asset for the other at
//! the price set by the pool's own reserves (`x · y = k`, no fee).
//!
//! The crate is the pool's accounting and pricing engine.  Asset
//! movements, share balances and time are supplied by collaborators behind
//! the [`traits`] seams; [`ledger`] has in-memory implementations of each.
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `serde` | no | `Serialize`/`Deserialize` for configuration and value types |
//!
//! ## Seed a pool and swap
//!
//! ```rust
//! use hydra_cpmm::prelude::*;
//!
//! let gold = AssetId::from_bytes([1u8; 32]);
//! let silver = AssetId::from_bytes([2u8; 32]);
//! let minter = AccountId::from_bytes([0xee; 32]);
//! let pool_account = AccountId::from_bytes([0xb0; 32]);
//! let alice = AccountId::from_bytes([0x0a; 32]);
//!
//! // 1. Two asset ledgers; alice is funded and lets the pool pull from her
//! let mut a = InMemoryAssetLedger::new(gold, minter);
//! let mut b = InMemoryAssetLedger::new(silver, minter);
//! for ledger in [&mut a, &mut b] {
//!     ledger.mint(&minter, &alice, Amount::new(1_000_000)).expect("minter");
//!     ledger.approve(&alice, &pool_account, Amount::MAX);
//! }
//!
//! // 2. Configure and seed the pool
//! let pair = AssetPair::new(gold, silver).expect("distinct assets");
//! let config = PoolConfig::new(pair, pool_account, InitialSharePolicy::GeometricMean)
//!     .expect("valid config");
//! let clock = ManualClock::new(Timestamp::from_secs(1_000));
//! let mut pool = PoolEngine::new(config, a, b, InMemoryShareLedger::new(), clock)
//!     .expect("ledgers match the pair");
//! pool.bootstrap(&alice, Amount::new(5_000), Amount::new(8_000)).expect("seeded");
//!
//! // 3. Sell 1 000 gold
//! let receipt = pool
//!     .swap(
//!         &alice,
//!         SwapRequest {
//!             amount_in: Amount::new(1_000),
//!             amount_out_min: Amount::new(1_300),
//!             path: SwapPath::new(gold, silver).expect("distinct"),
//!             recipient: alice,
//!             deadline: Timestamp::from_secs(1_060),
//!         },
//!     )
//!     .expect("swap succeeded");
//!
//! assert_eq!(receipt.amount_out(), Amount::new(1_333));
//! assert_eq!(pool.reserves().reserve_b(), Amount::new(6_667));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │    Caller     │  DepositRequest / WithdrawRequest / SwapRequest
//! └──────┬───────┘
//!        ▼
//! ┌──────────────┐
//! │  PoolEngine   │  validates, stages, transfers, commits
//! └──┬────────┬──┘
//!    │        │
//!    ▼        ▼
//! ┌────────┐ ┌──────────────────┐
//! │Reserve │ │ share accounting │  pure math
//! │ Ledger │ └────────┬─────────┘
//! └────────┘          │
//!                     ▼
//! ┌──────────────────────────────┐
//! │ AssetLedger ×2, ShareLedger, │  collaborators
//! │ Clock                        │
//! └──────────────────────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`Shares`](domain::Shares), [`Price`](domain::Price), requests and receipts |
//! | [`traits`] | Collaborator seams: [`AssetLedger`](traits::AssetLedger), [`ShareLedger`](traits::ShareLedger), [`Clock`](traits::Clock) |
//! | [`ledger`] | In-memory collaborators for tests, simulations and embedding |
//! | [`config`] | [`PoolConfig`](config::PoolConfig) and the first-deposit policy |
//! | [`pool`]   | [`ReserveLedger`](pool::ReserveLedger), share accounting and [`PoolEngine`](pool::PoolEngine) |
//! | [`math`]   | 256-bit `mul_div`, integer square root, checked arithmetic |
//! | [`error`]  | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |

pub mod config;
pub mod domain;
pub mod error;
pub mod ledger;
pub mod math;
pub mod pool;
pub mod prelude;
pub mod traits;
