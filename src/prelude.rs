//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use hydra_cpmm::prelude::*;
//! ```

// Domain types
pub use crate::domain::{
    AccountId, Amount, AssetId, AssetPair, AssetSide, DepositReceipt, DepositRequest, Price,
    ShareAccount, Shares, SwapPath, SwapReceipt, SwapRequest, Timestamp, WithdrawReceipt,
    WithdrawRequest,
};

// Collaborator seams and their in-memory implementations
pub use crate::ledger::{InMemoryAssetLedger, InMemoryShareLedger, ManualClock, SystemClock};
pub use crate::traits::{AssetLedger, Clock, ShareLedger};

// Math utilities
pub use crate::math::CheckedArithmetic;

// Configuration
pub use crate::config::{InitialSharePolicy, PoolConfig};

// Pool
pub use crate::pool::{PoolEngine, ReserveLedger};

// Error types
pub use crate::error::{AmmError, Result};
