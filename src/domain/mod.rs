//! Domain value types for the constant-product pool.
//!
//! Amounts and shares are `u128` newtypes with checked arithmetic;
//! identities are opaque 32-byte values; requests and receipts bundle the
//! parameters and results of the public operations.

mod amount;
mod asset_pair;
mod identity;
mod price;
mod receipts;
mod requests;
mod reserve_delta;
mod shares;
mod timestamp;

pub use amount::Amount;
pub use asset_pair::{AssetPair, AssetSide};
pub use identity::{AccountId, AssetId};
pub use price::Price;
pub use receipts::{DepositReceipt, ShareAccount, SwapReceipt, WithdrawReceipt};
pub use requests::{DepositRequest, SwapPath, SwapRequest, WithdrawRequest};
pub use reserve_delta::ReserveDelta;
pub use shares::Shares;
pub use timestamp::Timestamp;
