//! Parameter bundles for the public pool operations.
//!
//! Each request names the assets it refers to explicitly; the engine
//! matches them against the pool's own pair before doing anything else.

use super::{AccountId, AssetId, Amount, Shares, Timestamp};
use crate::error::AmmError;

/// Parameters of [`PoolEngine::deposit`](crate::pool::PoolEngine::deposit).
///
/// `asset_a`/`asset_b` may be given in either order relative to the pool;
/// the desired and minimum amounts follow the order given here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepositRequest {
    /// First asset of the deposit.
    pub asset_a: AssetId,
    /// Second asset of the deposit.
    pub asset_b: AssetId,
    /// Most of `asset_a` the caller is willing to deposit.
    pub desired_a: Amount,
    /// Most of `asset_b` the caller is willing to deposit.
    pub desired_b: Amount,
    /// Least of `asset_a` the caller accepts being used.
    pub min_a: Amount,
    /// Least of `asset_b` the caller accepts being used.
    pub min_b: Amount,
    /// Account credited with the issued shares.
    pub recipient: AccountId,
    /// Latest time at which the deposit may execute.
    pub deadline: Timestamp,
}

/// Parameters of [`PoolEngine::withdraw`](crate::pool::PoolEngine::withdraw).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WithdrawRequest {
    /// First asset of the withdrawal.
    pub asset_a: AssetId,
    /// Second asset of the withdrawal.
    pub asset_b: AssetId,
    /// Shares to redeem from the caller's balance.
    pub shares: Shares,
    /// Least of `asset_a` the caller accepts receiving.
    pub min_a: Amount,
    /// Least of `asset_b` the caller accepts receiving.
    pub min_b: Amount,
    /// Account receiving both assets.
    pub recipient: AccountId,
    /// Latest time at which the withdrawal may execute.
    pub deadline: Timestamp,
}

/// The two-asset route of a swap: which asset goes in and which comes out.
///
/// # Examples
///
/// ```
/// use hydra_cpmm::domain::{AssetId, SwapPath};
///
/// let gold = AssetId::from_bytes([1u8; 32]);
/// let silver = AssetId::from_bytes([2u8; 32]);
///
/// let path = SwapPath::from_slice(&[gold, silver]).expect("two distinct assets");
/// assert_eq!(path.asset_in(), gold);
/// assert!(SwapPath::from_slice(&[gold, silver, gold]).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapPath {
    asset_in: AssetId,
    asset_out: AssetId,
}

impl SwapPath {
    /// Creates a path from an input and an output asset.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidInput`] if both assets are the same.
    pub fn new(asset_in: AssetId, asset_out: AssetId) -> Result<Self, AmmError> {
        if asset_in == asset_out {
            return Err(AmmError::InvalidInput("swap path requires two distinct assets"));
        }
        Ok(Self {
            asset_in,
            asset_out,
        })
    }

    /// Creates a path from a `[asset_in, asset_out]` slice.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidInput`] unless the slice holds exactly two
    /// distinct assets; multi-hop routes are not supported.
    pub fn from_slice(path: &[AssetId]) -> Result<Self, AmmError> {
        match path {
            [asset_in, asset_out] => Self::new(*asset_in, *asset_out),
            _ => Err(AmmError::InvalidInput("swap path must contain exactly two assets")),
        }
    }

    /// Returns the asset sold by the caller.
    #[must_use]
    pub const fn asset_in(&self) -> AssetId {
        self.asset_in
    }

    /// Returns the asset bought by the caller.
    #[must_use]
    pub const fn asset_out(&self) -> AssetId {
        self.asset_out
    }

    /// Returns the same route in the opposite direction.
    #[must_use]
    pub const fn reversed(&self) -> Self {
        Self {
            asset_in: self.asset_out,
            asset_out: self.asset_in,
        }
    }
}

/// Parameters of [`PoolEngine::swap`](crate::pool::PoolEngine::swap).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapRequest {
    /// Exact amount of `path.asset_in()` pulled from the caller.
    pub amount_in: Amount,
    /// Least amount of `path.asset_out()` the caller accepts.
    pub amount_out_min: Amount,
    /// Input and output assets.
    pub path: SwapPath,
    /// Account receiving the output.
    pub recipient: AccountId,
    /// Latest time at which the swap may execute.
    pub deadline: Timestamp,
}
