//! The two assets a pool was constructed with.

use core::fmt;

use super::AssetId;
use crate::error::AmmError;

/// Which side of a pool an asset sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AssetSide {
    /// The pool's asset "A".
    A,
    /// The pool's asset "B".
    B,
}

impl AssetSide {
    /// Returns the opposite side.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }
}

impl fmt::Display for AssetSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
        }
    }
}

/// An ordered pair of distinct assets.
///
/// Unlike a canonically sorted pair, the order is the one the pool was
/// constructed with: the first asset is side [`AssetSide::A`], the second
/// is side [`AssetSide::B`].  A pool is identified by this pair.
///
/// # Examples
///
/// ```
/// use hydra_cpmm::domain::{AssetId, AssetPair, AssetSide};
///
/// let gold   = AssetId::from_bytes([2u8; 32]);
/// let silver = AssetId::from_bytes([1u8; 32]);
///
/// let pair = AssetPair::new(gold, silver).expect("distinct assets");
/// assert_eq!(pair.asset(AssetSide::A), gold);
/// assert_eq!(pair.side_of(&silver), Some(AssetSide::B));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssetPair {
    asset_a: AssetId,
    asset_b: AssetId,
}

impl AssetPair {
    /// Creates a new pair in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if both assets are the same.
    pub fn new(asset_a: AssetId, asset_b: AssetId) -> Result<Self, AmmError> {
        let pair = Self { asset_a, asset_b };
        pair.validate()?;
        Ok(pair)
    }

    /// Re-checks that the two assets are distinct.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if both assets are the same.
    pub fn validate(&self) -> Result<(), AmmError> {
        if self.asset_a == self.asset_b {
            return Err(AmmError::InvalidConfiguration(
                "asset pair requires two distinct assets",
            ));
        }
        Ok(())
    }

    /// Returns asset "A".
    #[must_use]
    pub const fn asset_a(&self) -> AssetId {
        self.asset_a
    }

    /// Returns asset "B".
    #[must_use]
    pub const fn asset_b(&self) -> AssetId {
        self.asset_b
    }

    /// Returns the asset on `side`.
    #[must_use]
    pub const fn asset(&self, side: AssetSide) -> AssetId {
        match side {
            AssetSide::A => self.asset_a,
            AssetSide::B => self.asset_b,
        }
    }

    /// Returns the side `asset` occupies, or `None` if it is not in the pair.
    #[must_use]
    pub fn side_of(&self, asset: &AssetId) -> Option<AssetSide> {
        if *asset == self.asset_a {
            Some(AssetSide::A)
        } else if *asset == self.asset_b {
            Some(AssetSide::B)
        } else {
            None
        }
    }

    /// Returns `true` if `asset` is part of this pair.
    #[must_use]
    pub fn contains(&self, asset: &AssetId) -> bool {
        self.side_of(asset).is_some()
    }

    /// Resolves two caller-supplied assets to pool sides.
    ///
    /// Returns the side of `first`; `second` is then necessarily the
    /// other side.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidInput`] if either asset is foreign to
    /// the pair or both name the same asset.
    pub fn orient(&self, first: &AssetId, second: &AssetId) -> Result<AssetSide, AmmError> {
        let first_side = self
            .side_of(first)
            .ok_or(AmmError::InvalidInput("asset is not part of the pool pair"))?;
        let second_side = self
            .side_of(second)
            .ok_or(AmmError::InvalidInput("asset is not part of the pool pair"))?;
        if first_side == second_side {
            return Err(AmmError::InvalidInput("assets must be distinct"));
        }
        Ok(first_side)
    }
}
