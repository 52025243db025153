//! Configuration for a two-asset constant-product pool.

use core::fmt;

use crate::domain::{AccountId, AssetPair};
use crate::error::AmmError;

/// How shares are issued when the pool has no shares outstanding.
///
/// Later deposits are always priced proportionally to the existing
/// reserves; only the very first issuance needs a policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum InitialSharePolicy {
    /// `floor(√(amount_a × amount_b))`: independent of the starting price.
    #[default]
    GeometricMean,
    /// `amount_a + amount_b`: the raw sum of the seeded amounts, in plain
    /// asset units.  No fixed-point scale is applied to the sum.
    ReserveSum,
}

impl fmt::Display for InitialSharePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GeometricMean => write!(f, "geometric-mean"),
            Self::ReserveSum => write!(f, "reserve-sum"),
        }
    }
}

/// Immutable parameters of a pool.
///
/// # Validation
///
/// - The two assets are distinct (checked by [`AssetPair`]).
/// - The pool account is not the all-zero sentinel.
///
/// # Examples
///
/// ```
/// use hydra_cpmm::config::{InitialSharePolicy, PoolConfig};
/// use hydra_cpmm::domain::{AccountId, AssetId, AssetPair};
///
/// let pair = AssetPair::new(AssetId::from_bytes([1u8; 32]), AssetId::from_bytes([2u8; 32]))
///     .expect("distinct assets");
/// let pool = AccountId::from_bytes([0xEE; 32]);
///
/// let cfg = PoolConfig::new(pair, pool, InitialSharePolicy::GeometricMean).expect("valid");
/// assert_eq!(cfg.pool_account(), pool);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolConfig {
    pair: AssetPair,
    pool_account: AccountId,
    #[cfg_attr(feature = "serde", serde(default))]
    initial_share_policy: InitialSharePolicy,
}

impl PoolConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if any invariant is violated.
    pub fn new(
        pair: AssetPair,
        pool_account: AccountId,
        initial_share_policy: InitialSharePolicy,
    ) -> Result<Self, AmmError> {
        let config = Self {
            pair,
            pool_account,
            initial_share_policy,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// Configurations built with [`PoolConfig::new`] are always valid; this
    /// is for configurations that arrive deserialized.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if the pair repeats an
    /// asset or the pool account is the zero sentinel.
    pub fn validate(&self) -> Result<(), AmmError> {
        self.pair.validate()?;
        if self.pool_account.is_zero() {
            return Err(AmmError::InvalidConfiguration(
                "pool account must not be the zero account",
            ));
        }
        Ok(())
    }

    /// Returns the asset pair.
    #[must_use]
    pub const fn pair(&self) -> &AssetPair {
        &self.pair
    }

    /// Returns the account that holds the pool's reserves.
    #[must_use]
    pub const fn pool_account(&self) -> AccountId {
        self.pool_account
    }

    /// Returns the first-deposit share policy.
    #[must_use]
    pub const fn initial_share_policy(&self) -> InitialSharePolicy {
        self.initial_share_policy
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::AssetId;

    fn pair() -> AssetPair {
        let Ok(p) = AssetPair::new(AssetId::from_bytes([1u8; 32]), AssetId::from_bytes([2u8; 32]))
        else {
            panic!("expected valid pair");
        };
        p
    }

    #[test]
    fn valid_config() {
        let Ok(cfg) = PoolConfig::new(
            pair(),
            AccountId::from_bytes([3u8; 32]),
            InitialSharePolicy::ReserveSum,
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(*cfg.pair(), pair());
        assert_eq!(cfg.initial_share_policy(), InitialSharePolicy::ReserveSum);
    }

    #[test]
    fn zero_pool_account_rejected() {
        let result = PoolConfig::new(pair(), AccountId::zero(), InitialSharePolicy::default());
        assert!(matches!(result, Err(AmmError::InvalidConfiguration(_))));
    }

    #[test]
    fn default_policy_is_geometric_mean() {
        assert_eq!(InitialSharePolicy::default(), InitialSharePolicy::GeometricMean);
        assert_eq!(InitialSharePolicy::GeometricMean.to_string(), "geometric-mean");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_round_trip_and_revalidation() {
        let Ok(cfg) = PoolConfig::new(
            pair(),
            AccountId::from_bytes([3u8; 32]),
            InitialSharePolicy::ReserveSum,
        ) else {
            panic!("expected Ok");
        };
        let Ok(json) = serde_json::to_string(&cfg) else {
            panic!("serialize");
        };
        assert!(json.contains("reserve_sum"));
        let Ok(back) = serde_json::from_str::<PoolConfig>(&json) else {
            panic!("deserialize");
        };
        assert_eq!(back, cfg);
        assert!(back.validate().is_ok());
    }
}
