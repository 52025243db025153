//! Chain-agnostic identities for participants and asset contracts.

use core::fmt;

/// Identity of a participant: a depositor, a swap recipient, the pool
/// itself or the owner of an asset contract.
///
/// Wraps a fixed-size `[u8; 32]`.  All byte sequences are valid, so
/// construction is infallible.
///
/// # Examples
///
/// ```
/// use hydra_cpmm::domain::AccountId;
///
/// let alice = AccountId::from_bytes([1u8; 32]);
/// assert_eq!(alice.as_bytes(), [1u8; 32]);
/// assert!(!alice.is_zero());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AccountId([u8; 32]);

impl AccountId {
    /// Creates an `AccountId` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Returns the all-zero account, used as a "no account" sentinel.
    #[must_use]
    pub const fn zero() -> Self {
        Self([0u8; 32])
    }

    /// Returns `true` for the all-zero sentinel.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_short_hex(f, &self.0)
    }
}

/// Identity of a fungible asset contract (asset "A" or "B" of a pool).
///
/// # Examples
///
/// ```
/// use hydra_cpmm::domain::AssetId;
///
/// let usdc = AssetId::from_bytes([0xAA; 32]);
/// assert_eq!(usdc.to_string(), "0xaaaaaaaa…");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssetId([u8; 32]);

impl AssetId {
    /// Creates an `AssetId` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_short_hex(f, &self.0)
    }
}

// First four bytes are enough to tell identities apart in logs.
fn write_short_hex(f: &mut fmt::Formatter<'_>, bytes: &[u8; 32]) -> fmt::Result {
    write!(f, "0x")?;
    for b in &bytes[..4] {
        write!(f, "{b:02x}")?;
    }
    write!(f, "…")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_round_trip() {
        let bytes = [42u8; 32];
        assert_eq!(AccountId::from_bytes(bytes).as_bytes(), bytes);
    }

    #[test]
    fn zero_sentinel() {
        assert!(AccountId::zero().is_zero());
        let mut bytes = [0u8; 32];
        bytes[31] = 1;
        assert!(!AccountId::from_bytes(bytes).is_zero());
    }

    #[test]
    fn ordering_is_lexicographic() {
        let lo = AssetId::from_bytes([0u8; 32]);
        let hi = AssetId::from_bytes([1u8; 32]);
        assert!(lo < hi);
    }

    #[test]
    fn display_is_short_hex() {
        let id = AccountId::from_bytes([0x0f; 32]);
        assert_eq!(id.to_string(), "0x0f0f0f0f…");
    }
}
