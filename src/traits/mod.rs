//! Collaborator seams of the pool engine.
//!
//! The engine owns the pool's accounting; everything else is reached
//! through these traits:
//!
//! - [`AssetLedger`]: the two underlying asset contracts.
//! - [`ShareLedger`]: the ledger of pool shares.
//! - [`Clock`]: the time source used for deadlines.

mod asset_ledger;
mod clock;
mod share_ledger;

pub use asset_ledger::AssetLedger;
pub use clock::Clock;
pub use share_ledger::ShareLedger;
