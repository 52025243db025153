//! In-memory collaborators for the pool engine.
//!
//! These implement the [`traits`](crate::traits) seams without any external
//! system, for simulations, demos and tests.

mod asset;
mod clock;
mod share;

pub use asset::InMemoryAssetLedger;
pub use clock::{ManualClock, SystemClock};
pub use share::InMemoryShareLedger;
