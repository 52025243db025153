//! Pool configuration.
//!
//! [`PoolConfig`] is the declarative blueprint of a pool: which two assets
//! it trades, which account holds its reserves, and which
//! [`InitialSharePolicy`] prices the first deposit.

mod pool_config;

pub use pool_config::{InitialSharePolicy, PoolConfig};
