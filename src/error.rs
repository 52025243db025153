//! Unified error types for the pool engine.
//!
//! Every fallible operation in the crate returns [`AmmError`].  Each
//! variant is terminal for the operation that raised it: the engine never
//! retries internally and never leaves reserves or shares half-updated
//! behind an error.

use thiserror::Error;

/// Errors raised by pool math, share accounting and the pool engine.
///
/// Variants carrying a `&'static str` name the quantity or step that
/// failed, so callers can distinguish reasons without allocating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum AmmError {
    /// The caller-supplied deadline is earlier than the current time.
    #[error("operation expired: deadline has passed")]
    Expired,

    /// An argument violated an operation's precondition.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    /// A divisor (usually a reserve or the share supply) was zero.
    #[error("division by zero")]
    DivisionByZero,

    /// An intermediate or final value exceeded the representable range.
    #[error("arithmetic overflow: {0}")]
    ArithmeticOverflow(&'static str),

    /// A subtraction would have produced a negative value.
    #[error("arithmetic underflow: {0}")]
    ArithmeticUnderflow(&'static str),

    /// A computed amount fell below the caller's minimum (or a derived
    /// amount exceeded the caller's desired maximum).
    #[error("slippage exceeded: {0}")]
    SlippageExceeded(&'static str),

    /// A deposit would mint zero shares.
    #[error("insufficient liquidity minted")]
    InsufficientLiquidityMinted,

    /// The account holds fewer shares than requested.
    #[error("insufficient shares")]
    InsufficientShares,

    /// A swap would pay out nothing.
    #[error("insufficient output amount")]
    InsufficientOutput,

    /// The observed balance change does not match the named swap input.
    #[error("invalid swap direction")]
    InvalidSwapDirection,

    /// An asset or share collaborator reported failure.
    #[error("transfer failed: {0}")]
    TransferFailed(&'static str),

    /// A pool configuration is inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// The caller is not allowed to perform an owner-gated action.
    #[error("unauthorized")]
    Unauthorized,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, AmmError>;
