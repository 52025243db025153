//! Arithmetic helpers for reserve and share calculations.
//!
//! - [`CheckedArithmetic`]: overflow-safe add/sub on [`Amount`](crate::domain::Amount)
//!   and [`Shares`](crate::domain::Shares) that map failures onto
//!   [`AmmError`](crate::error::AmmError) variants.
//! - [`mul_div`], [`mul_div_sum`], [`isqrt_product`]: products formed in
//!   256 bits and narrowed back to `u128`.

mod checked;
mod wide;

pub use checked::CheckedArithmetic;
pub use wide::{isqrt_product, mul_div, mul_div_sum, wide_product};
