//! # bigchunk-core
//!
//! Unsigned arbitrary-precision integers stored as chunks in a configurable
//! base. Provides decimal decoding and encoding, addition, multiplication by
//! a single chunk, and schoolbook multiplication.
//!
//! Every magnitude remembers the [`Radix`] it was built under. Binary
//! operations refuse operands from different radixes instead of silently
//! reinterpreting their chunks.

pub mod add;
pub(crate) mod arith;
pub mod constants;
pub mod decimal;
pub mod error;
pub mod magnitude;
pub mod multiply;
pub mod normalize;
pub mod radix;

// Re-exports
pub use add::add;
pub use constants::{exit_codes, DEFAULT_BASE, DEFAULT_BASE_WIDTH, MIN_BASE};
pub use decimal::{from_decimal, from_decimal_in, to_decimal};
pub use error::{MagnitudeError, Result};
pub use magnitude::Magnitude;
pub use multiply::{multiply, multiply_by_chunk};
pub use radix::{current_base, current_base_width, current_radix, set_base, try_set_base, Radix};

/// Whether `value` is zero.
///
/// # Example
/// ```
/// let zero = bigchunk_core::from_decimal("000").unwrap();
/// assert!(bigchunk_core::is_zero(&zero));
/// ```
#[must_use]
pub fn is_zero(value: &Magnitude) -> bool {
    value.is_zero()
}
