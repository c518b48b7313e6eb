//! The `Magnitude` value type.
//!
//! A magnitude is an unsigned integer stored as chunks in base
//! [`Radix::base`], least-significant chunk first:
//!
//! ```text
//! value = chunks[0] * base^0 + chunks[1] * base^1 + ... + chunks[n-1] * base^(n-1)
//! ```
//!
//! Invariants held by every constructor and every arithmetic result:
//! - at least one chunk (zero is `[0]`),
//! - every chunk is below the base,
//! - the top chunk is nonzero unless it is the only one.

use std::fmt;
use std::str::FromStr;

use crate::decimal;
use crate::error::{MagnitudeError, Result};
use crate::normalize::{is_canonical, normalize};
use crate::radix::Radix;

/// Unsigned arbitrary-precision integer in chunked base-B form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Magnitude {
    chunks: Vec<u64>,
    radix: Radix,
}

/// Allocate an empty chunk buffer, reporting allocator failure as an error.
pub(crate) fn chunk_buffer(capacity: usize) -> Result<Vec<u64>> {
    let mut chunks = Vec::new();
    chunks.try_reserve_exact(capacity)?;
    Ok(chunks)
}

impl Magnitude {
    /// Wrap chunks produced by an algorithm that already upholds the invariants.
    pub(crate) fn from_raw(chunks: Vec<u64>, radix: Radix) -> Self {
        debug_assert!(is_canonical(&chunks));
        debug_assert!(chunks.iter().all(|&c| c < radix.base()));
        Self { chunks, radix }
    }

    /// Zero in the given radix.
    pub fn zero_in(radix: Radix) -> Result<Self> {
        let mut chunks = chunk_buffer(1)?;
        chunks.push(0);
        Ok(Self { chunks, radix })
    }

    /// Convert a native integer in the given radix.
    pub fn from_u64_in(mut value: u64, radix: Radix) -> Result<Self> {
        let base = radix.base();
        let mut chunks = chunk_buffer(1)?;
        loop {
            chunks.try_reserve(1)?;
            chunks.push(value % base);
            value /= base;
            if value == 0 {
                break;
            }
        }
        Ok(Self::from_raw(chunks, radix))
    }

    /// Build a magnitude from raw chunks, least-significant first.
    ///
    /// Every chunk must be below the base. Superfluous top zero chunks are
    /// trimmed.
    pub fn from_chunks(mut chunks: Vec<u64>, radix: Radix) -> Result<Self> {
        if chunks.is_empty() {
            return Err(MagnitudeError::InvalidInput(
                "empty chunk sequence".into(),
            ));
        }
        if let Some((index, chunk)) = chunks
            .iter()
            .enumerate()
            .find(|(_, c)| **c >= radix.base())
        {
            return Err(MagnitudeError::InvalidInput(format!(
                "chunk {chunk} at index {index} is not below base {}",
                radix.base()
            )));
        }
        normalize(&mut chunks);
        Ok(Self { chunks, radix })
    }

    /// Decode decimal text in the process radix.
    pub fn from_decimal(text: &str) -> Result<Self> {
        decimal::from_decimal(text)
    }

    /// Decode decimal text in the given radix.
    pub fn from_decimal_in(text: &str, radix: Radix) -> Result<Self> {
        decimal::from_decimal_in(text, radix)
    }

    /// Render as decimal text.
    #[must_use]
    pub fn to_decimal(&self) -> String {
        decimal::to_decimal(self)
    }

    /// Render as decimal text, reporting allocator failure as an error.
    pub fn try_to_decimal(&self) -> Result<String> {
        decimal::try_to_decimal(self)
    }

    /// Chunks, least-significant first.
    #[inline]
    #[must_use]
    pub fn chunks(&self) -> &[u64] {
        &self.chunks
    }

    /// Number of chunks, always at least one.
    #[inline]
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Radix this magnitude was built under.
    #[inline]
    #[must_use]
    pub fn radix(&self) -> Radix {
        self.radix
    }

    /// Whether this is zero, i.e. the single chunk `[0]`.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.chunks == [0]
    }

    /// Trim superfluous top zero chunks.
    pub fn normalize(&mut self) {
        normalize(&mut self.chunks);
    }

    /// Radix shared by both operands, or `RadixMismatch`.
    pub(crate) fn shared_radix(&self, other: &Self) -> Result<Radix> {
        if self.radix == other.radix {
            Ok(self.radix)
        } else {
            Err(MagnitudeError::RadixMismatch {
                left: self.radix.base(),
                right: other.radix.base(),
            })
        }
    }

    /// Multiply by `base^places` by inserting zero chunks at the low end.
    pub(crate) fn shifted(self, places: usize) -> Result<Self> {
        if places == 0 || self.is_zero() {
            return Ok(self);
        }
        let mut chunks = chunk_buffer(self.chunks.len() + places)?;
        chunks.resize(places, 0);
        chunks.extend_from_slice(&self.chunks);
        Ok(Self::from_raw(chunks, self.radix))
    }

    /// Sum of `self` and `other`.
    pub fn try_add(&self, other: &Self) -> Result<Self> {
        crate::add::add(self, other)
    }

    /// Product of `self` and a single chunk value `n < base`.
    pub fn try_mul_chunk(&self, n: u64) -> Result<Self> {
        crate::multiply::multiply_by_chunk(self, n)
    }

    /// Product of `self` and `other`.
    pub fn try_mul(&self, other: &Self) -> Result<Self> {
        crate::multiply::multiply(self, other)
    }
}

impl fmt::Display for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        decimal::write_decimal(self, f)
    }
}

impl FromStr for Magnitude {
    type Err = MagnitudeError;

    fn from_str(s: &str) -> Result<Self> {
        decimal::from_decimal(s)
    }
}
