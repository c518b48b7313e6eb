//! Radix (chunk base) configuration.
//!
//! A [`Radix`] is an immutable value: the base every chunk is reduced by, and
//! the number of decimal digits one chunk holds. Each [`Magnitude`] records
//! the radix it was built under, so changing the process-wide radix never
//! reinterprets values that already exist.
//!
//! The process-wide radix is only consulted by constructors that do not take
//! one explicitly ([`Magnitude::from_decimal`] and friends).
//!
//! [`Magnitude`]: crate::magnitude::Magnitude
//! [`Magnitude::from_decimal`]: crate::magnitude::Magnitude::from_decimal

use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::constants::{DEFAULT_BASE, DEFAULT_BASE_WIDTH, MIN_BASE};
use crate::error::{MagnitudeError, Result};

/// Chunk base together with its decimal width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Radix {
    base: u64,
    width: usize,
}

impl Radix {
    /// The radix every process starts with.
    pub const DEFAULT: Self = Self {
        base: DEFAULT_BASE,
        width: DEFAULT_BASE_WIDTH,
    };

    /// Build a radix for `base`.
    ///
    /// Bases below 10 are rejected: their decimal width is zero, so a chunk
    /// could not carry even one digit of decimal input.
    pub fn new(base: u64) -> Result<Self> {
        if base < MIN_BASE {
            return Err(MagnitudeError::ConfigRejected(base));
        }
        Ok(Self {
            base,
            width: base.ilog10() as usize,
        })
    }

    /// The numeric base.
    #[inline]
    #[must_use]
    pub const fn base(self) -> u64 {
        self.base
    }

    /// Decimal digits held by one chunk, `floor(log10(base))`.
    #[inline]
    #[must_use]
    pub const fn width(self) -> usize {
        self.width
    }

    /// Whether the base is an exact power of ten.
    ///
    /// Only then does the chunk sequence denote the same number as the
    /// decimal text it was decoded from.
    #[must_use]
    pub fn is_decimal(self) -> bool {
        u32::try_from(self.width)
            .ok()
            .and_then(|w| 10u64.checked_pow(w))
            .is_some_and(|p| p == self.base)
    }
}

impl Default for Radix {
    fn default() -> Self {
        Self::DEFAULT
    }
}

static ACTIVE: RwLock<Radix> = parking_lot::const_rwlock(Radix::DEFAULT);

/// The process-wide radix.
#[must_use]
pub fn current_radix() -> Radix {
    *ACTIVE.read()
}

/// The process-wide base.
#[must_use]
pub fn current_base() -> u64 {
    current_radix().base()
}

/// Decimal width of the process-wide base.
#[must_use]
pub fn current_base_width() -> usize {
    current_radix().width()
}

/// Replace the process-wide radix, returning the previous one.
///
/// A rejected base leaves the current radix untouched. A base that is not a
/// power of ten is accepted with a warning: arithmetic stays exact in that
/// base, but decimal text no longer denotes the chunk value.
pub fn try_set_base(base: u64) -> Result<Radix> {
    let radix = match Radix::new(base) {
        Ok(radix) => radix,
        Err(err) => {
            warn!(base, "rejected base configuration");
            return Err(err);
        }
    };
    if !radix.is_decimal() {
        warn!(
            base,
            "base is not a power of ten: decimal text will not match chunk values"
        );
    }
    let previous = std::mem::replace(&mut *ACTIVE.write(), radix);
    debug!(
        base,
        width = radix.width(),
        previous = previous.base(),
        "process radix changed"
    );
    Ok(previous)
}

/// Replace the process-wide radix. Returns `false` (and changes nothing) if
/// the base is rejected.
///
/// Bases 0 through 9 are rejected, not only 0 and 1: below 10 the decimal
/// width is zero, so a chunk cannot hold even one decimal digit and decoding
/// could not group digits at all.
pub fn set_base(base: u64) -> bool {
    try_set_base(base).is_ok()
}
