//! Error type shared by every magnitude operation.

use std::collections::TryReserveError;

/// Error type for magnitude construction, arithmetic and radix configuration.
#[derive(Debug, thiserror::Error)]
pub enum MagnitudeError {
    /// Malformed decimal text.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Chunk multiplier is not below the base.
    #[error("chunk multiplier {scalar} out of range for base {base}")]
    OutOfRange {
        /// The rejected multiplier.
        scalar: u64,
        /// Base of the magnitude being multiplied.
        base: u64,
    },

    /// Base cannot hold a single decimal digit per chunk.
    #[error("base {0} rejected: must be at least 10")]
    ConfigRejected(u64),

    /// Base is not a power of ten where decimal text must stay exact.
    #[error("base {0} is not a power of ten: decimal text would not match the value")]
    NonDecimalBase(u64),

    /// Operands were built under different bases.
    #[error("radix mismatch: base {left} vs base {right}")]
    RadixMismatch {
        /// Base of the left operand.
        left: u64,
        /// Base of the right operand.
        right: u64,
    },

    /// The allocator could not provide storage for a result.
    #[error("allocation failure: {0}")]
    Allocation(#[from] TryReserveError),
}

/// Result alias for magnitude operations.
pub type Result<T> = std::result::Result<T, MagnitudeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = MagnitudeError::InvalidInput("empty string".into());
        assert_eq!(err.to_string(), "invalid input: empty string");

        let err = MagnitudeError::OutOfRange {
            scalar: 10_000_000,
            base: 10_000_000,
        };
        assert_eq!(
            err.to_string(),
            "chunk multiplier 10000000 out of range for base 10000000"
        );

        let err = MagnitudeError::ConfigRejected(1);
        assert_eq!(err.to_string(), "base 1 rejected: must be at least 10");

        let err = MagnitudeError::NonDecimalBase(999);
        assert!(err.to_string().starts_with("base 999 is not a power of ten"));
    }

    #[test]
    fn allocation_error_converts() {
        let reserve = Vec::<u64>::new().try_reserve_exact(usize::MAX).unwrap_err();
        let err: MagnitudeError = reserve.into();
        assert!(matches!(err, MagnitudeError::Allocation(_)));
    }
}
