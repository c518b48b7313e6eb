//! Constants for radix configuration and process exit codes.

/// Default chunk base: each chunk holds seven decimal digits.
pub const DEFAULT_BASE: u64 = 10_000_000;

/// Decimal width of [`DEFAULT_BASE`].
pub const DEFAULT_BASE_WIDTH: usize = 7;

/// Smallest accepted base. Anything below cannot hold one decimal digit per chunk.
pub const MIN_BASE: u64 = 10;

/// Exit codes used by the `bigchunk` binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Rejected base configuration.
    pub const ERROR_CONFIG: i32 = 4;
    /// Malformed decimal input.
    pub const ERROR_INPUT: i32 = 5;
    /// Chunk multiplier not below the base.
    pub const ERROR_RANGE: i32 = 6;
}
