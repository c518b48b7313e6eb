//! Error handling and exit codes.

use bigchunk_core::exit_codes;
use bigchunk_core::MagnitudeError;

/// Exit code for a magnitude error.
pub fn handle_error(err: &MagnitudeError) -> i32 {
    match err {
        MagnitudeError::InvalidInput(_) | MagnitudeError::RadixMismatch { .. } => {
            exit_codes::ERROR_INPUT
        }
        MagnitudeError::OutOfRange { .. } => exit_codes::ERROR_RANGE,
        MagnitudeError::ConfigRejected(_) | MagnitudeError::NonDecimalBase(_) => {
            exit_codes::ERROR_CONFIG
        }
        MagnitudeError::Allocation(_) => exit_codes::ERROR_GENERIC,
    }
}

/// Exit code for any application error.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<MagnitudeError>())
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}
