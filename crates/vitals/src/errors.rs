//! Error handling and exit codes.

use vitals_core::constants::exit_codes;
use vitals_core::VitalsError;

/// Map an application error to the process exit code.
///
/// Errors that did not originate as [`VitalsError`] are generic failures.
#[must_use]
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub fn exit_code(err: &anyhow::Error) -> u8 {
    let code = match err.downcast_ref::<VitalsError>() {
        Some(VitalsError::InvalidReading(_) | VitalsError::IncompleteBmi) => {
            exit_codes::ERROR_INVALID_READING
        }
        Some(VitalsError::Config(_)) => exit_codes::ERROR_CONFIG,
        Some(VitalsError::Terminal(_)) | None => exit_codes::ERROR_GENERIC,
    };
    code as u8
}
