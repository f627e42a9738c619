pub mod favorites;
pub mod funds;
pub mod stocks;
pub mod users;

use mfapi_core::validation::error_report;
use validator::Validate;

use crate::error::{AppError, AppResult};

/// Check a request payload against its schema, short-circuiting with a 400
/// (per-field messages under `data`) before any store access.
pub(crate) fn validate_payload<T: Validate>(payload: &T) -> AppResult<()> {
    payload
        .validate()
        .map_err(|errors| AppError::Validation(error_report(&errors)))
}
