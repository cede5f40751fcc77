//! Presence checks applied when request DTOs become operation parameters.
//!
//! Only presence is checked. A supplied value, including an empty string, is stored as given.

use crate::server::error::AppError;

/// Requires a field to be present in the request body.
///
/// # Arguments
/// - `field` - Name of the field as it appears in the request body
/// - `value` - The value from the request DTO
///
/// # Returns
/// - `Ok(T)` - The supplied value, unchanged
/// - `Err(AppError::MissingField)` - The field was absent or `null`
pub fn require_field<T>(field: &'static str, value: Option<T>) -> Result<T, AppError> {
    value.ok_or(AppError::MissingField(field))
}
