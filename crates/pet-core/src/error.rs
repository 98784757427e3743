//! Shared error type.
//!
//! Sub-crates define their own error enums and wrap `PetError` as one variant
//! where a configuration problem can surface through them.

use thiserror::Error;

/// The top-level error type for `pet-core`.
#[derive(Debug, Error)]
pub enum PetError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("value {value} for `{field}` is outside [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min:   f64,
        max:   f64,
    },
}

/// Shorthand result type for `pet-core`.
pub type PetResult<T> = Result<T, PetError>;

/// Check that `value` is finite and inside `[min, max]`.
pub fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> PetResult<f64> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(PetError::OutOfRange { field, value, min, max })
    }
}
