//! Range checks applied to create/update inputs before they reach the store.

use crate::error::CoreError;

/// Validate that a value falls within `[min, max]`.
pub fn validate_range(value: f64, min: f64, max: f64, name: &str) -> Result<(), CoreError> {
    if !value.is_finite() || value < min || value > max {
        return Err(CoreError::Validation(format!(
            "{name} must be between {min} and {max}, got {value}"
        )));
    }
    Ok(())
}

/// Validate that a monetary amount or measurement is finite and not negative.
pub fn validate_non_negative(value: f64, name: &str) -> Result<(), CoreError> {
    if !value.is_finite() || value < 0.0 {
        return Err(CoreError::Validation(format!(
            "{name} must be a non-negative number, got {value}"
        )));
    }
    Ok(())
}

/// Validate that a required text field is not blank.
pub fn validate_required(value: &str, name: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{name} is required")));
    }
    Ok(())
}

/// Project progress is a whole percentage.
pub fn validate_progress(progress: u8) -> Result<(), CoreError> {
    validate_range(f64::from(progress), 0.0, 100.0, "progress")
}

/// Subcontractor ratings are on a five-point scale.
pub fn validate_rating(rating: f64) -> Result<(), CoreError> {
    validate_range(rating, 0.0, 5.0, "rating")
}
