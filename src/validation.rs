//! Field checks applied when `SKILLS_STRICT_VALIDATION` is on.

use crate::error::AppError;

/// The field must be present and not blank.
pub fn require_text(field: &str, value: Option<&str>) -> Result<(), AppError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(()),
        _ => Err(AppError::BadRequest(format!("{field} is required"))),
    }
}

/// If present, the field must not be blank.
pub fn check_text(field: &str, value: Option<&str>) -> Result<(), AppError> {
    match value {
        Some(v) if v.trim().is_empty() => {
            Err(AppError::BadRequest(format!("{field} must not be blank")))
        }
        _ => Ok(()),
    }
}

pub fn check_price(field: &str, value: f64) -> Result<(), AppError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(AppError::BadRequest(format!(
            "{field} must be a non-negative number"
        )))
    }
}
