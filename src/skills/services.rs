use super::dto::{CreateSkillRequest, UpdateSkillRequest};
use crate::{
    error::AppError,
    validation::{check_price, check_text, require_text},
};

pub fn validate_create(req: &CreateSkillRequest) -> Result<(), AppError> {
    require_text("title", req.title.as_deref())?;
    require_text("description", req.description.as_deref())?;
    require_text("location", req.location.as_deref())?;
    match req.price_per_hour {
        Some(p) => check_price("pricePerHour", p),
        None => Err(AppError::BadRequest("pricePerHour is required".into())),
    }
}

/// Supplied fields must satisfy the create rules; clearing a field is refused.
pub fn validate_update(req: &UpdateSkillRequest) -> Result<(), AppError> {
    check_text("title", supplied("title", &req.title)?.map(String::as_str))?;
    check_text("description", supplied("description", &req.description)?.map(String::as_str))?;
    check_text("location", supplied("location", &req.location)?.map(String::as_str))?;
    if let Some(p) = supplied("pricePerHour", &req.price_per_hour)? {
        check_price("pricePerHour", *p)?;
    }
    Ok(())
}

fn supplied<'a, T>(field: &str, value: &'a Option<Option<T>>) -> Result<Option<&'a T>, AppError> {
    match value {
        None => Ok(None),
        Some(None) => Err(AppError::BadRequest(format!("{field} cannot be cleared"))),
        Some(Some(v)) => Ok(Some(v)),
    }
}
