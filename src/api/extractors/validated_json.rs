//! Validated JSON extractor - Combines deserialization with validation.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::errors::AppError;

/// Validated JSON extractor that rejects bodies failing [`Validate`].
///
/// Malformed JSON becomes a `BadRequest`; a body that parses but fails
/// validation becomes the uniform "Missing required fields" error.
///
/// # Example
///
/// ```rust,ignore
/// use payroll_api::api::extractors::ValidatedJson;
/// use payroll_api::domain::EmployeePayload;
///
/// async fn create(ValidatedJson(payload): ValidatedJson<EmployeePayload>) {
///     // name, baseSalary and role are present
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;

        value.validate().map_err(|e| {
            tracing::debug!("Validation failed: {}", format_validation_errors(&e));
            AppError::missing_fields()
        })?;

        Ok(ValidatedJson(value))
    }
}

/// Format validation errors into a readable string
fn format_validation_errors(errors: &validator::ValidationErrors) -> String {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is {}", field, e.code))
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}
