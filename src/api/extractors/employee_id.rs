//! Path extractor for `/api/employees/{id}`.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::config::MSG_INVALID_EMPLOYEE_ID;
use crate::domain::EmployeeId;
use crate::errors::AppError;

/// Integer employee id taken from the path.
///
/// Non-integer segments are rejected with a JSON 400 instead of axum's
/// plain-text rejection.
pub struct EmployeeIdPath(pub EmployeeId);

#[async_trait]
impl<S> FromRequestParts<S> for EmployeeIdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<EmployeeId>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                tracing::debug!("Rejected employee id: {}", e.body_text());
                AppError::bad_request(MSG_INVALID_EMPLOYEE_ID)
            })?;

        Ok(EmployeeIdPath(id))
    }
}
