//! Employee domain entity and request payloads.

use serde::{de, de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::errors::{AppError, AppResult};

/// Store-generated employee identifier.
pub type EmployeeId = i64;

/// Employee record as stored and served.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Employee {
    /// Unique identifier assigned by the store
    #[serde(rename = "employeeID")]
    #[schema(example = 1)]
    pub id: EmployeeId,
    #[schema(example = "Ana")]
    pub name: String,
    #[serde(rename = "baseSalary")]
    #[schema(example = 50000.0)]
    pub base_salary: f64,
    #[schema(example = "1 Main St")]
    pub address: Option<String>,
    #[schema(example = "Engineer")]
    pub role: String,
}

impl Employee {
    /// Attach a store-assigned id to validated field values.
    pub fn from_new(id: EmployeeId, fields: NewEmployee) -> Self {
        Self {
            id,
            name: fields.name,
            base_salary: fields.base_salary,
            address: fields.address,
            role: fields.role,
        }
    }
}

/// Incoming body for create and update.
///
/// Every field is optional on the wire so that absence is reported as a
/// validation failure rather than a deserialization error. Falsy JSON
/// values (`null`, `false`, `0`, `""`, `[]`, `{}`) in the required fields
/// are read as absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePayload {
    #[serde(default, deserialize_with = "falsy_as_none")]
    #[validate(required, length(min = 1))]
    #[schema(example = "Ana")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "falsy_as_none")]
    #[validate(required, custom(function = "non_zero_salary"))]
    #[schema(example = 50000.0)]
    pub base_salary: Option<f64>,
    #[schema(example = "1 Main St")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "falsy_as_none")]
    #[validate(required, length(min = 1))]
    #[schema(example = "Engineer")]
    pub role: Option<String>,
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}

fn falsy_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(value) if !is_falsy(&value) => serde_json::from_value(value)
            .map(Some)
            .map_err(de::Error::custom),
        _ => Ok(None),
    }
}

/// A zero salary counts as missing.
fn non_zero_salary(salary: f64) -> Result<(), ValidationError> {
    if salary == 0.0 {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

/// Field values that passed validation, ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEmployee {
    pub name: String,
    pub base_salary: f64,
    pub address: Option<String>,
    pub role: String,
}

impl TryFrom<EmployeePayload> for NewEmployee {
    type Error = AppError;

    fn try_from(payload: EmployeePayload) -> AppResult<Self> {
        if let Err(errors) = payload.validate() {
            tracing::debug!(
                fields = ?errors.field_errors().keys().collect::<Vec<_>>(),
                "Rejected employee payload"
            );
            return Err(AppError::missing_fields());
        }

        // validate() guarantees the required fields are present
        Ok(Self {
            name: payload.name.unwrap_or_default(),
            base_salary: payload.base_salary.unwrap_or_default(),
            address: payload.address,
            role: payload.role.unwrap_or_default(),
        })
    }
}
