//! Custom request extractors.

mod employee_id;
mod validated_json;

pub use employee_id::EmployeeIdPath;
pub use validated_json::ValidatedJson;
