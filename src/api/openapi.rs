//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::employee_handler;
use crate::domain::{Employee, EmployeePayload};
use crate::errors::ErrorResponse;
use crate::types::MessageResponse;

/// OpenAPI documentation for the Payroll API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Payroll Management System API",
        version = "0.1.0",
        description = "CRUD service for employee records",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://127.0.0.1:5000", description = "Local development server")
    ),
    paths(
        employee_handler::create_employee,
        employee_handler::list_employees,
        employee_handler::get_employee,
        employee_handler::update_employee,
        employee_handler::delete_employee,
    ),
    components(
        schemas(
            Employee,
            EmployeePayload,
            MessageResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Employees", description = "Employee record management")
    )
)]
pub struct ApiDoc;
