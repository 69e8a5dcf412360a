//! Employee CRUD handlers.

use axum::{
    extract::State,
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::{EmployeeIdPath, ValidatedJson};
use crate::api::AppState;
use crate::config::{
    EMPLOYEES_PATH, MSG_EMPLOYEE_ADDED, MSG_EMPLOYEE_DELETED, MSG_EMPLOYEE_UPDATED,
};
use crate::domain::{Employee, EmployeePayload};
use crate::errors::AppResult;
use crate::types::{Created, MessageResponse};

/// Create employee routes
pub fn employee_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_employees).post(create_employee))
        .route(
            "/:id",
            get(get_employee).put(update_employee).delete(delete_employee),
        )
}

/// Add a new employee
#[utoipa::path(
    post,
    path = "/api/employees",
    tag = "Employees",
    request_body = EmployeePayload,
    responses(
        (status = 201, description = "Employee added", body = MessageResponse,
            headers(("location" = String, description = "Path of the new employee"))),
        (status = 400, description = "Missing required fields", body = ErrorResponse)
    )
)]
pub async fn create_employee(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<EmployeePayload>,
) -> AppResult<Created<MessageResponse>> {
    let employee = state.employee_service.create_employee(payload).await?;

    Ok(Created::new(
        format!("{}/{}", EMPLOYEES_PATH, employee.id),
        MessageResponse::new(MSG_EMPLOYEE_ADDED),
    ))
}

/// List all employees
#[utoipa::path(
    get,
    path = "/api/employees",
    tag = "Employees",
    responses(
        (status = 200, description = "All stored employees", body = Vec<Employee>)
    )
)]
pub async fn list_employees(State(state): State<AppState>) -> AppResult<Json<Vec<Employee>>> {
    let employees = state.employee_service.list_employees().await?;
    Ok(Json(employees))
}

/// Get employee by ID
#[utoipa::path(
    get,
    path = "/api/employees/{id}",
    tag = "Employees",
    params(
        ("id" = i64, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee record", body = Employee),
        (status = 404, description = "Employee not found", body = ErrorResponse)
    )
)]
pub async fn get_employee(
    State(state): State<AppState>,
    EmployeeIdPath(id): EmployeeIdPath,
) -> AppResult<Json<Employee>> {
    let employee = state.employee_service.get_employee(id).await?;
    Ok(Json(employee))
}

/// Overwrite an employee's fields
#[utoipa::path(
    put,
    path = "/api/employees/{id}",
    tag = "Employees",
    params(
        ("id" = i64, Path, description = "Employee ID")
    ),
    request_body = EmployeePayload,
    responses(
        (status = 200, description = "Employee updated", body = MessageResponse),
        (status = 400, description = "Missing required fields", body = ErrorResponse)
    )
)]
pub async fn update_employee(
    State(state): State<AppState>,
    EmployeeIdPath(id): EmployeeIdPath,
    ValidatedJson(payload): ValidatedJson<EmployeePayload>,
) -> AppResult<Json<MessageResponse>> {
    state.employee_service.update_employee(id, payload).await?;
    Ok(Json(MessageResponse::new(MSG_EMPLOYEE_UPDATED)))
}

/// Delete an employee
#[utoipa::path(
    delete,
    path = "/api/employees/{id}",
    tag = "Employees",
    params(
        ("id" = i64, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee deleted", body = MessageResponse),
        (status = 404, description = "Employee not found", body = ErrorResponse)
    )
)]
pub async fn delete_employee(
    State(state): State<AppState>,
    EmployeeIdPath(id): EmployeeIdPath,
) -> AppResult<Json<MessageResponse>> {
    state.employee_service.delete_employee(id).await?;
    Ok(Json(MessageResponse::new(MSG_EMPLOYEE_DELETED)))
}
