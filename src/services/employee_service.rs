//! Employee service - Validates payloads and drives the repository.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Employee, EmployeeId, EmployeePayload, NewEmployee};
use crate::errors::{AppResult, OptionExt};
use crate::infra::EmployeeRepository;

/// Employee service trait for dependency injection.
#[async_trait]
pub trait EmployeeService: Send + Sync {
    /// Validate and insert a new employee, returning the stored record
    async fn create_employee(&self, payload: EmployeePayload) -> AppResult<Employee>;

    /// List every stored employee
    async fn list_employees(&self) -> AppResult<Vec<Employee>>;

    /// Get employee by ID
    async fn get_employee(&self, id: EmployeeId) -> AppResult<Employee>;

    /// Validate and overwrite all fields of an employee.
    ///
    /// Does not check that the employee exists; updating a missing id
    /// succeeds without touching the store.
    async fn update_employee(&self, id: EmployeeId, payload: EmployeePayload) -> AppResult<()>;

    /// Delete an existing employee
    async fn delete_employee(&self, id: EmployeeId) -> AppResult<()>;
}

/// Concrete implementation of EmployeeService over a repository.
pub struct EmployeeManager {
    repo: Arc<dyn EmployeeRepository>,
}

impl EmployeeManager {
    /// Create new employee service instance
    pub fn new(repo: Arc<dyn EmployeeRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl EmployeeService for EmployeeManager {
    async fn create_employee(&self, payload: EmployeePayload) -> AppResult<Employee> {
        let fields = NewEmployee::try_from(payload)?;
        let employee = self.repo.create(fields).await?;
        tracing::info!(employee_id = employee.id, "Employee created");
        Ok(employee)
    }

    async fn list_employees(&self) -> AppResult<Vec<Employee>> {
        self.repo.list().await
    }

    async fn get_employee(&self, id: EmployeeId) -> AppResult<Employee> {
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn update_employee(&self, id: EmployeeId, payload: EmployeePayload) -> AppResult<()> {
        let fields = NewEmployee::try_from(payload)?;
        let rows = self.repo.update(id, fields).await?;
        if rows == 0 {
            tracing::warn!(employee_id = id, "Update matched no employee");
        }
        Ok(())
    }

    async fn delete_employee(&self, id: EmployeeId) -> AppResult<()> {
        self.repo.find_by_id(id).await?.ok_or_not_found()?;
        self.repo.delete(id).await?;
        tracing::info!(employee_id = id, "Employee deleted");
        Ok(())
    }
}
