//! Employee repository backed by the `Employees` table.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, NotSet,
    QueryFilter, Set, Statement,
};

use super::entities::employee::{self, ActiveModel, Entity as EmployeeEntity};
use crate::domain::{Employee, EmployeeId, NewEmployee};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Employee repository trait for dependency injection.
///
/// Each method issues a single statement. Write methods return the number
/// of rows affected and leave the interpretation to the caller.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Insert a new employee; the store assigns the id
    async fn create(&self, fields: NewEmployee) -> AppResult<Employee>;

    /// All employees in store order
    async fn list(&self) -> AppResult<Vec<Employee>>;

    /// Find employee by ID
    async fn find_by_id(&self, id: EmployeeId) -> AppResult<Option<Employee>>;

    /// Overwrite all mutable fields of the matching row
    async fn update(&self, id: EmployeeId, fields: NewEmployee) -> AppResult<u64>;

    /// Remove the matching row
    async fn delete(&self, id: EmployeeId) -> AppResult<u64>;

    /// Check that the store answers
    async fn ping(&self) -> AppResult<()>;
}

/// SeaORM implementation of EmployeeRepository
pub struct EmployeeStore {
    db: DatabaseConnection,
}

impl EmployeeStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn active_model(fields: NewEmployee) -> ActiveModel {
    ActiveModel {
        employee_id: NotSet,
        name: Set(fields.name),
        base_salary: Set(fields.base_salary),
        address: Set(fields.address),
        role: Set(fields.role),
    }
}

#[async_trait]
impl EmployeeRepository for EmployeeStore {
    async fn create(&self, fields: NewEmployee) -> AppResult<Employee> {
        let model = active_model(fields)
            .insert(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(Employee::from(model))
    }

    async fn list(&self) -> AppResult<Vec<Employee>> {
        let models = EmployeeEntity::find()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Employee::from).collect())
    }

    async fn find_by_id(&self, id: EmployeeId) -> AppResult<Option<Employee>> {
        let result = EmployeeEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Employee::from))
    }

    async fn update(&self, id: EmployeeId, fields: NewEmployee) -> AppResult<u64> {
        // update_many so a missing id is a zero-row no-op rather than an error
        let result = EmployeeEntity::update_many()
            .set(active_model(fields))
            .filter(employee::Column::EmployeeId.eq(id))
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected)
    }

    async fn delete(&self, id: EmployeeId) -> AppResult<u64> {
        let result = EmployeeEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected)
    }

    async fn ping(&self) -> AppResult<()> {
        self.db
            .execute(Statement::from_string(
                self.db.get_database_backend(),
                "SELECT 1".to_string(),
            ))
            .await?;
        Ok(())
    }
}
