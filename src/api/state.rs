//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::infra::{Database, EmployeeRepository, EmployeeStore};
use crate::services::{EmployeeManager, EmployeeService};

/// Application state shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Employee service
    pub employee_service: Arc<dyn EmployeeService>,
    /// Backing store, kept for health checks
    pub store: Arc<dyn EmployeeRepository>,
}

impl AppState {
    /// Build state over any repository implementation.
    pub fn new(store: Arc<dyn EmployeeRepository>) -> Self {
        let employee_service = Arc::new(EmployeeManager::new(store.clone()));
        Self {
            employee_service,
            store,
        }
    }

    /// Build state over the SeaORM store for a connected database.
    pub fn from_database(database: &Database) -> Self {
        Self::new(Arc::new(EmployeeStore::new(database.get_connection())))
    }
}
