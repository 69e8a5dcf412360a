//! In-process employee store.
//!
//! Mirrors the table semantics (monotonic ids, zero-row no-ops) without a
//! database, so the HTTP layer can be exercised end to end in tests.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::EmployeeRepository;
use crate::domain::{Employee, EmployeeId, NewEmployee};
use crate::errors::AppResult;

#[derive(Default)]
struct Table {
    last_id: EmployeeId,
    rows: BTreeMap<EmployeeId, Employee>,
}

/// EmployeeRepository kept in memory
#[derive(Default)]
pub struct InMemoryEmployeeStore {
    table: RwLock<Table>,
}

impl InMemoryEmployeeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeStore {
    async fn create(&self, fields: NewEmployee) -> AppResult<Employee> {
        let mut table = self.table.write().await;
        table.last_id += 1;
        let employee = Employee::from_new(table.last_id, fields);
        table.rows.insert(employee.id, employee.clone());
        Ok(employee)
    }

    async fn list(&self) -> AppResult<Vec<Employee>> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: EmployeeId) -> AppResult<Option<Employee>> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn update(&self, id: EmployeeId, fields: NewEmployee) -> AppResult<u64> {
        let mut table = self.table.write().await;
        match table.rows.get_mut(&id) {
            Some(row) => {
                *row = Employee::from_new(id, fields);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: EmployeeId) -> AppResult<u64> {
        let removed = self.table.write().await.rows.remove(&id);
        Ok(u64::from(removed.is_some()))
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}
