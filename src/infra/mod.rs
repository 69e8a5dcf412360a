//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connections and migrations
//! - Employee repositories (SeaORM and in-memory)

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{EmployeeRepository, EmployeeStore, InMemoryEmployeeStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockEmployeeRepository;
