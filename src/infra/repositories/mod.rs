//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

mod employee_repository;
pub(crate) mod entities;
mod memory;

pub use employee_repository::{EmployeeRepository, EmployeeStore};
pub use memory::InMemoryEmployeeStore;

// Export mock for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use employee_repository::MockEmployeeRepository;
