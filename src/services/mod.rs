//! Application services layer - Use cases and business logic.
//!
//! Services validate input and orchestrate repository calls. They depend
//! on the repository trait, never on a concrete driver.

mod employee_service;

pub use employee_service::{EmployeeManager, EmployeeService};
