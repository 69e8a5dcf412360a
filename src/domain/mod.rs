//! Domain layer - Core business entities and logic
//!
//! This module contains the employee record and the rules a payload must
//! satisfy before it reaches the store.

pub mod employee;

pub use employee::{Employee, EmployeeId, EmployeePayload, NewEmployee};
