//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 5000;

// =============================================================================
// Database
// =============================================================================

/// Default database connection URL (SQLite file next to the binary)
pub const DEFAULT_DATABASE_URL: &str = "sqlite://payroll.db?mode=rwc";

/// Default upper bound on pooled database connections
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;

// =============================================================================
// HTTP Routes
// =============================================================================

/// Collection path for employee records
pub const EMPLOYEES_PATH: &str = "/api/employees";

/// Landing page text served at `/`
pub const WELCOME_MESSAGE: &str = "Welcome to the Payroll Management System API.";

// =============================================================================
// Response Messages
// =============================================================================

pub const MSG_EMPLOYEE_ADDED: &str = "Employee added successfully";
pub const MSG_EMPLOYEE_UPDATED: &str = "Employee updated successfully";
pub const MSG_EMPLOYEE_DELETED: &str = "Employee deleted successfully";

/// Returned whenever name, baseSalary or role is absent or empty
pub const MSG_MISSING_REQUIRED_FIELDS: &str = "Missing required fields";

pub const MSG_EMPLOYEE_NOT_FOUND: &str = "Employee not found";

pub const MSG_INVALID_EMPLOYEE_ID: &str = "Invalid employee ID";
