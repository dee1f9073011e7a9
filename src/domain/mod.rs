//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns:
//! users, employees, work records, reports, and the payroll
//! calculation itself.

pub mod employee;
pub mod password;
pub mod payroll;
pub mod report;
pub mod user;
pub mod work_record;

pub use employee::{Employee, EmployeeProfile, EmployeeResponse, NewEmployee};
pub use password::Password;
pub use payroll::{aggregate_earnings, amount_earned, EmployeeEarnings};
pub use report::{NewReport, Report, ReportDocument, ReportKind, ReportResponse, ReportRow};
pub use user::{NewUser, User, UserResponse, UserRole};
pub use work_record::{NewWorkRecord, WorkRecord, WorkRecordResponse, WorkRecordRow};
