//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

pub(crate) mod entities;
mod employee_repository;
mod report_repository;
mod user_repository;
mod work_record_repository;

pub use employee_repository::{EmployeeRepository, EmployeeStore};
pub use report_repository::{ReportRepository, ReportStore};
pub use user_repository::{UserRepository, UserStore};
pub use work_record_repository::{WorkRecordRepository, WorkRecordStore, WorkTotals};

pub(crate) use employee_repository::new_employee_model;
pub(crate) use user_repository::new_user_model;

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use employee_repository::MockEmployeeRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use report_repository::MockReportRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use work_record_repository::MockWorkRecordRepository;
