//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.
//!
//! All services use Unit of Work pattern for centralized repository
//! access and transaction management.

mod auth_service;
pub mod container;
mod dashboard_service;
mod employee_service;
mod report_service;
mod work_record_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use auth_service::{AuthService, Authenticator, Claims, TokenResponse};
pub use dashboard_service::{
    AdminDashboard, DashboardAggregator, DashboardService, EmployeeDashboard,
};
pub use employee_service::{EmployeeManager, EmployeeService, ProvisionedEmployee};
pub use report_service::{ReportGenerator, ReportService};
pub use work_record_service::{WorkRecordManager, WorkRecordService};

// Parallel execution utilities
pub use container::parallel;
