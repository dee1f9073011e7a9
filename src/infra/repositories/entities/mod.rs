//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod employee;
pub mod report;
pub mod user;
pub mod work_record;

// Re-exports for repository convenience
#[allow(unused_imports)]
pub use employee::{ActiveModel as EmployeeActiveModel, Entity as EmployeeEntity};
#[allow(unused_imports)]
pub use report::{ActiveModel as ReportActiveModel, Entity as ReportEntity};
#[allow(unused_imports)]
pub use user::{ActiveModel as UserActiveModel, Entity as UserEntity};
#[allow(unused_imports)]
pub use work_record::{ActiveModel as WorkRecordActiveModel, Entity as WorkRecordEntity};
