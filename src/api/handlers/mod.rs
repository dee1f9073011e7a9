//! HTTP request handlers.

pub mod auth_handler;
pub mod dashboard_handler;
pub mod employee_handler;
pub mod portal_handler;
pub mod report_handler;
pub mod work_record_handler;

pub use auth_handler::{protected_auth_routes, public_auth_routes};
pub use dashboard_handler::dashboard_routes;
pub use employee_handler::employee_routes;
pub use portal_handler::portal_routes;
pub use report_handler::report_routes;
pub use work_record_handler::work_record_routes;
