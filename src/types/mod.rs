//! Shared types for DRY compliance.

mod response;

pub use response::{ApiResponse, Created, MessageResponse, NoContent};
