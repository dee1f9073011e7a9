//! Payroll Tracker - a small payroll-tracking REST API
//!
//! Administrators manage employees and their hourly work records,
//! employees view their own hours and earnings, and both roles
//! generate immutable PDF reports over a date range.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities and the payroll calculation
//! - **pdf**: Deterministic tabular PDF rendering
//! - **services**: Application use cases and business logic
//! - **infra**: Infrastructure concerns (database, repositories, unit of work)
//! - **api**: HTTP handlers, middleware, and routes
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//!
//! # Create the bootstrap admin account
//! cargo run -- seed
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod pdf;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Password, User, UserRole};
pub use errors::{AppError, AppResult};
