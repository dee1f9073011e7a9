//! Application configuration: environment-driven settings plus the
//! fixed payroll and security constants.

mod constants;
mod settings;

pub use constants::*;
pub use settings::Config;
