// src/lib.rs - Library interface for internal module access

pub mod constants;
pub mod data_analysis;
pub mod data_input;
pub mod error;
pub mod plot_framework;
pub mod plot_functions;

pub use data_input::log_data::{TelemetryRecord, TelemetryTable};
pub use data_input::log_parser::parse_log_file;
pub use error::TelemetryError;

// Crate version from Cargo.toml, overridden by VERGEN_GIT_SEMVER when the build sets it.
pub fn crate_version() -> &'static str {
    option_env!("VERGEN_GIT_SEMVER").unwrap_or(env!("CARGO_PKG_VERSION"))
}
