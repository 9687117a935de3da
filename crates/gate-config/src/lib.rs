//! Configuration loading and validation for hysteria-gate.
//!
//! Configuration is read once at startup from a JSON, YAML or TOML file
//! (selected by extension), optionally patched by CLI overrides, validated,
//! and then treated as immutable for the lifetime of the process.

mod cli;
mod loader;
mod types;
mod validate;

pub use cli::{apply_overrides, CliOverrides};
pub use loader::{load_config, ConfigError};
pub use types::{Config, DatabaseConfig, HttpServerConfig, HysteriaConfig, LoggingConfig};
pub use validate::validate_config;
