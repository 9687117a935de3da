//! # hysteria-gate
//!
//! An authorization backend for Hysteria tunnel servers.
//!
//! The edge proxy POSTs a per-connection authentication callback to
//! `/auth`; the backend validates the client credential against a SQL
//! client registry, enforces subscription expiry and the per-client
//! connection ceiling (live counts are fetched from the proxy's
//! traffic-stats API), and answers allow/deny.
//!
//! ## Crates
//!
//! - [`gate_config`] - Configuration loading and validation
//! - [`gate_registry`] - Client registry backends (SQL, in-memory)
//! - [`gate_access`] - Access-decision engine and live connection counter
//! - [`gate_server`] - HTTP endpoint and server lifecycle

pub use gate_access as access;
pub use gate_config as config;
pub use gate_registry as registry;
pub use gate_server as server;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use gate_access::{AccessCheck, AccessGate, OnlineStats};
    pub use gate_config::{load_config, validate_config, Config};
    pub use gate_registry::{Client, ClientRegistry, MemoryRegistry, SqlRegistry};
    pub use gate_server::{run, run_with_shutdown, AppState, CancellationToken, ServerError};
}
