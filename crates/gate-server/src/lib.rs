//! HTTP server for hysteria-gate.
//!
//! This module exposes the server implementation for use by integration
//! tests and potential embedding scenarios.

pub mod cli;
mod error;
mod handler;
mod server;
mod state;

pub use cli::ServerArgs;
pub use error::ServerError;
pub use handler::{AuthRequest, AuthResponse};
pub use server::{router, run, run_with_shutdown, serve_with_shutdown};
pub use state::AppState;
pub use tokio_util::sync::CancellationToken;
