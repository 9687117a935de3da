//! Shared state for all request handlers.

use std::sync::Arc;

use gate_access::{AccessCheck, OnlineStats};

/// Shared server state.
///
/// Both fields are read-only after startup; the registry's connection pool
/// and the counter's HTTP client are internally concurrency-safe, so no
/// locking happens at this layer.
#[derive(Clone)]
pub struct AppState {
    /// Access decision engine, behind the capability trait so the registry
    /// backend is swappable.
    pub checker: Arc<dyn AccessCheck>,
    /// Live connection counter.
    pub online: Arc<OnlineStats>,
}

impl AppState {
    pub fn new(checker: Arc<dyn AccessCheck>, online: OnlineStats) -> Self {
        Self {
            checker,
            online: Arc::new(online),
        }
    }
}
