//! The access-decision engine.

use std::time::{SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use gate_registry::ClientRegistry;
use tracing::debug;

use crate::error::AccessError;
use crate::traits::AccessCheck;
use crate::verdict::Verdict;

/// Decision engine combining registry lookup, expiry and the connection
/// ceiling.
///
/// The ceiling is evaluated before expiry so the order of deny reasons is
/// deterministic; both gates must pass for an allow.
#[derive(Debug)]
pub struct AccessGate<R> {
    registry: R,
}

impl<R> AccessGate<R> {
    /// Create a new gate over a registry backend.
    pub fn new(registry: R) -> Self {
        Self { registry }
    }
}

/// Current unix timestamp.
#[inline]
fn now_unix() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[async_trait]
impl<R: ClientRegistry> AccessCheck for AccessGate<R> {
    async fn check_access(
        &self,
        credential: &str,
        connections: i64,
    ) -> Result<Verdict, AccessError> {
        let client = self.registry.find_by_credential(credential).await?;

        if client.over_limit(connections) {
            debug!(
                username = %client.username,
                connections,
                max_conns = client.max_conns,
                "deny: connection ceiling reached"
            );
            return Ok(Verdict::deny(client));
        }

        if client.is_expired(now_unix()) {
            debug!(
                username = %client.username,
                expire = client.expire,
                "deny: subscription expired"
            );
            return Ok(Verdict::deny(client));
        }

        Ok(Verdict::allow(client))
    }
}
