//! Access check trait.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::AccessError;
use crate::verdict::Verdict;

/// Capability interface consumed by the request handler.
///
/// Handlers depend on this trait rather than a concrete registry type so
/// the storage backend is swappable without touching handler logic.
#[async_trait]
pub trait AccessCheck: Send + Sync {
    /// Decide whether the client identified by `credential` may connect,
    /// given `connections` currently active connections.
    ///
    /// # Returns
    /// * `Ok(Verdict)` - a decision was made (allow or deny)
    /// * `Err(AccessError::NotFound)` - no such client
    /// * `Err(AccessError::Registry)` - registry failure
    async fn check_access(
        &self,
        credential: &str,
        connections: i64,
    ) -> Result<Verdict, AccessError>;
}

/// Blanket implementation for `Arc<C>` where `C: AccessCheck`.
#[async_trait]
impl<C: AccessCheck + ?Sized> AccessCheck for Arc<C> {
    #[inline]
    async fn check_access(
        &self,
        credential: &str,
        connections: i64,
    ) -> Result<Verdict, AccessError> {
        (**self).check_access(credential, connections).await
    }
}

/// Blanket implementation for `Box<C>` where `C: AccessCheck`.
#[async_trait]
impl<C: AccessCheck + ?Sized> AccessCheck for Box<C> {
    #[inline]
    async fn check_access(
        &self,
        credential: &str,
        connections: i64,
    ) -> Result<Verdict, AccessError> {
        (**self).check_access(credential, connections).await
    }
}
