//! Client registry trait.

use std::sync::Arc;

use async_trait::async_trait;

use crate::client::Client;
use crate::error::RegistryError;

/// Trait for client registry backends.
///
/// Implementations must be thread-safe (`Send + Sync`) as they are called
/// concurrently from all request handlers, and read-only.
#[async_trait]
pub trait ClientRegistry: Send + Sync {
    /// Look up the unique client whose credential equals `credential`
    /// (byte-exact, case-sensitive).
    ///
    /// # Returns
    /// * `Ok(Client)` - the matching record
    /// * `Err(RegistryError::NotFound)` - no such client
    /// * `Err(RegistryError::Backend)` - storage failure
    async fn find_by_credential(&self, credential: &str) -> Result<Client, RegistryError>;
}

/// Blanket implementation for `Arc<R>` where `R: ClientRegistry`.
#[async_trait]
impl<R: ClientRegistry + ?Sized> ClientRegistry for Arc<R> {
    #[inline]
    async fn find_by_credential(&self, credential: &str) -> Result<Client, RegistryError> {
        (**self).find_by_credential(credential).await
    }
}

/// Blanket implementation for `Box<R>` where `R: ClientRegistry`.
#[async_trait]
impl<R: ClientRegistry + ?Sized> ClientRegistry for Box<R> {
    #[inline]
    async fn find_by_credential(&self, credential: &str) -> Result<Client, RegistryError> {
        (**self).find_by_credential(credential).await
    }
}
