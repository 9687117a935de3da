//! Client registry backends for hysteria-gate.
//!
//! The registry is a read-only lookup of provisioned tunnel clients keyed by
//! their opaque credential. Provisioning (creating and updating records) is
//! handled by an external process; this crate never writes.
//!
//! # Example
//!
//! ```
//! use gate_registry::{Client, ClientRegistry, MemoryRegistry};
//!
//! # async fn example() -> Result<(), gate_registry::RegistryError> {
//! let registry = MemoryRegistry::from_clients([Client {
//!     credential: "ewq321fds654fsd".into(),
//!     username: "alice".into(),
//!     max_conns: 2,
//!     ..Client::default()
//! }]);
//!
//! let client = registry.find_by_credential("ewq321fds654fsd").await?;
//! assert_eq!(client.username, "alice");
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod memory;
pub mod sql;
mod traits;

pub use client::Client;
pub use error::RegistryError;
pub use memory::MemoryRegistry;
pub use sql::{DatabaseType, SqlRegistry, SqlRegistryConfig};
pub use traits::ClientRegistry;
