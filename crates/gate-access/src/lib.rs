//! Access-decision protocol for hysteria-gate.
//!
//! Combines a registry lookup, a subscription-expiry check and the
//! per-client connection ceiling into an allow/deny verdict, and fetches
//! live per-username connection counts from the edge proxy's traffic-stats
//! endpoint.
//!
//! # Example
//!
//! ```
//! use gate_access::{AccessCheck, AccessGate};
//! use gate_registry::{Client, MemoryRegistry};
//!
//! # async fn example() -> Result<(), gate_access::AccessError> {
//! let registry = MemoryRegistry::from_clients([Client {
//!     credential: "abc".into(),
//!     username: "alice".into(),
//!     expire: i64::MAX,
//!     ..Client::default()
//! }]);
//!
//! let gate = AccessGate::new(registry);
//! let verdict = gate.check_access("abc", 0).await?;
//! assert!(verdict.allowed);
//! # Ok(())
//! # }
//! ```

mod error;
mod gate;
mod online;
mod traits;
mod verdict;

pub use error::AccessError;
pub use gate::AccessGate;
pub use online::{OnlineStats, STATS_TIMEOUT};
pub use traits::AccessCheck;
pub use verdict::Verdict;
