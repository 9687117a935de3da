//! Access verdict.

use gate_registry::Client;

/// Outcome of an access check.
///
/// Deny verdicts still carry the resolved client so the caller can echo
/// its username in the response.
#[derive(Debug, Clone)]
pub struct Verdict {
    /// Whether access is granted.
    pub allowed: bool,
    /// The resolved client record.
    pub client: Client,
}

impl Verdict {
    /// Create an allow verdict.
    #[inline]
    pub fn allow(client: Client) -> Self {
        Self {
            allowed: true,
            client,
        }
    }

    /// Create a deny verdict.
    #[inline]
    pub fn deny(client: Client) -> Self {
        Self {
            allowed: false,
            client,
        }
    }
}
