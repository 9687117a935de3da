//! The client record.

/// One provisioned tunnel client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Client {
    /// Internal numeric ID.
    pub id: i64,

    /// External chat/owner reference from the provisioning system.
    pub chat_id: i64,

    /// Human-readable username; join key for live connection counts.
    /// Not necessarily unique.
    pub username: String,

    /// Subscription identifier.
    pub sub_id: String,

    /// Opaque authentication secret, unique across all clients.
    pub credential: String,

    /// Subscription expiry as unix seconds.
    pub expire: i64,

    /// Maximum simultaneous connections (<= 0 = unlimited).
    pub max_conns: i64,
}

impl Client {
    /// Check whether `connections` breaches the connection ceiling.
    ///
    /// A non-positive ceiling never denies.
    #[inline]
    pub fn over_limit(&self, connections: i64) -> bool {
        self.max_conns > 0 && connections >= self.max_conns
    }

    /// Check whether the subscription has expired at `now` (unix seconds).
    #[inline]
    pub fn is_expired(&self, now: i64) -> bool {
        self.expire < now
    }
}
