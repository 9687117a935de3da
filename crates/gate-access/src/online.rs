//! Live connection counts from the edge proxy's traffic-stats API.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::StatusCode;
use tracing::{debug, warn};

/// Per-request timeout for stats fetches. Upper-bounds the latency this
/// step can contribute to a decision.
pub const STATS_TIMEOUT: Duration = Duration::from_secs(5);

/// Fetches live per-username connection counts from the proxy's `/online`
/// endpoint.
///
/// Every failure mode (request build/perform, non-200 status, body decode)
/// degrades to a count of 0: an unreachable stats service must never deny
/// access through an error path. The degraded path is visible only in logs.
#[derive(Debug, Clone)]
pub struct OnlineStats {
    client: reqwest::Client,
    stats_port: u16,
    secret: String,
}

impl OnlineStats {
    /// Create a new counter with its own HTTP client.
    pub fn new(stats_port: u16, secret: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), stats_port, secret)
    }

    /// Create with a custom reqwest [`Client`](reqwest::Client) (for
    /// proxies, connection pool tuning, etc.).
    pub fn with_client(
        client: reqwest::Client,
        stats_port: u16,
        secret: impl Into<String>,
    ) -> Self {
        Self {
            client,
            stats_port,
            secret: secret.into(),
        }
    }

    /// Fetch the number of active connections for `username` as reported by
    /// the proxy at `host`.
    ///
    /// Infallible: any failure returns 0.
    pub async fn count_for(&self, host: &str, username: &str) -> i64 {
        let url = format!("http://{host}:{port}/online", port = self.stats_port);

        let resp = match self
            .client
            .get(&url)
            .header("Authorization", &self.secret)
            .timeout(STATS_TIMEOUT)
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(err) => {
                warn!(%url, error = %err, "stats request failed, assuming zero connections");
                return 0;
            }
        };

        if resp.status() != StatusCode::OK {
            warn!(%url, status = %resp.status(), "stats endpoint returned non-200, assuming zero connections");
            return 0;
        }

        let stats: HashMap<String, i64> = match resp.json().await {
            Ok(stats) => stats,
            Err(err) => {
                warn!(%url, error = %err, "failed to decode stats body, assuming zero connections");
                return 0;
            }
        };

        debug!(username, entries = stats.len(), "fetched live stats");
        Self::match_count(&stats, username)
    }

    /// Resolve `username` against a stats snapshot.
    ///
    /// Exact key match takes precedence. Otherwise all keys are compared
    /// after trimming and lowercasing, and the largest matching count wins
    /// so duplicate normalized keys resolve deterministically and
    /// conservatively. No match at all counts as 0.
    fn match_count(stats: &HashMap<String, i64>, username: &str) -> i64 {
        if let Some(&count) = stats.get(username) {
            return count;
        }

        let target = username.trim().to_lowercase();
        stats
            .iter()
            .filter(|(key, _)| key.trim().to_lowercase() == target)
            .map(|(_, &count)| count)
            .max()
            .unwrap_or(0)
    }

    /// Strip the port component from a peer address by splitting on the
    /// last `:`. An address without a colon is used as-is.
    pub fn peer_host(addr: &str) -> &str {
        match addr.rsplit_once(':') {
            Some((host, _port)) => host,
            None => addr,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(entries: &[(&str, i64)]) -> HashMap<String, i64> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect()
    }

    #[test]
    fn exact_match_takes_precedence() {
        let stats = stats(&[("alice", 3), ("Alice", 9)]);
        assert_eq!(OnlineStats::match_count(&stats, "alice"), 3);
    }

    #[test]
    fn normalized_match_trims_and_lowercases() {
        let stats = stats(&[("  Alice ", 4)]);
        assert_eq!(OnlineStats::match_count(&stats, "alice"), 4);
    }

    #[test]
    fn duplicate_normalized_keys_resolve_to_max_count() {
        let stats = stats(&[("Bob", 3), ("bob ", 9)]);
        assert_eq!(OnlineStats::match_count(&stats, "bob"), 9);
    }

    #[test]
    fn no_match_counts_as_zero() {
        let stats = stats(&[("alice", 3)]);
        assert_eq!(OnlineStats::match_count(&stats, "mallory"), 0);
    }

    #[test]
    fn empty_snapshot_counts_as_zero() {
        assert_eq!(OnlineStats::match_count(&HashMap::new(), "alice"), 0);
    }

    #[test]
    fn peer_host_strips_port() {
        assert_eq!(OnlineStats::peer_host("1.2.3.4:55000"), "1.2.3.4");
        assert_eq!(OnlineStats::peer_host("[::1]:9000"), "[::1]");
        assert_eq!(OnlineStats::peer_host("10.0.0.7"), "10.0.0.7");
    }
}
