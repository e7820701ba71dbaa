use std::time::Duration;

/// Optional client-side rate limiting of printer API requests.
#[derive(Debug, Clone, Copy)]
pub struct RateLimitConfig {
    pub requests_per_second: u32,
    pub burst_size: u32,
}

/// Tuning knobs for the printer API client.
///
/// JSON queries and control actions are quick round trips; camera
/// snapshots are larger and slower, so they get their own longer timeout.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub query_timeout: Duration,
    pub action_timeout: Duration,
    pub snapshot_timeout: Duration,
    pub rate_limit: Option<RateLimitConfig>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            query_timeout: Duration::from_secs(4),
            action_timeout: Duration::from_secs(4),
            snapshot_timeout: Duration::from_secs(8),
            rate_limit: None,
        }
    }
}
