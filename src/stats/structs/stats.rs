use serde::{Deserialize, Serialize};

/// Point-in-time snapshot of all hub counters.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Stats {
    pub started: i64,
    pub connections_active: i64,
    pub nodes_active: i64,
    pub sessions_active: i64,
    pub sessions_evicted: i64,
    pub auth_success: i64,
    pub auth_failed: i64,
    pub packets_received: i64,
    pub packets_sent: i64,
    pub protocol_errors: i64,
    pub load_requests: i64,
    pub save_requests: i64,
    pub batch_save_requests: i64,
    pub leaderboard_requests: i64,
    pub top_position_requests: i64,
    pub heartbeats: i64,
    pub timeouts: i64,
    pub sync_requests_sent: i64,
    pub sync_responses_received: i64,
    pub cache_hits: i64,
    pub cache_misses: i64,
    pub rate_limited: i64,
    pub accounts: i64,
}
