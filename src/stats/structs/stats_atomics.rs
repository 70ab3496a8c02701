use std::sync::atomic::AtomicI64;

/// Atomic counters backing the statistics snapshot.
#[derive(Debug, Default)]
pub struct StatsAtomics {
    pub started: AtomicI64,
    pub connections_active: AtomicI64,
    pub nodes_active: AtomicI64,
    pub sessions_active: AtomicI64,
    pub sessions_evicted: AtomicI64,
    pub auth_success: AtomicI64,
    pub auth_failed: AtomicI64,
    pub packets_received: AtomicI64,
    pub packets_sent: AtomicI64,
    pub protocol_errors: AtomicI64,
    pub load_requests: AtomicI64,
    pub save_requests: AtomicI64,
    pub batch_save_requests: AtomicI64,
    pub leaderboard_requests: AtomicI64,
    pub top_position_requests: AtomicI64,
    pub heartbeats: AtomicI64,
    pub timeouts: AtomicI64,
    pub sync_requests_sent: AtomicI64,
    pub sync_responses_received: AtomicI64,
    pub cache_hits: AtomicI64,
    pub cache_misses: AtomicI64,
    pub rate_limited: AtomicI64,
    pub accounts: AtomicI64,
}
