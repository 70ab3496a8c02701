use serde::{Deserialize, Serialize};

/// Enumeration of all trackable statistics events.
///
/// Each variant represents a specific metric that can be incremented or set.
/// Used with `ScopeHub::update_stats()` to update counters.
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub enum StatsEvent {
    ConnectionsActive,
    NodesActive,
    SessionsActive,
    SessionsEvicted,
    AuthSuccess,
    AuthFailed,
    PacketsReceived,
    PacketsSent,
    ProtocolErrors,
    LoadRequests,
    SaveRequests,
    BatchSaveRequests,
    LeaderboardRequests,
    TopPositionRequests,
    Heartbeats,
    Timeouts,
    SyncRequestsSent,
    SyncResponsesReceived,
    CacheHits,
    CacheMisses,
    RateLimited,
    Accounts,
}
