use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AccessConfig {
    pub enabled: bool,
    pub bind_address: String,
    pub keep_alive: u64,
    pub client_request_timeout: u64,
    pub client_disconnect_timeout: u64,
    pub max_connections: u64,
    pub threads: u64,
    pub ssl: bool,
    pub ssl_key: String,
    pub ssl_cert: String,
    /// Seconds an unauthenticated connection may exist before it is closed.
    pub auth_timeout: u64,
    /// Minimum milliseconds an authentication attempt must take, so rejected
    /// logins cannot be distinguished by timing.
    pub auth_delay_minimum: u64,
    /// Interval in seconds announced to nodes for heartbeats.
    pub ping_interval: u64,
    /// Extra seconds past `ping_interval` before a silent node is closed.
    pub ping_grace: u64,
    /// Seconds between liveness sweeps over connected nodes.
    pub ping_sweep_interval: u64,
    /// Seconds to wait for a single server-to-node request (eviction flush,
    /// sync barrier replies).
    pub request_timeout: u64,
    /// Maximum nodes contacted concurrently during a sync barrier fan-out.
    pub sync_parallelism: u64,
    /// Seconds a cached holder entry stays valid.
    pub cache_ttl: u64,
    /// Maximum holder entries kept per scope cache.
    pub cache_max_entries: u64,
    /// Seconds between scope cache prune runs.
    pub cache_prune_interval: u64,
    pub throttle_max_count: u64,
    pub throttle_window: u64,
    pub throttle_reject_duration: u64,
    pub throttle_sweep_interval: u64,
}
