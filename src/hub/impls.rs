//! Implementation blocks for the hub.

/// Construction and boot wiring.
pub mod scope_hub;

/// Session acquisition and the eviction handshake.
pub mod scope_hub_sessions;

/// The cross-node sync barrier.
pub mod scope_hub_sync;

/// Leaderboard and rank queries behind the barrier.
pub mod scope_hub_leaderboard;
