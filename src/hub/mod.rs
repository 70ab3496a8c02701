//! The central hub.
//!
//! `ScopeHub` wires every collaborator together: configuration, storage,
//! accounts, scopes, sessions, nodes, the rate limiter and statistics. The
//! cross-cutting flows live here: the sync barrier run before leaderboard
//! queries, the eviction handshake behind session transfers, and node
//! disconnect cleanup.

/// Hub data structures.
pub mod structs;

/// Implementation blocks for the hub.
pub mod impls;
