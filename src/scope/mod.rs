//! Scopes: named data partitions of holder records.
//!
//! Each scope owns a bounded write-through cache over the storage
//! collaborator and answers the leaderboard and rank queries. The cross-node
//! sync barrier that must run before those queries lives with the hub, which
//! owns the session registry this module has no view of.

/// Scope enumerations.
pub mod enums;

/// Scope data structures.
pub mod structs;

/// Implementation blocks for scope types.
pub mod impls;

/// Unit tests for scope behaviour.
pub mod tests;
