//! Session data structures.

/// The `(scope, holder)` pair a session binds.
pub mod session_key;

/// Cluster-wide ownership registry.
pub mod session_registry;
