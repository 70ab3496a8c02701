//! Scope data structures.

/// One named data partition.
pub mod scope;

/// TTL- and size-bounded holder cache.
pub mod scope_cache;

/// Registry of live scopes.
pub mod scope_registry;
