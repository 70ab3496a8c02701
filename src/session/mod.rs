//! Session ownership.
//!
//! A session is the exclusive, single-writer binding of a `(scope, holder)`
//! pair to one node. The registry enforces the ownership invariant under a
//! per-key async lock, so the multi-step eviction sequence can never
//! interleave with a second load for the same key. It also maintains the
//! scope-to-owning-nodes index the sync barrier fans out over.

/// Session enumerations.
pub mod enums;

/// Session data structures.
pub mod structs;

/// Implementation blocks for session types.
pub mod impls;

/// Unit tests for ownership behaviour.
pub mod tests;
