//! Statistics tracking and monitoring module.
//!
//! Collects real-time metrics on hub activity including connected nodes,
//! session ownership, packet traffic, cache behaviour and authentication
//! outcomes. Counters are updated atomically and exposed as a snapshot
//! through the REST API and the periodic console line.

/// Statistics event types.
pub mod enums;

/// Statistics data structures.
pub mod structs;

/// Statistics update/snapshot implementations.
pub mod impls;

/// Unit tests for statistics handling.
pub mod tests;
