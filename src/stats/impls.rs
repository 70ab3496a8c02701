//! Statistics update/snapshot implementations.

/// Stats methods on the central hub struct.
pub mod scope_hub;
