//! Security primitives.
//!
//! Password hashing/verification for node accounts, the timing-attack
//! imitation delay used on rejected logins, identifier validation and the
//! per-remote-address rate limiter guarding the access server ingress.

/// Hashing, verification and validation functions.
#[allow(clippy::module_inception)]
pub mod security;

/// Security data structures.
pub mod structs;

/// Implementation blocks for security types.
pub mod impls;

/// Unit tests for security primitives.
pub mod tests;
