//! Access enumerations.

/// Outcome of an authentication attempt.
pub mod auth_result;
