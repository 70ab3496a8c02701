//! Client enumerations.

/// Failures surfaced by client calls.
pub mod client_error;
