//! Scope enumerations.

/// Failures surfaced by scope operations.
pub mod scope_error;
