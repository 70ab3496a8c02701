//! Session enumerations.

/// Outcome of an ownership acquisition.
pub mod acquire_outcome;
