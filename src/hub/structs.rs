//! Hub data structures.

/// The central service struct.
pub mod scope_hub;
