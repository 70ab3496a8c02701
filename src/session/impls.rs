//! Implementation blocks for session types.

pub mod session_key;
pub mod session_registry;
