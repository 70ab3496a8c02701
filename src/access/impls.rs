//! Implementation blocks for the access layer.

/// The connection actor.
pub mod access_connection;
