//! The node-facing access service.
//!
//! Accepts WebSocket connections, walks each through the
//! Hello → Auth → Ready handshake, feeds inbound frames to the talker and
//! dispatches authenticated requests to worker tasks. Also home to the
//! liveness sweep that closes silent nodes and releases their sessions.

/// Access enumerations.
pub mod enums;

/// Access data structures.
pub mod structs;

/// Implementation blocks (the connection actor).
pub mod impls;

/// Service bootstrap, authentication and sweeps.
#[allow(clippy::module_inception)]
pub mod access;

/// Unit tests for the access layer.
pub mod tests;
