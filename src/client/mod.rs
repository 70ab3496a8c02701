//! Embeddable node client.
//!
//! Connects to a hub over WebSocket, performs the Hello → Auth → Ready
//! handshake, keeps the heartbeat loop alive and answers the server's
//! StopSession/RequestSync requests from its local session store. Used by
//! integration tests and as a reference implementation for node authors.

/// Client enumerations.
pub mod enums;

/// The client implementation.
#[allow(clippy::module_inception)]
pub mod client;
