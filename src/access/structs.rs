//! Access data structures.

/// The per-connection WebSocket actor.
pub mod access_connection;

/// Stream adapter feeding talker output into the actor.
pub mod outbound_stream;
