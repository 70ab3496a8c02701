//! Correlation data structures.

/// One leaderboard row as carried on the wire.
pub mod leaderboard_entry;

/// Declarative response/timeout/exception handler set.
pub mod reaction;

/// One outstanding correlated request.
pub mod transmission;

/// Per-connection correlation table and sequence allocator.
pub mod packet_controller;

/// Waiter for the next unsolicited packet matching a predicate.
pub mod packet_waiter;

/// The connection abstraction wrapping one physical socket.
pub mod talker;

/// Respond capability handed to the application dispatch layer.
pub mod responder;
