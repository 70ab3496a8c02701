//! Binary correlation protocol.
//!
//! This module implements the packet layer every node exchange rides on:
//! the frame codec, the sequence-based request/response correlation table,
//! multi-timeout reaction handling and the connection abstraction (`Talker`).
//!
//! # Frame layout
//!
//! ```text
//! [ 1 byte packet type ][ 2 bytes sequence ][ payload... ]
//! ```
//!
//! A response reuses the request's sequence incremented by one, which is how
//! the sending side finds its pending `Transmission` again. Unsolicited
//! frames (no pending entry) are handed to the application dispatch layer
//! together with a respond capability.

/// Packet, close-code and error enumerations.
pub mod enums;

/// Correlation data structures (Reaction, Transmission, controller, Talker).
pub mod structs;

/// Binary frame encoding/decoding.
pub mod encoding;

/// Implementation blocks for protocol types.
pub mod impls;

/// Handler type aliases.
pub mod types;

/// Unit tests for the protocol layer.
pub mod tests;
