//! Implementation blocks for protocol types.

pub mod packet;
pub mod packet_kind;
pub mod error_code;
pub mod error_level;
pub mod close_code;
pub mod reaction;
pub mod transmission;
pub mod packet_controller;
pub mod talker;
pub mod responder;
