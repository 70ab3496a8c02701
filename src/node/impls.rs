//! Implementation blocks for node types.

pub mod node;
pub mod node_registry;
