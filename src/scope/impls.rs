//! Implementation blocks for scope types.

pub mod scope;
pub mod scope_cache;
pub mod scope_registry;
