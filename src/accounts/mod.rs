//! Node account management.
//!
//! Accounts are loaded from storage at boot and kept in memory; every change
//! through the REST API writes through to the accounts table. An account
//! carries the password hash and the set of scopes its nodes may touch.

/// Account data structures.
pub mod structs;

/// Implementation blocks for account types.
pub mod impls;
