//! Account data structures.

/// One account row.
pub mod account;

/// In-memory account service with storage write-through.
pub mod account_service;
