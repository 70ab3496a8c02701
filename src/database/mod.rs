//! Database backend module with multi-database support.
//!
//! Provides a unified storage interface over SQLite, MySQL and PostgreSQL
//! backends with configurable table and column names. Holder data is stored
//! as JSON text so leaderboard queries can sort and count on any numeric
//! field via the driver's JSON extraction.

/// Enumerations for database handling.
pub mod enums;

/// Database data structures (connectors, filters, records).
pub mod structs;

/// The storage collaborator trait consumed by the core.
pub mod traits;

/// Shared SQL text builders.
pub mod helpers;

/// Implementation blocks for database connectors.
pub mod impls;
