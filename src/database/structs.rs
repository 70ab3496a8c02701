//! Database data structures.

/// Wrapper holding whichever driver pool is active.
pub mod database_connector;

/// SQLite pool wrapper.
pub mod database_connector_sqlite;

/// MySQL pool wrapper.
pub mod database_connector_mysql;

/// PostgreSQL pool wrapper.
pub mod database_connector_pgsql;

/// One holder row as returned by storage queries.
pub mod holder_record;

/// Typed query filters over holder rows.
pub mod data_filter;

/// Sort specification for find queries.
pub mod sort_spec;
