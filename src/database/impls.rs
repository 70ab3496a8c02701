//! Implementation blocks for database connectors.

/// Engine dispatch plus the storage trait implementation.
pub mod database_connector;

/// SQLite connector.
pub mod database_connector_sqlite;

/// MySQL connector.
pub mod database_connector_mysql;

/// PostgreSQL connector.
pub mod database_connector_pgsql;
