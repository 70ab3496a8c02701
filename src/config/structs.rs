//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration struct.
pub mod configuration;

/// Node-facing access server configuration.
pub mod access_config;

/// API server configuration (address, SSL, timeouts).
pub mod api_server_config;

/// Database connection configuration.
pub mod database_config;

/// Database schema configuration (table/column names).
pub mod database_structure_config;

/// Holder data table schema.
pub mod database_structure_config_holders;

/// Accounts table schema.
pub mod database_structure_config_accounts;

/// Sentry error reporting configuration.
pub mod sentry_config;
