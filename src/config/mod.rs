//! Configuration management module.
//!
//! This module handles loading, parsing, and validating the hub configuration
//! from TOML files.
//!
//! # Configuration Structure
//!
//! The main configuration file (`config.toml`) contains sections for:
//! - **access_server**: The node-facing WebSocket server (auth, heartbeats, limits)
//! - **database**: Database connection and schema settings
//! - **api_server**: REST API server instances
//! - **sentry_config**: Error reporting configuration
//!
//! # Features
//!
//! - TOML file parsing with detailed error messages
//! - Customizable database table/column names
//! - Multiple API server instance configurations
//! - Default value generation via `--create-config`

/// Enumerations for configuration handling.
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration types.
pub mod impls;
