//! REST API module for hub management and statistics.
//!
//! Provides HTTP endpoints for managing node accounts and retrieving hub
//! statistics. Every endpoint requires the configured API token as a query
//! parameter.

/// API service setup, token validation and stats endpoint.
#[allow(clippy::module_inception)]
pub mod api;

/// Account management endpoints.
pub mod api_accounts;

/// API data structures.
pub mod structs;
