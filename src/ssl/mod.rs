//! SSL/TLS support.
//!
//! Loads rustls server configurations from PEM files for the access and API
//! servers, and generates a self-signed pair for development via
//! `--create-selfsigned`.

/// Certificate loading and generation.
#[allow(clippy::module_inception)]
pub mod ssl;
