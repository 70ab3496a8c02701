//! # ScopeHub-Actix
//!
//! A central hub letting many client nodes persist and query per-holder
//! key/value state and leaderboards over one long-lived WebSocket per node,
//! using a compact binary request/response protocol.
//!
//! ## Overview
//!
//! Nodes authenticate against accounts with per-scope permissions, then load,
//! save and batch-save holder data. Each `(scope, holder)` pair is owned by
//! at most one node at a time; a conflicting load evicts the current owner
//! and transfers its flushed state. Leaderboard queries run behind a
//! cluster-wide sync barrier so data still held in node sessions is counted.
//!
//! ## Features
//!
//! - **Binary correlation protocol**: typed packets, 16-bit sequences,
//!   multi-timeout reactions, exactly-once settlement
//! - **Session ownership**: cluster-wide single-writer sessions with
//!   evict-and-transfer conflict handling
//! - **Leaderboards**: descending field queries and 0-based ranks behind a
//!   bounded-concurrency sync barrier
//! - **Database Agnostic**: SQLite, MySQL and PostgreSQL support with
//!   customizable schemas
//! - **Security**: salted password hashes, timing-attack imitation delay,
//!   per-address rate limiting
//! - **SSL/TLS**: rustls termination for both the access and API servers
//! - **Monitoring**: real-time statistics and Sentry integration
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use scopehub_actix::config::structs::configuration::Configuration;
//! use scopehub_actix::hub::structs::scope_hub::ScopeHub;
//!
//! let config = Configuration::load_from_file(false)?;
//! let hub = ScopeHub::new(Arc::new(config), false).await;
//! ```

/// The node-facing WebSocket access service.
pub mod access;

/// Node account management.
pub mod accounts;

/// REST API for account management and statistics.
pub mod api;

/// Embeddable node client.
pub mod client;

/// Common utilities, error handling and helper functions.
pub mod common;

/// Configuration management and TOML parsing.
pub mod config;

/// Multi-database backend support (SQLite, MySQL, PostgreSQL).
pub mod database;

/// The central hub wiring every collaborator together.
pub mod hub;

/// Authenticated node connections and dispatch.
pub mod node;

/// The binary correlation protocol (codec, reactions, talker).
pub mod protocol;

/// Scopes: caches and leaderboard queries.
pub mod scope;

/// Password hashing, validation and rate limiting.
pub mod security;

/// Session ownership registry.
pub mod session;

/// SSL/TLS certificate loading and generation.
pub mod ssl;

/// Statistics tracking and monitoring.
pub mod stats;

/// CLI argument parsing.
pub mod structs;
