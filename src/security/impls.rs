//! Implementation blocks for security types.

pub mod rate_limiter;
