//! Implementation blocks for configuration types.

/// Root configuration methods (init/load/save).
pub mod configuration;

/// Display implementation for configuration errors.
pub mod configuration_error;
