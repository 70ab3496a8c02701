mod common;

use std::fs;
use tempfile::TempDir;
use scopehub_actix::config::structs::configuration::Configuration;

#[test]
fn test_config_default_values() {
    let config = Configuration::init();
    assert_eq!(config.log_level, "info");
    assert!(config.access_server.ping_interval > 0, "Ping interval should be positive");
    assert!(config.access_server.auth_timeout > 0, "Auth timeout should be positive");
    assert!(config.access_server.sync_parallelism > 0, "Sync parallelism should be positive");
    assert!(!config.api_server.is_empty(), "At least one API server entry expected");
}

#[test]
fn test_config_file_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    let config = Configuration::init();
    config.save_from_config(config_path.to_str().unwrap()).unwrap();
    assert!(config_path.exists(), "Config file should exist");

    let loaded = Configuration::load_file(config_path.to_str().unwrap()).unwrap();
    assert_eq!(loaded.access_server.bind_address, config.access_server.bind_address);
    assert_eq!(loaded.database_structure.holders.table_name, config.database_structure.holders.table_name);
    assert_eq!(loaded.api_key, config.api_key);
}

#[test]
fn test_config_partial_file_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "log_level = \"info\"\n").unwrap();
    assert!(Configuration::load_file(config_path.to_str().unwrap()).is_err());
}

#[test]
fn test_config_missing_file_is_io_error() {
    let result = Configuration::load_file("/nonexistent/config.toml");
    assert!(result.is_err());
}
