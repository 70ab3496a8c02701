use std::fs::File;
use std::io::Write;
use std::process::exit;
use std::thread::available_parallelism;
use log::{error, info};
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::access_config::AccessConfig;
use crate::config::structs::api_server_config::ApiServerConfig;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::database_config::DatabaseConfig;
use crate::config::structs::database_structure_config::DatabaseStructureConfig;
use crate::config::structs::database_structure_config_accounts::DatabaseStructureConfigAccounts;
use crate::config::structs::database_structure_config_holders::DatabaseStructureConfigHolders;
use crate::config::structs::sentry_config::SentryConfig;
use crate::database::enums::database_drivers::DatabaseDrivers;

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            log_console_interval: 60,
            api_key: String::from("MyApiKey"),
            access_server: AccessConfig {
                enabled: true,
                bind_address: String::from("0.0.0.0:7070"),
                keep_alive: 60,
                client_request_timeout: 15,
                client_disconnect_timeout: 15,
                max_connections: 25000,
                threads: available_parallelism().unwrap().get() as u64,
                ssl: false,
                ssl_key: String::from(""),
                ssl_cert: String::from(""),
                auth_timeout: 10,
                auth_delay_minimum: 350,
                ping_interval: 30,
                ping_grace: 15,
                ping_sweep_interval: 10,
                request_timeout: 5,
                sync_parallelism: 8,
                cache_ttl: 300,
                cache_max_entries: 10000,
                cache_prune_interval: 60,
                throttle_max_count: 30,
                throttle_window: 60,
                throttle_reject_duration: 60,
                throttle_sweep_interval: 120,
            },
            api_server: vec!(
                ApiServerConfig {
                    enabled: true,
                    bind_address: String::from("0.0.0.0:8080"),
                    keep_alive: 60,
                    request_timeout: 30,
                    disconnect_timeout: 30,
                    max_connections: 25000,
                    threads: available_parallelism().unwrap().get() as u64,
                    ssl: false,
                    ssl_key: String::from(""),
                    ssl_cert: String::from(""),
                }
            ),
            database: DatabaseConfig {
                engine: DatabaseDrivers::sqlite3,
                path: String::from("sqlite://data.db"),
            },
            database_structure: DatabaseStructureConfig {
                holders: DatabaseStructureConfigHolders {
                    table_name: String::from("holders"),
                    column_scope: String::from("scope"),
                    column_holder: String::from("holder"),
                    column_data: String::from("data"),
                },
                accounts: DatabaseStructureConfigAccounts {
                    table_name: String::from("accounts"),
                    column_login: String::from("login"),
                    column_password: String::from("password"),
                    column_scopes: String::from("scopes"),
                    column_created: String::from("created"),
                }
            },
            sentry_config: SentryConfig {
                enabled: false,
                dsn: String::from(""),
                debug: false,
                sample_rate: 1.0,
                max_breadcrumbs: 100,
                attach_stacktrace: true,
                send_default_pii: false,
                traces_sample_rate: 1.0
            }
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => Ok(cfg),
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    pub fn load_from_file(create: bool) -> Result<Configuration, ConfigurationError> {
        match Configuration::load_file("config.toml") {
            Ok(config) => {
                info!("[CONFIG] Configuration loaded from config.toml");
                Ok(config)
            }
            Err(error) => {
                error!("No config file found or corrupt.");
                error!("[ERROR] {}", error);
                if !create {
                    error!("You can either create your own config.toml file, or start this app using '--create-config' as parameter.");
                    return Err(error);
                }
                info!("[CONFIG] Creating config file config.toml");
                let config = Configuration::init();
                match config.save_from_config("config.toml") {
                    Ok(_) => info!("[CONFIG] The configuration file was created."),
                    Err(_) => error!("[CONFIG] The configuration file could not be written."),
                }
                Ok(config)
            }
        }
    }

    pub fn save_from_config(&self, path: &str) -> Result<(), ConfigurationError> {
        let config_toml = match toml::to_string_pretty(self) {
            Ok(data) => data,
            Err(_) => {
                exit(1);
            }
        };
        Configuration::save_file(path, config_toml)
    }
}
