use serde::{Deserialize, Serialize};
use crate::config::structs::access_config::AccessConfig;
use crate::config::structs::api_server_config::ApiServerConfig;
use crate::config::structs::database_config::DatabaseConfig;
use crate::config::structs::database_structure_config::DatabaseStructureConfig;
use crate::config::structs::sentry_config::SentryConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    pub log_level: String,
    pub log_console_interval: u64,
    pub api_key: String,
    pub access_server: AccessConfig,
    pub api_server: Vec<ApiServerConfig>,
    pub database: DatabaseConfig,
    pub database_structure: DatabaseStructureConfig,
    pub sentry_config: SentryConfig,
}
