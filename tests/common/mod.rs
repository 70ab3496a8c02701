#![allow(dead_code)]
use std::sync::Arc;
use tempfile::TempDir;
use scopehub_actix::config::structs::configuration::Configuration;
use scopehub_actix::database::structs::database_connector::DatabaseConnector;
use scopehub_actix::hub::structs::scope_hub::ScopeHub;

pub type TestHub = Arc<ScopeHub>;

pub fn sqlite_test_config(temp_dir: &TempDir) -> Arc<Configuration> {
    let mut config = Configuration::init();
    config.database.path = format!("sqlite://{}", temp_dir.path().join("data.db").display());
    config.access_server.request_timeout = 1;
    Arc::new(config)
}

pub async fn create_sqlite_connector(temp_dir: &TempDir) -> DatabaseConnector {
    DatabaseConnector::new(sqlite_test_config(temp_dir), true).await
}

pub async fn create_sqlite_hub(temp_dir: &TempDir) -> TestHub {
    let config = sqlite_test_config(temp_dir);
    let hub = Arc::new(ScopeHub::new(config, true).await);
    hub.boot().await;
    hub
}
