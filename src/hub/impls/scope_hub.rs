use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::Duration;
use log::{info, warn};
use crate::accounts::structs::account_service::AccountService;
use crate::common::common::current_time;
use crate::config::structs::configuration::Configuration;
use crate::database::structs::database_connector::DatabaseConnector;
use crate::database::traits::storage_backend::StorageBackend;
use crate::hub::structs::scope_hub::ScopeHub;
use crate::node::structs::node_registry::NodeRegistry;
use crate::scope::structs::scope_registry::ScopeRegistry;
use crate::security::security::{generate_secure_api_key, validate_api_key_strength};
use crate::security::structs::rate_limiter::RateLimiter;
use crate::session::structs::session_registry::SessionRegistry;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats_atomics::StatsAtomics;

impl ScopeHub {
    /// Connects storage and assembles every collaborator. Used by `main`.
    pub async fn new(config: Arc<Configuration>, create_database: bool) -> ScopeHub {
        let storage: Arc<dyn StorageBackend> =
            Arc::new(DatabaseConnector::new(config.clone(), create_database).await);
        ScopeHub::with_storage(config, storage)
    }

    /// Assembles the hub around an existing storage collaborator. Used by
    /// tests with a mocked backend.
    pub fn with_storage(config: Arc<Configuration>, storage: Arc<dyn StorageBackend>) -> ScopeHub {
        let access = &config.access_server;
        let hub = ScopeHub {
            instance_id: uuid::Uuid::new_v4().to_string(),
            storage: storage.clone(),
            accounts: AccountService::new(storage.clone()),
            scopes: ScopeRegistry::new(
                storage,
                Duration::from_secs(access.cache_ttl),
                access.cache_max_entries as usize,
            ),
            sessions: SessionRegistry::new(),
            nodes: NodeRegistry::new(),
            limiter: RateLimiter::new(
                access.throttle_max_count,
                access.throttle_window,
                access.throttle_reject_duration,
            ),
            stats: StatsAtomics::default(),
            config,
        };
        hub.stats.started.store(current_time() as i64, Ordering::SeqCst);
        hub
    }

    /// Loads persistent state into memory; called once at boot.
    pub async fn boot(&self) {
        info!("[BOOT] Hub instance UUID: {}", self.instance_id);
        if !validate_api_key_strength(&self.config.api_key) {
            warn!("[BOOT] The configured api_key is weak; a generated one would look like {}", generate_secure_api_key());
        }
        if let Ok(count) = self.accounts.load_from_storage().await {
            self.set_stats(StatsEvent::Accounts, count as i64);
        }
    }
}
