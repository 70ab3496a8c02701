use std::sync::Arc;
use crate::accounts::structs::account_service::AccountService;
use crate::config::structs::configuration::Configuration;
use crate::database::traits::storage_backend::StorageBackend;
use crate::node::structs::node_registry::NodeRegistry;
use crate::scope::structs::scope_registry::ScopeRegistry;
use crate::security::structs::rate_limiter::RateLimiter;
use crate::session::structs::session_registry::SessionRegistry;
use crate::stats::structs::stats_atomics::StatsAtomics;

/// The central service struct every connection and API handler works
/// against. Constructed once per process and passed around by `Arc`.
pub struct ScopeHub {
    pub instance_id: String,
    pub config: Arc<Configuration>,
    pub storage: Arc<dyn StorageBackend>,
    pub accounts: AccountService,
    pub scopes: ScopeRegistry,
    pub sessions: SessionRegistry,
    pub nodes: NodeRegistry,
    pub limiter: RateLimiter,
    pub stats: StatsAtomics,
}
