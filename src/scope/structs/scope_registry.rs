use std::sync::Arc;
use std::time::Duration;
use ahash::AHashMap;
use parking_lot::RwLock;
use crate::database::traits::storage_backend::StorageBackend;
use crate::scope::structs::scope::Scope;

/// Creates scopes on first touch and keeps them alive for the process
/// lifetime. Scope objects are cheap; their caches are bounded.
pub struct ScopeRegistry {
    pub(crate) storage: Arc<dyn StorageBackend>,
    pub(crate) cache_ttl: Duration,
    pub(crate) cache_max_entries: usize,
    pub(crate) scopes: RwLock<AHashMap<String, Arc<Scope>>>,
}
