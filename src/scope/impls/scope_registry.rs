use std::sync::Arc;
use std::time::Duration;
use ahash::AHashMap;
use log::debug;
use parking_lot::RwLock;
use crate::database::traits::storage_backend::StorageBackend;
use crate::scope::structs::scope::Scope;
use crate::scope::structs::scope_registry::ScopeRegistry;

impl ScopeRegistry {
    pub fn new(
        storage: Arc<dyn StorageBackend>,
        cache_ttl: Duration,
        cache_max_entries: usize,
    ) -> ScopeRegistry {
        ScopeRegistry {
            storage,
            cache_ttl,
            cache_max_entries,
            scopes: RwLock::new(AHashMap::new()),
        }
    }

    pub fn get_or_create(&self, scope_id: &str) -> Arc<Scope> {
        if let Some(scope) = self.scopes.read().get(scope_id) {
            return scope.clone();
        }
        let mut scopes = self.scopes.write();
        scopes.entry(scope_id.to_string()).or_insert_with(|| {
            debug!("[SCOPES] Creating scope {}", scope_id);
            Arc::new(Scope::new(
                scope_id,
                self.storage.clone(),
                self.cache_ttl,
                self.cache_max_entries,
            ))
        }).clone()
    }

    pub fn get(&self, scope_id: &str) -> Option<Arc<Scope>> {
        self.scopes.read().get(scope_id).cloned()
    }

    pub fn list(&self) -> Vec<Arc<Scope>> {
        self.scopes.read().values().cloned().collect()
    }

    /// Prunes every scope cache; returns the number of entries dropped.
    pub fn prune_caches(&self) -> usize {
        self.list().iter().map(|scope| scope.prune_cache()).sum()
    }
}
