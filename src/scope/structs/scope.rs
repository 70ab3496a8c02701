use std::sync::Arc;
use crate::database::traits::storage_backend::StorageBackend;
use crate::scope::structs::scope_cache::ScopeCache;

/// One named data partition: a write-through cache over the storage
/// collaborator plus the leaderboard/rank query surface.
pub struct Scope {
    pub id: String,
    pub(crate) cache: ScopeCache,
    pub(crate) storage: Arc<dyn StorageBackend>,
}
