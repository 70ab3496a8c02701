use std::time::{Duration, Instant};
use ahash::AHashMap;
use parking_lot::RwLock;
use serde_json::{Map, Value};

pub(crate) struct CacheEntry {
    pub data: Map<String, Value>,
    pub stored_at: Instant,
}

/// Bounded holder cache. Entries expire after the TTL and the map is capped
/// by entry count; eviction drops the oldest entry. Absent holders are
/// cached as empty objects so repeated misses do not hit storage.
pub struct ScopeCache {
    pub(crate) ttl: Duration,
    pub(crate) max_entries: usize,
    pub(crate) entries: RwLock<AHashMap<String, CacheEntry>>,
}
