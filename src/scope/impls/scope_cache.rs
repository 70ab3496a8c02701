use std::time::{Duration, Instant};
use ahash::AHashMap;
use parking_lot::RwLock;
use serde_json::{Map, Value};
use crate::scope::structs::scope_cache::{CacheEntry, ScopeCache};

impl ScopeCache {
    pub fn new(ttl: Duration, max_entries: usize) -> ScopeCache {
        ScopeCache {
            ttl,
            max_entries,
            entries: RwLock::new(AHashMap::new()),
        }
    }

    pub fn get(&self, holder_id: &str) -> Option<Map<String, Value>> {
        let entries = self.entries.read();
        let entry = entries.get(holder_id)?;
        if entry.stored_at.elapsed() > self.ttl {
            return None;
        }
        Some(entry.data.clone())
    }

    /// Inserts or replaces an entry. At capacity the oldest entry makes
    /// room, so a write always lands.
    pub fn put(&self, holder_id: &str, data: Map<String, Value>) {
        let mut entries = self.entries.write();
        if !entries.contains_key(holder_id) && entries.len() >= self.max_entries {
            let oldest = entries.iter()
                .min_by_key(|(_, entry)| entry.stored_at)
                .map(|(key, _)| key.clone());
            if let Some(oldest) = oldest {
                entries.remove(&oldest);
            }
        }
        entries.insert(holder_id.to_string(), CacheEntry {
            data,
            stored_at: Instant::now(),
        });
    }

    pub fn invalidate(&self, holder_id: &str) {
        self.entries.write().remove(holder_id);
    }

    /// Drops entries older than the TTL. Called from the prune task.
    pub fn prune_expired(&self) -> usize {
        let ttl = self.ttl;
        let mut entries = self.entries.write();
        let before = entries.len();
        entries.retain(|_, entry| entry.stored_at.elapsed() <= ttl);
        before - entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}
