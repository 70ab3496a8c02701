use std::sync::Arc;
use std::time::Duration;
use serde_json::{Map, Value};
use crate::database::structs::data_filter::DataFilter;
use crate::database::structs::sort_spec::SortSpec;
use crate::database::traits::storage_backend::StorageBackend;
use crate::protocol::structs::leaderboard_entry::LeaderboardEntry;
use crate::scope::enums::scope_error::ScopeError;
use crate::scope::structs::scope::Scope;
use crate::scope::structs::scope_cache::ScopeCache;
use crate::security::security::validate_field_name;

/// Strips empty maps and collections, recursively. A key whose value cleans
/// down to an empty object or array is dropped entirely.
pub fn clean_data(data: Map<String, Value>) -> Map<String, Value> {
    let mut cleaned = Map::new();
    for (key, value) in data {
        match value {
            Value::Object(inner) => {
                let inner = clean_data(inner);
                if !inner.is_empty() {
                    cleaned.insert(key, Value::Object(inner));
                }
            }
            Value::Array(items) => {
                if !items.is_empty() {
                    cleaned.insert(key, Value::Array(items));
                }
            }
            other => {
                cleaned.insert(key, other);
            }
        }
    }
    cleaned
}

/// Parses a wire data payload into a JSON object.
pub fn parse_data(raw: &str) -> Result<Map<String, Value>, ScopeError> {
    if raw.trim().is_empty() {
        return Ok(Map::new());
    }
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(ScopeError::DataNotObject),
        Err(_) => Err(ScopeError::DataNotObject),
    }
}

impl Scope {
    pub fn new(
        id: &str,
        storage: Arc<dyn StorageBackend>,
        cache_ttl: Duration,
        cache_max_entries: usize,
    ) -> Scope {
        Scope {
            id: id.to_string(),
            cache: ScopeCache::new(cache_ttl, cache_max_entries),
            storage,
        }
    }

    /// Returns the holder's data, serving from cache when possible. A miss
    /// reads storage and populates the cache even when the holder has no
    /// record yet.
    pub async fn load_data(&self, holder_id: &str) -> Result<Map<String, Value>, ScopeError> {
        if let Some(data) = self.cache.get(holder_id) {
            return Ok(data);
        }
        let record = self.storage.find_one(&self.id, holder_id).await
            .map_err(|e| ScopeError::Storage(e.to_string()))?;
        let data = match record {
            Some(record) => parse_data(&record.data).unwrap_or_default(),
            None => Map::new(),
        };
        self.cache.put(holder_id, data.clone());
        Ok(data)
    }

    /// Whether the last `load_data` for this holder would hit the cache.
    pub fn is_cached(&self, holder_id: &str) -> bool {
        self.cache.get(holder_id).is_some()
    }

    /// Writes holder data: cache synchronously, storage afterwards. Cleaned
    /// data that ends up empty deletes the record instead.
    pub async fn set_data(&self, holder_id: &str, data: Map<String, Value>) -> Result<(), ScopeError> {
        let cleaned = clean_data(data);
        self.cache.put(holder_id, cleaned.clone());
        if cleaned.is_empty() {
            self.storage.delete_one(&self.id, holder_id).await
                .map_err(|e| ScopeError::Storage(e.to_string()))?;
            return Ok(());
        }
        let serialized = Value::Object(cleaned).to_string();
        let replaced = self.storage.replace_one(&self.id, holder_id, &serialized).await
            .map_err(|e| ScopeError::Storage(e.to_string()))?;
        if !replaced {
            self.storage.insert_one(&self.id, holder_id, &serialized).await
                .map_err(|e| ScopeError::Storage(e.to_string()))?;
        }
        Ok(())
    }

    /// Parses and stores a wire payload for the holder.
    pub async fn set_data_raw(&self, holder_id: &str, raw: &str) -> Result<(), ScopeError> {
        let data = parse_data(raw)?;
        self.set_data(holder_id, data).await
    }

    /// Ordered leaderboard slice: descending by `field`, rank `start_from`
    /// onwards. Callers run the sync barrier first; this only queries
    /// storage.
    pub async fn query_leaderboard(
        &self,
        field: &str,
        start_from: u32,
        limit: u32,
    ) -> Result<Vec<LeaderboardEntry>, ScopeError> {
        if !validate_field_name(field) {
            return Err(ScopeError::InvalidFieldName(field.to_string()));
        }
        let filters = [DataFilter::FieldPresent { field: field.to_string() }];
        let sort = SortSpec { field: field.to_string(), descending: true };
        let records = self.storage
            .find(&self.id, &filters, Some(sort), limit as u64, start_from as u64)
            .await
            .map_err(|e| ScopeError::Storage(e.to_string()))?;
        Ok(records.into_iter().enumerate().map(|(offset, record)| {
            let value = parse_data(&record.data)
                .ok()
                .and_then(|data| data.get(field).and_then(Value::as_f64))
                .unwrap_or(0.0);
            LeaderboardEntry {
                rank: start_from + offset as u32,
                holder_id: record.holder_id,
                value,
            }
        }).collect())
    }

    /// The holder's numeric value for `field`: `None` when the field is
    /// absent, a typed error when it is present but not a number.
    pub async fn field_value(&self, holder_id: &str, field: &str) -> Result<Option<f64>, ScopeError> {
        if !validate_field_name(field) {
            return Err(ScopeError::InvalidFieldName(field.to_string()));
        }
        let data = self.load_data(holder_id).await?;
        match data.get(field) {
            None => Ok(None),
            Some(value) => value.as_f64()
                .map(Some)
                .ok_or_else(|| ScopeError::FieldIsNotNumber(field.to_string())),
        }
    }

    /// Counts other holders whose `field` is strictly greater than `value`;
    /// that count is the holder's 0-based rank.
    pub async fn count_above(&self, holder_id: &str, field: &str, value: f64) -> Result<u32, ScopeError> {
        let filters = [
            DataFilter::FieldGreaterThan { field: field.to_string(), value },
            DataFilter::HolderNotEqual { holder_id: holder_id.to_string() },
        ];
        let rank = self.storage.count(&self.id, &filters).await
            .map_err(|e| ScopeError::Storage(e.to_string()))?;
        Ok(rank as u32)
    }

    /// The holder's 0-based rank on `field`. A holder without the field has
    /// no position.
    pub async fn query_top_position(
        &self,
        holder_id: &str,
        field: &str,
    ) -> Result<Option<LeaderboardEntry>, ScopeError> {
        let value = match self.field_value(holder_id, field).await? {
            None => return Ok(None),
            Some(value) => value,
        };
        let rank = self.count_above(holder_id, field, value).await?;
        Ok(Some(LeaderboardEntry {
            rank,
            holder_id: holder_id.to_string(),
            value,
        }))
    }

    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    pub fn prune_cache(&self) -> usize {
        self.cache.prune_expired()
    }
}
