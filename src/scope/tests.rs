#[cfg(test)]
mod scope_cache_tests {
    use std::time::Duration;
    use serde_json::Map;
    use crate::scope::structs::scope_cache::ScopeCache;

    fn data(key: &str, value: i64) -> Map<String, serde_json::Value> {
        let mut map = Map::new();
        map.insert(key.to_string(), serde_json::json!(value));
        map
    }

    #[test]
    fn test_put_get_round_trip() {
        let cache = ScopeCache::new(Duration::from_secs(60), 10);
        cache.put("h1", data("x", 1));
        assert_eq!(cache.get("h1").unwrap()["x"], 1);
        assert!(cache.get("h2").is_none());
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let cache = ScopeCache::new(Duration::from_secs(60), 2);
        cache.put("h1", data("x", 1));
        cache.put("h2", data("x", 2));
        cache.put("h3", data("x", 3));
        assert_eq!(cache.len(), 2);
        assert!(cache.get("h1").is_none(), "Oldest entry should be evicted");
        assert!(cache.get("h3").is_some());
    }

    #[test]
    fn test_replacing_existing_does_not_evict() {
        let cache = ScopeCache::new(Duration::from_secs(60), 2);
        cache.put("h1", data("x", 1));
        cache.put("h2", data("x", 2));
        cache.put("h1", data("x", 9));
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get("h1").unwrap()["x"], 9);
        assert!(cache.get("h2").is_some());
    }

    #[test]
    fn test_expired_entry_is_a_miss() {
        let cache = ScopeCache::new(Duration::from_millis(0), 10);
        cache.put("h1", data("x", 1));
        std::thread::sleep(Duration::from_millis(5));
        assert!(cache.get("h1").is_none());
        assert_eq!(cache.prune_expired(), 1);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_invalidate() {
        let cache = ScopeCache::new(Duration::from_secs(60), 10);
        cache.put("h1", data("x", 1));
        cache.invalidate("h1");
        assert!(cache.get("h1").is_none());
    }
}

#[cfg(test)]
mod scope_tests {
    use std::sync::Arc;
    use std::time::Duration;
    use serde_json::{json, Map};
    use crate::database::structs::data_filter::DataFilter;
    use crate::database::structs::holder_record::HolderRecord;
    use crate::database::traits::storage_backend::MockStorageBackend;
    use crate::scope::enums::scope_error::ScopeError;
    use crate::scope::impls::scope::{clean_data, parse_data};
    use crate::scope::structs::scope::Scope;

    fn scope_with(storage: MockStorageBackend) -> Scope {
        Scope::new("game", Arc::new(storage), Duration::from_secs(60), 100)
    }

    fn object(pairs: &[(&str, serde_json::Value)]) -> Map<String, serde_json::Value> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
    }

    #[test]
    fn test_clean_data_strips_empty_collections() {
        let data = object(&[
            ("gold", json!(5)),
            ("bag", json!({})),
            ("log", json!([])),
            ("nested", json!({"inner": {}})),
            ("kept", json!({"inner": {"x": 1}})),
        ]);
        let cleaned = clean_data(data);
        assert_eq!(cleaned.len(), 2);
        assert!(cleaned.contains_key("gold"));
        assert!(cleaned.contains_key("kept"));
    }

    #[test]
    fn test_parse_data_rejects_non_objects() {
        assert!(parse_data(r#"{"x":1}"#).is_ok());
        assert!(parse_data("").unwrap().is_empty());
        assert_eq!(parse_data("[1,2]"), Err(ScopeError::DataNotObject));
        assert_eq!(parse_data("5"), Err(ScopeError::DataNotObject));
        assert_eq!(parse_data("not json"), Err(ScopeError::DataNotObject));
    }

    #[tokio::test]
    async fn test_set_then_load_hits_cache_not_storage() {
        let mut storage = MockStorageBackend::new();
        // set_data persists once; the follow-up load must not read storage.
        storage.expect_replace_one().times(1).returning(|_, _, _| Ok(true));
        storage.expect_find_one().times(0);
        let scope = scope_with(storage);
        scope.set_data("h1", object(&[("x", json!(1))])).await.unwrap();
        let loaded = scope.load_data("h1").await.unwrap();
        assert_eq!(loaded["x"], 1);
    }

    #[tokio::test]
    async fn test_load_miss_populates_cache_even_when_absent() {
        let mut storage = MockStorageBackend::new();
        storage.expect_find_one().times(1).returning(|_, _| Ok(None));
        let scope = scope_with(storage);
        assert!(scope.load_data("ghost").await.unwrap().is_empty());
        // Second load is a cache hit; the mock would panic on a second call.
        assert!(scope.load_data("ghost").await.unwrap().is_empty());
        assert!(scope.is_cached("ghost"));
    }

    #[tokio::test]
    async fn test_set_data_inserts_when_absent() {
        let mut storage = MockStorageBackend::new();
        storage.expect_replace_one().times(1).returning(|_, _, _| Ok(false));
        storage.expect_insert_one().times(1).returning(|_, _, _| Ok(()));
        let scope = scope_with(storage);
        scope.set_data("h1", object(&[("x", json!(1))])).await.unwrap();
    }

    #[tokio::test]
    async fn test_set_empty_data_deletes_record() {
        let mut storage = MockStorageBackend::new();
        storage.expect_delete_one().times(1).returning(|_, _| Ok(true));
        let scope = scope_with(storage);
        scope.set_data("h1", object(&[("bag", json!({}))])).await.unwrap();
        assert!(scope.load_data("h1").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_leaderboard_ranks_follow_storage_order() {
        let mut storage = MockStorageBackend::new();
        storage.expect_find()
            .times(1)
            .withf(|scope, filters, sort, limit, skip| {
                scope == "game"
                    && filters == [DataFilter::FieldPresent { field: "f".to_string() }]
                    && sort.as_ref().map(|s| s.descending && s.field == "f").unwrap_or(false)
                    && *limit == 10 && *skip == 0
            })
            .returning(|_, _, _, _, _| Ok(vec![
                HolderRecord { holder_id: "c".to_string(), data: r#"{"f":9}"#.to_string() },
                HolderRecord { holder_id: "a".to_string(), data: r#"{"f":5}"#.to_string() },
                HolderRecord { holder_id: "d".to_string(), data: r#"{"f":3}"#.to_string() },
                HolderRecord { holder_id: "b".to_string(), data: r#"{"f":1}"#.to_string() },
            ]));
        let scope = scope_with(storage);
        let entries = scope.query_leaderboard("f", 0, 10).await.unwrap();
        let values: Vec<f64> = entries.iter().map(|e| e.value).collect();
        assert_eq!(values, vec![9.0, 5.0, 3.0, 1.0]);
        let ranks: Vec<u32> = entries.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, vec![0, 1, 2, 3]);
    }

    #[tokio::test]
    async fn test_leaderboard_ranks_offset_by_start_from() {
        let mut storage = MockStorageBackend::new();
        storage.expect_find().returning(|_, _, _, _, _| Ok(vec![
            HolderRecord { holder_id: "x".to_string(), data: r#"{"f":2}"#.to_string() },
        ]));
        let scope = scope_with(storage);
        let entries = scope.query_leaderboard("f", 7, 1).await.unwrap();
        assert_eq!(entries[0].rank, 7);
    }

    #[tokio::test]
    async fn test_leaderboard_rejects_hostile_field() {
        let storage = MockStorageBackend::new();
        let scope = scope_with(storage);
        let result = scope.query_leaderboard("f; DROP TABLE", 0, 10).await;
        assert!(matches!(result, Err(ScopeError::InvalidFieldName(_))));
    }

    #[tokio::test]
    async fn test_top_position_counts_greater_values() {
        let mut storage = MockStorageBackend::new();
        storage.expect_find_one().times(1).returning(|_, _| Ok(Some(
            HolderRecord { holder_id: "a".to_string(), data: r#"{"f":5}"#.to_string() }
        )));
        storage.expect_count()
            .times(1)
            .withf(|_, filters| {
                filters.contains(&DataFilter::FieldGreaterThan { field: "f".to_string(), value: 5.0 })
                    && filters.contains(&DataFilter::HolderNotEqual { holder_id: "a".to_string() })
            })
            .returning(|_, _| Ok(1));
        let scope = scope_with(storage);
        let entry = scope.query_top_position("a", "f").await.unwrap().unwrap();
        assert_eq!(entry.rank, 1);
        assert_eq!(entry.value, 5.0);
    }

    #[tokio::test]
    async fn test_top_position_absent_field_is_no_position() {
        let mut storage = MockStorageBackend::new();
        storage.expect_find_one().returning(|_, _| Ok(Some(
            HolderRecord { holder_id: "a".to_string(), data: r#"{"other":1}"#.to_string() }
        )));
        let scope = scope_with(storage);
        assert!(scope.query_top_position("a", "f").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_top_position_non_numeric_field_is_typed_error() {
        let mut storage = MockStorageBackend::new();
        storage.expect_find_one().returning(|_, _| Ok(Some(
            HolderRecord { holder_id: "a".to_string(), data: r#"{"f":"high"}"#.to_string() }
        )));
        let scope = scope_with(storage);
        let result = scope.query_top_position("a", "f").await;
        assert!(matches!(result, Err(ScopeError::FieldIsNotNumber(_))));
    }
}
