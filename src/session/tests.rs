#[cfg(test)]
mod session_registry_tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use parking_lot::Mutex;
    use crate::session::enums::acquire_outcome::AcquireOutcome;
    use crate::session::structs::session_key::SessionKey;
    use crate::session::structs::session_registry::SessionRegistry;

    async fn acquire_plain(registry: &SessionRegistry, key: SessionKey, node: &str) -> AcquireOutcome {
        registry.acquire(key, node, |_| async {}).await
    }

    #[tokio::test]
    async fn test_first_load_acquires() {
        let registry = SessionRegistry::new();
        let key = SessionKey::new("s", "h");
        assert_eq!(acquire_plain(&registry, key.clone(), "a").await, AcquireOutcome::Acquired);
        assert_eq!(registry.owner_of(&key).await.unwrap(), "a");
        assert!(registry.is_owner(&key, "a").await);
        assert_eq!(registry.active_sessions(), 1);
    }

    #[tokio::test]
    async fn test_same_owner_reload_is_noop() {
        let registry = SessionRegistry::new();
        let key = SessionKey::new("s", "h");
        acquire_plain(&registry, key.clone(), "a").await;
        assert_eq!(acquire_plain(&registry, key.clone(), "a").await, AcquireOutcome::AlreadyOwner);
        assert_eq!(registry.active_sessions(), 1);
    }

    #[tokio::test]
    async fn test_conflicting_load_evicts_and_transfers() {
        let registry = SessionRegistry::new();
        let key = SessionKey::new("s", "h");
        acquire_plain(&registry, key.clone(), "a").await;
        let evicted: Arc<Mutex<Vec<String>>> = Default::default();
        let evicted_log = evicted.clone();
        let outcome = registry.acquire(key.clone(), "b", |owner| {
            let log = evicted_log.clone();
            async move { log.lock().push(owner); }
        }).await;
        assert_eq!(outcome, AcquireOutcome::Transferred { previous_owner: "a".to_string() });
        assert_eq!(registry.owner_of(&key).await.unwrap(), "b");
        assert_eq!(evicted.lock().clone(), vec!["a".to_string()]);
        assert_eq!(registry.active_sessions(), 1);
        assert!(registry.sessions_of("a").is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_loads_have_exactly_one_owner() {
        let registry = Arc::new(SessionRegistry::new());
        let key = SessionKey::new("s", "h");
        let evictions = Arc::new(AtomicUsize::new(0));

        let mut tasks = Vec::new();
        for node in ["a", "b"] {
            let registry = registry.clone();
            let key = key.clone();
            let evictions = evictions.clone();
            tasks.push(tokio::spawn(async move {
                let outcome = registry.acquire(key, node, |_| {
                    let evictions = evictions.clone();
                    async move {
                        // A slow flush widens the race window.
                        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
                        evictions.fetch_add(1, Ordering::SeqCst);
                    }
                }).await;
                (node, outcome)
            }));
        }
        let mut outcomes = Vec::new();
        for task in tasks {
            outcomes.push(task.await.unwrap());
        }

        let owner = registry.owner_of(&key).await.unwrap();
        let winners: Vec<_> = outcomes.iter().filter(|(node, _)| *node == owner).collect();
        assert_eq!(winners.len(), 1, "Exactly one node may own the session");
        assert_eq!(registry.active_sessions(), 1);
        // One acquisition was clean, the other went through eviction.
        assert_eq!(evictions.load(Ordering::SeqCst), 1);
        assert!(outcomes.iter().any(|(_, o)| *o == AcquireOutcome::Acquired));
        assert!(outcomes.iter().any(|(_, o)| matches!(o, AcquireOutcome::Transferred { .. })));
    }

    #[tokio::test]
    async fn test_release_requires_ownership() {
        let registry = SessionRegistry::new();
        let key = SessionKey::new("s", "h");
        acquire_plain(&registry, key.clone(), "a").await;
        assert!(!registry.release(&key, "b").await);
        assert!(registry.release(&key, "a").await);
        assert!(registry.owner_of(&key).await.is_none());
        assert_eq!(registry.active_sessions(), 0);
    }

    #[tokio::test]
    async fn test_release_node_drops_all_sessions() {
        let registry = SessionRegistry::new();
        acquire_plain(&registry, SessionKey::new("s1", "h1"), "a").await;
        acquire_plain(&registry, SessionKey::new("s1", "h2"), "a").await;
        acquire_plain(&registry, SessionKey::new("s2", "h1"), "a").await;
        acquire_plain(&registry, SessionKey::new("s1", "h3"), "b").await;
        let released = registry.release_node("a").await;
        assert_eq!(released.len(), 3);
        assert_eq!(registry.active_sessions(), 1);
        assert_eq!(registry.nodes_owning_scope("s1"), vec!["b".to_string()]);
        assert!(registry.nodes_owning_scope("s2").is_empty());
    }

    #[tokio::test]
    async fn test_scope_index_tracks_owning_nodes() {
        let registry = SessionRegistry::new();
        acquire_plain(&registry, SessionKey::new("s", "h1"), "a").await;
        acquire_plain(&registry, SessionKey::new("s", "h2"), "b").await;
        let mut nodes = registry.nodes_owning_scope("s");
        nodes.sort();
        assert_eq!(nodes, vec!["a".to_string(), "b".to_string()]);
        registry.release(&SessionKey::new("s", "h1"), "a").await;
        assert_eq!(registry.nodes_owning_scope("s"), vec!["b".to_string()]);
    }

    #[tokio::test]
    async fn test_prune_slots_keeps_owned_entries() {
        let registry = SessionRegistry::new();
        let key = SessionKey::new("s", "h");
        acquire_plain(&registry, key.clone(), "a").await;
        acquire_plain(&registry, SessionKey::new("s", "gone"), "a").await;
        registry.release(&SessionKey::new("s", "gone"), "a").await;
        assert_eq!(registry.prune_slots(), 1);
        assert!(registry.is_owner(&key, "a").await);
    }
}
