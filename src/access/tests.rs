#[cfg(test)]
mod authentication_tests {
    use std::collections::BTreeSet;
    use std::sync::Arc;
    use std::time::{Duration, Instant};
    use tokio::sync::mpsc;
    use crate::access::access::authenticate;
    use crate::access::enums::auth_result::AuthResult;
    use crate::accounts::structs::account::Account;
    use crate::config::structs::configuration::Configuration;
    use crate::database::traits::storage_backend::MockStorageBackend;
    use crate::hub::structs::scope_hub::ScopeHub;
    use crate::protocol::structs::talker::Talker;
    use crate::security::security::create_password;

    fn test_hub(auth_delay_ms: u64) -> Arc<ScopeHub> {
        let mut config = Configuration::init();
        config.access_server.auth_delay_minimum = auth_delay_ms;
        Arc::new(ScopeHub::with_storage(Arc::new(config), Arc::new(MockStorageBackend::new())))
    }

    fn seed_account(hub: &Arc<ScopeHub>, login: &str, password: &str, scopes: &[&str]) {
        let account = Account {
            login: login.to_string(),
            password: create_password(password),
            scopes: scopes.iter().map(|s| s.to_string()).collect::<BTreeSet<String>>(),
            created: 0,
        };
        hub.accounts.accounts.write().insert(login.to_string(), account);
    }

    fn test_talker(port: u16) -> Arc<Talker> {
        let (sender, _receiver) = mpsc::unbounded_channel();
        Arc::new(Talker::new(format!("10.3.0.1:{}", port).parse().unwrap(), sender))
    }

    #[tokio::test]
    async fn test_successful_authentication_registers_node() {
        let hub = test_hub(0);
        seed_account(&hub, "acc", "pw", &["a"]);
        let talker = test_talker(1);
        let result = authenticate(&hub, &talker, talker.remote_addr, "acc", "pw", "node-01", false).await;
        match result {
            AuthResult::Success(node) => {
                assert_eq!(node.id, "node-01");
                assert!(node.is_scope_allowed("a"));
                assert!(hub.nodes.get("node-01").is_some());
            }
            _ => panic!("Expected success"),
        }
    }

    #[tokio::test]
    async fn test_unknown_login_takes_at_least_the_imitated_delay() {
        let hub = test_hub(100);
        let talker = test_talker(1);
        let started = Instant::now();
        let result = authenticate(&hub, &talker, talker.remote_addr, "ghost", "pw", "node1", false).await;
        assert!(matches!(result, AuthResult::WrongCredentials));
        assert!(started.elapsed() >= Duration::from_millis(100),
            "Unknown accounts must not be distinguishable by timing");
    }

    #[tokio::test]
    async fn test_wrong_password_takes_at_least_the_imitated_delay() {
        let hub = test_hub(100);
        seed_account(&hub, "acc", "right", &[]);
        let talker = test_talker(1);
        let started = Instant::now();
        let result = authenticate(&hub, &talker, talker.remote_addr, "acc", "wrong", "node-01", false).await;
        assert!(matches!(result, AuthResult::WrongCredentials));
        assert!(started.elapsed() >= Duration::from_millis(100));
    }

    #[tokio::test]
    async fn test_invalid_node_name_is_rejected_after_password_check() {
        let hub = test_hub(0);
        seed_account(&hub, "acc", "pw", &[]);
        let talker = test_talker(1);
        let result = authenticate(&hub, &talker, talker.remote_addr, "acc", "pw", "no", false).await;
        assert!(matches!(result, AuthResult::InvalidNodeName));
        assert!(hub.nodes.is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_node_id_is_rejected() {
        let hub = test_hub(0);
        seed_account(&hub, "acc", "pw", &[]);
        let first = test_talker(1);
        let second = test_talker(2);
        assert!(matches!(
            authenticate(&hub, &first, first.remote_addr, "acc", "pw", "node-01", false).await,
            AuthResult::Success(_)
        ));
        assert!(matches!(
            authenticate(&hub, &second, second.remote_addr, "acc", "pw", "node-01", false).await,
            AuthResult::NodeAlreadyExists
        ));
    }

    #[tokio::test]
    async fn test_second_auth_on_same_connection_rejected() {
        let hub = test_hub(0);
        seed_account(&hub, "acc", "pw", &[]);
        let talker = test_talker(1);
        let result = authenticate(&hub, &talker, talker.remote_addr, "acc", "pw", "node-01", true).await;
        assert!(matches!(result, AuthResult::AlreadyAuthenticated));
    }
}

#[cfg(test)]
mod liveness_tests {
    use std::collections::BTreeSet;
    use std::sync::Arc;
    use std::sync::atomic::Ordering;
    use tokio::sync::mpsc;
    use crate::access::access::liveness_sweep;
    use crate::config::structs::configuration::Configuration;
    use crate::database::traits::storage_backend::MockStorageBackend;
    use crate::hub::structs::scope_hub::ScopeHub;
    use crate::node::structs::node::Node;
    use crate::protocol::structs::talker::Talker;
    use crate::session::structs::session_key::SessionKey;

    #[tokio::test]
    async fn test_sweep_closes_silent_nodes_and_releases_sessions() {
        let mut config = Configuration::init();
        config.access_server.ping_interval = 1;
        config.access_server.ping_grace = 1;
        let hub = Arc::new(ScopeHub::with_storage(Arc::new(config), Arc::new(MockStorageBackend::new())));

        let (sender, _receiver) = mpsc::unbounded_channel();
        let addr = "10.4.0.1:9000".parse().unwrap();
        let talker = Arc::new(Talker::new(addr, sender));
        let node = Arc::new(Node::new("stale", "acc", BTreeSet::new(), talker, addr));
        // Pretend the last heartbeat was a minute ago.
        node.last_heartbeat.store(crate::common::common::current_time() - 60, Ordering::SeqCst);
        hub.nodes.register(node.clone()).unwrap();
        hub.sessions.acquire(SessionKey::new("s", "h"), "stale", |_| async {}).await;

        assert_eq!(liveness_sweep(&hub).await, 1);
        assert!(hub.nodes.is_empty());
        assert!(!node.talker.is_open());
        assert_eq!(hub.sessions.active_sessions(), 0);
    }

    #[tokio::test]
    async fn test_sweep_spares_fresh_nodes() {
        let config = Configuration::init();
        let hub = Arc::new(ScopeHub::with_storage(Arc::new(config), Arc::new(MockStorageBackend::new())));
        let (sender, _receiver) = mpsc::unbounded_channel();
        let addr = "10.4.0.2:9000".parse().unwrap();
        let talker = Arc::new(Talker::new(addr, sender));
        let node = Arc::new(Node::new("fresh", "acc", BTreeSet::new(), talker, addr));
        hub.nodes.register(node).unwrap();
        assert_eq!(liveness_sweep(&hub).await, 0);
        assert_eq!(hub.nodes.len(), 1);
    }
}
