#[cfg(test)]
mod stats_tests {
    use std::sync::Arc;
    use crate::config::structs::configuration::Configuration;
    use crate::database::traits::storage_backend::MockStorageBackend;
    use crate::hub::structs::scope_hub::ScopeHub;
    use crate::stats::enums::stats_event::StatsEvent;

    fn hub() -> ScopeHub {
        ScopeHub::with_storage(Arc::new(Configuration::init()), Arc::new(MockStorageBackend::new()))
    }

    #[test]
    fn test_update_and_snapshot() {
        let hub = hub();
        hub.update_stats(StatsEvent::NodesActive, 2);
        hub.update_stats(StatsEvent::NodesActive, -1);
        hub.update_stats(StatsEvent::PacketsReceived, 5);
        let stats = hub.get_stats();
        assert_eq!(stats.nodes_active, 1);
        assert_eq!(stats.packets_received, 5);
        assert_eq!(stats.packets_sent, 0);
    }

    #[test]
    fn test_set_overwrites() {
        let hub = hub();
        hub.update_stats(StatsEvent::Accounts, 3);
        hub.set_stats(StatsEvent::Accounts, 10);
        assert_eq!(hub.get_stats().accounts, 10);
    }

    #[test]
    fn test_started_timestamp_is_set() {
        let hub = hub();
        assert!(hub.get_stats().started > 0);
    }

    #[test]
    fn test_snapshot_serializes_for_the_api() {
        let hub = hub();
        let serialized = serde_json::to_value(hub.get_stats()).unwrap();
        assert!(serialized.get("sessions_active").is_some());
        assert!(serialized.get("cache_hits").is_some());
    }
}
