#[cfg(test)]
mod security_tests {
    use std::time::{Duration, Instant};
    use crate::security::security::{
        constant_time_eq,
        create_password,
        generate_secure_api_key,
        imitate_encryption_delay,
        validate_api_key_strength,
        validate_field_name,
        validate_node_name,
        verify_password
    };
    use crate::security::structs::rate_limiter::RateLimiter;

    #[test]
    fn test_node_name_accepts_valid_names() {
        assert!(validate_node_name("node"));
        assert!(validate_node_name("node-01_B"));
        assert!(validate_node_name(&"a".repeat(32)));
    }

    #[test]
    fn test_node_name_rejects_invalid_names() {
        assert!(!validate_node_name("abc"));
        assert!(!validate_node_name(&"a".repeat(33)));
        assert!(!validate_node_name("node 01"));
        assert!(!validate_node_name("node!"));
        assert!(!validate_node_name(""));
    }

    #[test]
    fn test_field_name_rejects_sql_characters() {
        assert!(validate_field_name("score"));
        assert!(validate_field_name("score_v2"));
        assert!(!validate_field_name("score'); DROP TABLE holders;--"));
        assert!(!validate_field_name("score.value"));
        assert!(!validate_field_name(""));
    }

    #[test]
    fn test_password_round_trip() {
        let stored = create_password("hunter2");
        assert!(stored.contains('$'));
        assert!(verify_password("hunter2", &stored));
        assert!(!verify_password("hunter3", &stored));
    }

    #[test]
    fn test_password_hashes_are_salted() {
        let first = create_password("same-password");
        let second = create_password("same-password");
        assert_ne!(first, second);
        assert!(verify_password("same-password", &first));
        assert!(verify_password("same-password", &second));
    }

    #[test]
    fn test_verify_rejects_malformed_stored_value() {
        assert!(!verify_password("pw", "no-separator"));
        assert!(!verify_password("pw", "zz$notahexdigest"));
    }

    #[test]
    fn test_generated_api_keys_are_strong_and_unique() {
        let first = generate_secure_api_key();
        let second = generate_secure_api_key();
        assert_ne!(first, second);
        assert!(validate_api_key_strength(&first));
    }

    #[test]
    fn test_api_key_strength() {
        assert!(!validate_api_key_strength("MyApiKey"));
        assert!(!validate_api_key_strength(&"a".repeat(40)));
        assert!(validate_api_key_strength(&format!("{}1234", "a".repeat(30))));
    }

    #[test]
    fn test_constant_time_eq() {
        assert!(constant_time_eq("abc", "abc"));
        assert!(!constant_time_eq("abc", "abd"));
        assert!(!constant_time_eq("abc", "abcd"));
    }

    #[tokio::test]
    async fn test_imitation_delay_stretches_to_minimum() {
        let started = Instant::now();
        imitate_encryption_delay(started, Duration::from_millis(50)).await;
        assert!(started.elapsed() >= Duration::from_millis(50));
    }

    #[test]
    fn test_rate_limiter_allows_within_budget() {
        let limiter = RateLimiter::new(5, 60, 60);
        let ip = "10.0.0.1".parse().unwrap();
        for _ in 0..5 {
            assert!(limiter.acquire(ip));
        }
        assert!(!limiter.acquire(ip));
    }

    #[test]
    fn test_rate_limiter_tracks_addresses_separately() {
        let limiter = RateLimiter::new(2, 60, 60);
        let first = "10.0.0.1".parse().unwrap();
        let second = "10.0.0.2".parse().unwrap();
        assert!(limiter.acquire(first));
        assert!(limiter.acquire(first));
        assert!(!limiter.acquire(first));
        assert!(limiter.acquire(second));
        assert_eq!(limiter.tracked_addresses(), 2);
    }

    #[test]
    fn test_rate_limiter_ipv4_and_mapped_ipv6_share_a_key() {
        let limiter = RateLimiter::new(1, 60, 60);
        assert!(limiter.acquire("127.0.0.1".parse().unwrap()));
        assert!(!limiter.acquire("::127.0.0.1".parse().unwrap()));
    }
}
