mod common;

use std::collections::BTreeSet;
use tempfile::TempDir;
use scopehub_actix::protocol::enums::packet::Packet;
use scopehub_actix::security::security::verify_password;
use scopehub_actix::session::structs::session_key::SessionKey;

#[tokio::test]
async fn test_accounts_survive_reboot() {
    let temp_dir = TempDir::new().unwrap();
    {
        let hub = common::create_sqlite_hub(&temp_dir).await;
        hub.accounts.create_account("alpha", "pw", BTreeSet::from(["game".to_string()])).await.unwrap();
    }
    let hub = common::create_sqlite_hub(&temp_dir).await;
    let account = hub.accounts.get_account("alpha").expect("Account should be reloaded at boot");
    assert!(verify_password("pw", &account.password));
    assert!(account.is_scope_allowed("game"));
}

#[tokio::test]
async fn test_scope_write_through_and_cache_coherence() {
    let temp_dir = TempDir::new().unwrap();
    let hub = common::create_sqlite_hub(&temp_dir).await;
    let scope = hub.scopes.get_or_create("game");

    scope.set_data_raw("h1", r#"{"x":1}"#).await.unwrap();
    let data = scope.load_data("h1").await.unwrap();
    assert_eq!(data["x"], 1);
    assert!(scope.is_cached("h1"));

    // The write must be visible through a fresh scope object too.
    drop(scope);
    let hub2 = common::create_sqlite_hub(&temp_dir).await;
    let fresh = hub2.scopes.get_or_create("game");
    let data = fresh.load_data("h1").await.unwrap();
    assert_eq!(data["x"], 1);
}

#[tokio::test]
async fn test_saving_empty_data_removes_the_record() {
    let temp_dir = TempDir::new().unwrap();
    let hub = common::create_sqlite_hub(&temp_dir).await;
    let scope = hub.scopes.get_or_create("game");
    scope.set_data_raw("h1", r#"{"x":1}"#).await.unwrap();
    scope.set_data_raw("h1", r#"{"bag":{},"log":[]}"#).await.unwrap();

    let hub2 = common::create_sqlite_hub(&temp_dir).await;
    let fresh = hub2.scopes.get_or_create("game");
    assert!(fresh.load_data("h1").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_leaderboard_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let hub = common::create_sqlite_hub(&temp_dir).await;
    let scope = hub.scopes.get_or_create("game");
    for (holder, value) in [("h5", 5), ("h1", 1), ("h9", 9), ("h3", 3)] {
        scope.set_data_raw(holder, &format!(r#"{{"f":{}}}"#, value)).await.unwrap();
    }

    let packet = hub.get_leaderboard("game", "f", 0, 10, Some("h5")).await.unwrap();
    match packet {
        Packet::Leaderboard { entries, position_entry, start_from } => {
            assert_eq!(start_from, 0);
            let values: Vec<f64> = entries.iter().map(|e| e.value).collect();
            assert_eq!(values, vec![9.0, 5.0, 3.0, 1.0]);
            let ranks: Vec<u32> = entries.iter().map(|e| e.rank).collect();
            assert_eq!(ranks, vec![0, 1, 2, 3]);
            let position = position_entry.expect("h5 has a position");
            assert_eq!(position.rank, 1, "Only the value 9 ranks above 5");
        }
        other => panic!("Expected leaderboard, got {:?}", other),
    }
}

#[tokio::test]
async fn test_top_position_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let hub = common::create_sqlite_hub(&temp_dir).await;
    let scope = hub.scopes.get_or_create("game");
    for (holder, value) in [("h5", 5), ("h9", 9)] {
        scope.set_data_raw(holder, &format!(r#"{{"f":{}}}"#, value)).await.unwrap();
    }
    let entry = hub.get_top_position("game", "h5", "f").await.unwrap().unwrap();
    assert_eq!(entry.rank, 1);
    assert_eq!(entry.value, 5.0);
    assert!(hub.get_top_position("game", "h5", "missing").await.unwrap().is_none());
}

#[tokio::test]
async fn test_session_flow_against_real_storage() {
    let temp_dir = TempDir::new().unwrap();
    let hub = common::create_sqlite_hub(&temp_dir).await;
    let key = SessionKey::new("game", "h1");
    hub.sessions.acquire(key.clone(), "node-a", |_| async {}).await;
    assert!(hub.end_session(&key, "node-a", Some(r#"{"gold":3}"#)).await);

    let scope = hub.scopes.get_or_create("game");
    let data = scope.load_data("h1").await.unwrap();
    assert_eq!(data["gold"], 3);
    assert!(hub.sessions.owner_of(&key).await.is_none());
}
