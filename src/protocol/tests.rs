#[cfg(test)]
mod codec_tests {
    use std::collections::BTreeMap;
    use proptest::prelude::*;
    use crate::protocol::encoding::codec::{decode, encode};
    use crate::protocol::enums::decode_error::DecodeError;
    use crate::protocol::enums::encode_error::EncodeError;
    use crate::protocol::enums::error_code::ErrorCode;
    use crate::protocol::enums::error_level::ErrorLevel;
    use crate::protocol::enums::packet::Packet;
    use crate::protocol::structs::leaderboard_entry::LeaderboardEntry;

    fn round_trip(packet: Packet, sequence: u16) {
        let frame = encode(&packet, sequence).unwrap();
        let (decoded, decoded_sequence) = decode(&frame).unwrap();
        assert_eq!(decoded, packet);
        assert_eq!(decoded_sequence, sequence);
    }

    #[test]
    fn test_round_trip_marker_packets() {
        round_trip(Packet::Hello, 0);
        round_trip(Packet::Heartbeat, 1);
        round_trip(Packet::HeartbeatAck, u16::MAX);
    }

    #[test]
    fn test_round_trip_auth() {
        round_trip(Packet::Auth {
            login: "admin".to_string(),
            password: "hunter2".to_string(),
            node: "node-01".to_string(),
        }, 42);
    }

    #[test]
    fn test_round_trip_ready() {
        round_trip(Packet::Ready { heartbeat_interval_ms: 30000 }, 7);
    }

    #[test]
    fn test_round_trip_data_packets() {
        round_trip(Packet::LoadData {
            scope_id: "game".to_string(),
            holder_id: "player1".to_string(),
        }, 100);
        round_trip(Packet::UserData {
            scope_id: "game".to_string(),
            holder_id: "player1".to_string(),
            data: r#"{"gold":12}"#.to_string(),
        }, 101);
        round_trip(Packet::SaveData {
            scope_id: "game".to_string(),
            holder_id: "player1".to_string(),
            data: r#"{"gold":13}"#.to_string(),
        }, 102);
    }

    #[test]
    fn test_round_trip_batch_save() {
        let mut data = BTreeMap::new();
        data.insert("player1".to_string(), r#"{"gold":1}"#.to_string());
        data.insert("player2".to_string(), r#"{"gold":2}"#.to_string());
        round_trip(Packet::BatchSaveData { scope_id: "game".to_string(), data }, 9);
    }

    #[test]
    fn test_round_trip_session_packets() {
        round_trip(Packet::StopSession {
            scope_id: "game".to_string(),
            holder_id: "player1".to_string(),
        }, 3);
        round_trip(Packet::EndSession {
            scope_id: "game".to_string(),
            holder_id: "player1".to_string(),
            data: Some(r#"{"gold":5}"#.to_string()),
        }, 4);
        round_trip(Packet::EndSession {
            scope_id: "game".to_string(),
            holder_id: "player1".to_string(),
            data: None,
        }, 5);
        round_trip(Packet::RequestSync { scope_id: "game".to_string() }, 6);
    }

    #[test]
    fn test_round_trip_leaderboard_packets() {
        round_trip(Packet::RequestLeaderboard {
            scope_id: "game".to_string(),
            field: "score".to_string(),
            start_from: 0,
            limit: 10,
            position_holder_id: Some("player1".to_string()),
        }, 8);
        round_trip(Packet::Leaderboard {
            start_from: 0,
            entries: vec![
                LeaderboardEntry { rank: 0, holder_id: "a".to_string(), value: 9.0 },
                LeaderboardEntry { rank: 1, holder_id: "b".to_string(), value: 5.5 },
            ],
            position_entry: Some(LeaderboardEntry { rank: 3, holder_id: "c".to_string(), value: 1.0 }),
        }, 9);
        round_trip(Packet::Leaderboard {
            start_from: 5,
            entries: vec![],
            position_entry: None,
        }, 10);
        round_trip(Packet::RequestTopPosition {
            scope_id: "game".to_string(),
            holder_id: "player1".to_string(),
            field: "score".to_string(),
        }, 11);
        round_trip(Packet::TopPosition { entry: None }, 12);
        round_trip(Packet::TopPosition {
            entry: Some(LeaderboardEntry { rank: 1, holder_id: "x".to_string(), value: 5.0 }),
        }, 13);
    }

    #[test]
    fn test_round_trip_error_and_ok() {
        round_trip(Packet::Error {
            level: ErrorLevel::Error,
            code: ErrorCode::ScopeIsNotAllowed,
            message: "scope b is not allowed".to_string(),
        }, 14);
        round_trip(Packet::Ok { message: "saved".to_string() }, 15);
    }

    #[test]
    fn test_unknown_packet_type_is_decode_failure() {
        let frame = vec![99u8, 0, 1];
        assert_eq!(decode(&frame), Err(DecodeError::UnknownPacketType(99)));
    }

    #[test]
    fn test_truncated_frame() {
        assert_eq!(decode(&[]), Err(DecodeError::Truncated));
        assert_eq!(decode(&[2u8, 0]), Err(DecodeError::Truncated));
        // Auth frame cut inside the login string.
        let frame = encode(&Packet::Auth {
            login: "admin".to_string(),
            password: "pw".to_string(),
            node: "node".to_string(),
        }, 1).unwrap();
        assert_eq!(decode(&frame[..6]), Err(DecodeError::Truncated));
    }

    #[test]
    fn test_trailing_bytes_rejected() {
        let mut frame = encode(&Packet::Hello, 1).unwrap();
        frame.push(0);
        assert_eq!(decode(&frame), Err(DecodeError::TrailingBytes));
    }

    #[test]
    fn test_string_too_long_rejected() {
        let oversized = "x".repeat(u16::MAX as usize + 1);
        let result = encode(&Packet::Ok { message: oversized }, 1);
        assert_eq!(result, Err(EncodeError::StringTooLong));
    }

    #[test]
    fn test_frame_layout() {
        let frame = encode(&Packet::Heartbeat, 0x0102).unwrap();
        assert_eq!(frame, vec![4u8, 0x01, 0x02]);
    }

    proptest! {
        #[test]
        fn prop_round_trip_auth(login in ".{0,64}", password in ".{0,64}", node in "[a-zA-Z0-9_-]{4,32}") {
            let packet = Packet::Auth { login, password, node };
            let frame = encode(&packet, 77).unwrap();
            let (decoded, sequence) = decode(&frame).unwrap();
            prop_assert_eq!(decoded, packet);
            prop_assert_eq!(sequence, 77);
        }

        #[test]
        fn prop_round_trip_save(scope in "[a-z]{1,16}", holder in ".{1,32}", data in ".{0,256}", sequence in any::<u16>()) {
            let packet = Packet::SaveData { scope_id: scope, holder_id: holder, data };
            let frame = encode(&packet, sequence).unwrap();
            let (decoded, decoded_sequence) = decode(&frame).unwrap();
            prop_assert_eq!(decoded, packet);
            prop_assert_eq!(decoded_sequence, sequence);
        }

        #[test]
        fn prop_round_trip_leaderboard(start_from in any::<u32>(), ranks in proptest::collection::vec((any::<u32>(), "[a-z0-9]{1,16}", any::<f64>().prop_filter("finite", |v| v.is_finite())), 0..16)) {
            let entries: Vec<_> = ranks.into_iter()
                .map(|(rank, holder_id, value)| LeaderboardEntry { rank, holder_id, value })
                .collect();
            let packet = Packet::Leaderboard { start_from, entries, position_entry: None };
            let frame = encode(&packet, 3).unwrap();
            let (decoded, _) = decode(&frame).unwrap();
            prop_assert_eq!(decoded, packet);
        }

        #[test]
        fn prop_decode_never_panics(data in proptest::collection::vec(any::<u8>(), 0..512)) {
            let _ = decode(&data);
        }
    }
}

#[cfg(test)]
mod correlation_tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::time::Duration;
    use tokio::sync::mpsc;
    use crate::protocol::encoding::codec::{decode, encode};
    use crate::protocol::enums::close_code::CloseCode;
    use crate::protocol::enums::outbound_message::OutboundMessage;
    use crate::protocol::enums::packet::Packet;
    use crate::protocol::enums::packet_kind::PacketKind;
    use crate::protocol::enums::receive_result::ReceiveResult;
    use crate::protocol::structs::reaction::Reaction;
    use crate::protocol::structs::talker::Talker;

    fn test_talker() -> (Talker, mpsc::UnboundedReceiver<OutboundMessage>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Talker::new("127.0.0.1:7070".parse().unwrap(), sender), receiver)
    }

    #[tokio::test]
    async fn test_response_settles_before_timeout() {
        let (talker, _outbound) = test_talker();
        let received = Arc::new(AtomicBool::new(false));
        let timed_out = Arc::new(AtomicBool::new(false));
        let received_flag = received.clone();
        let timeout_flag = timed_out.clone();
        let transmission = talker.send(
            Packet::LoadData { scope_id: "s".to_string(), holder_id: "h".to_string() },
            Reaction::builder()
                .on(PacketKind::UserData, move |_| { received_flag.store(true, Ordering::SeqCst); })
                .timeout(Duration::from_millis(100), move || { timeout_flag.store(true, Ordering::SeqCst); }),
        ).unwrap();

        tokio::time::sleep(Duration::from_millis(10)).await;
        let response = encode(&Packet::UserData {
            scope_id: "s".to_string(),
            holder_id: "h".to_string(),
            data: "{}".to_string(),
        }, transmission.sequence.wrapping_add(1)).unwrap();
        assert!(matches!(talker.receive(&response), ReceiveResult::Response));
        transmission.settled().await;
        assert!(received.load(Ordering::SeqCst));

        // The cancelled timeout must never fire.
        tokio::time::sleep(Duration::from_millis(150)).await;
        assert!(!timed_out.load(Ordering::SeqCst));
        assert_eq!(talker.controller.pending_len(), 0);
    }

    #[tokio::test]
    async fn test_timeout_fires_without_response() {
        let (talker, _outbound) = test_talker();
        let received = Arc::new(AtomicBool::new(false));
        let timed_out = Arc::new(AtomicBool::new(false));
        let received_flag = received.clone();
        let timeout_flag = timed_out.clone();
        let transmission = talker.send(
            Packet::LoadData { scope_id: "s".to_string(), holder_id: "h".to_string() },
            Reaction::builder()
                .on(PacketKind::UserData, move |_| { received_flag.store(true, Ordering::SeqCst); })
                .timeout(Duration::from_millis(50), move || { timeout_flag.store(true, Ordering::SeqCst); }),
        ).unwrap();

        transmission.settled().await;
        assert!(timed_out.load(Ordering::SeqCst));
        assert!(!received.load(Ordering::SeqCst));
        assert_eq!(talker.controller.pending_len(), 0);

        // A straggler response has no observable effect on the transmission;
        // with the correlation entry gone it surfaces as an unsolicited frame.
        let response = encode(&Packet::UserData {
            scope_id: "s".to_string(),
            holder_id: "h".to_string(),
            data: "{}".to_string(),
        }, transmission.sequence.wrapping_add(1)).unwrap();
        assert!(matches!(talker.receive(&response), ReceiveResult::Request(_, _)));
        assert!(!received.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_escalating_timeouts_soft_then_response() {
        let (talker, _outbound) = test_talker();
        let soft_fired = Arc::new(AtomicUsize::new(0));
        let hard_fired = Arc::new(AtomicUsize::new(0));
        let received = Arc::new(AtomicBool::new(false));
        let soft = soft_fired.clone();
        let hard = hard_fired.clone();
        let received_flag = received.clone();
        let transmission = talker.send(
            Packet::RequestSync { scope_id: "s".to_string() },
            Reaction::builder()
                .on(PacketKind::BatchSaveData, move |_| { received_flag.store(true, Ordering::SeqCst); })
                .timeout(Duration::from_millis(20), move || { soft.fetch_add(1, Ordering::SeqCst); })
                .timeout(Duration::from_millis(120), move || { hard.fetch_add(1, Ordering::SeqCst); }),
        ).unwrap();

        // Soft timeout fires as a warning; the request keeps waiting.
        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(soft_fired.load(Ordering::SeqCst), 1);
        assert!(!transmission.is_settled());

        let response = encode(&Packet::BatchSaveData {
            scope_id: "s".to_string(),
            data: Default::default(),
        }, transmission.sequence.wrapping_add(1)).unwrap();
        assert!(matches!(talker.receive(&response), ReceiveResult::Response));
        assert!(received.load(Ordering::SeqCst));

        tokio::time::sleep(Duration::from_millis(120)).await;
        assert_eq!(hard_fired.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_pending_sequences_are_unique() {
        let (talker, _outbound) = test_talker();
        let mut sequences = std::collections::HashSet::new();
        for _ in 0..256 {
            let transmission = talker.send(Packet::Heartbeat, Reaction::builder()).unwrap();
            assert!(sequences.insert(transmission.sequence), "Sequence reuse among pending entries");
        }
        assert_eq!(talker.controller.pending_len(), 256);
    }

    #[tokio::test]
    async fn test_respond_uses_request_sequence_plus_one() {
        let (talker, mut outbound) = test_talker();
        talker.respond(41, Packet::Ok { message: "done".to_string() }).unwrap();
        match outbound.recv().await.unwrap() {
            OutboundMessage::Frame(frame) => {
                let (packet, sequence) = decode(&frame).unwrap();
                assert_eq!(sequence, 42);
                assert_eq!(packet, Packet::Ok { message: "done".to_string() });
            }
            other => panic!("Expected frame, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_wait_consumes_matching_unsolicited_packet() {
        let (talker, _outbound) = test_talker();
        let receiver = talker.wait(PacketKind::RequestSync, |packet| {
            matches!(packet, Packet::RequestSync { scope_id } if scope_id == "game")
        });
        // A non-matching scope passes through as a request.
        let other = encode(&Packet::RequestSync { scope_id: "other".to_string() }, 9).unwrap();
        assert!(matches!(talker.receive(&other), ReceiveResult::Request(_, _)));
        let matching = encode(&Packet::RequestSync { scope_id: "game".to_string() }, 10).unwrap();
        assert!(matches!(talker.receive(&matching), ReceiveResult::Consumed));
        let packet = receiver.await.unwrap();
        assert_eq!(packet, Packet::RequestSync { scope_id: "game".to_string() });
    }

    #[tokio::test]
    async fn test_close_cancels_pending_and_fires_exception() {
        let (talker, mut outbound) = test_talker();
        let timed_out = Arc::new(AtomicBool::new(false));
        let failed = Arc::new(AtomicBool::new(false));
        let timeout_flag = timed_out.clone();
        let failed_flag = failed.clone();
        let transmission = talker.send(
            Packet::Heartbeat,
            Reaction::builder()
                .timeout(Duration::from_millis(50), move || { timeout_flag.store(true, Ordering::SeqCst); })
                .on_exception(move |_| { failed_flag.store(true, Ordering::SeqCst); }),
        ).unwrap();
        let _ = outbound.recv().await;

        talker.close(CloseCode::Shutdown, "going away");
        assert!(!talker.is_open());
        assert!(transmission.is_settled());
        assert!(failed.load(Ordering::SeqCst));
        assert_eq!(talker.controller.pending_len(), 0);
        match outbound.recv().await.unwrap() {
            OutboundMessage::Close(code, _) => assert_eq!(code, CloseCode::Shutdown),
            other => panic!("Expected close, got {:?}", other),
        }

        // The cancelled timeout task must stay silent after close.
        tokio::time::sleep(Duration::from_millis(80)).await;
        assert!(!timed_out.load(Ordering::SeqCst));
        assert!(talker.send(Packet::Heartbeat, Reaction::builder()).is_err());
    }

    #[tokio::test]
    async fn test_blocked_talker_ignores_inbound() {
        let (talker, _outbound) = test_talker();
        talker.close_with_block(CloseCode::RateLimited, "too many requests");
        let frame = encode(&Packet::Heartbeat, 1).unwrap();
        assert!(matches!(talker.receive(&frame), ReceiveResult::Ignored));
    }

    #[tokio::test]
    async fn test_invalid_frame_is_isolated() {
        let (talker, _outbound) = test_talker();
        assert!(matches!(talker.receive(&[240u8, 0, 0]), ReceiveResult::Invalid(_)));
        // The connection stays usable.
        assert!(talker.is_open());
        let frame = encode(&Packet::Heartbeat, 2).unwrap();
        assert!(matches!(talker.receive(&frame), ReceiveResult::Request(_, _)));
    }

    #[tokio::test]
    async fn test_panicking_handler_reaches_exception_handler() {
        let (talker, _outbound) = test_talker();
        let failed = Arc::new(AtomicBool::new(false));
        let failed_flag = failed.clone();
        let transmission = talker.send(
            Packet::Heartbeat,
            Reaction::builder()
                .on(PacketKind::HeartbeatAck, |_| panic!("handler exploded"))
                .on_exception(move |_| { failed_flag.store(true, Ordering::SeqCst); }),
        ).unwrap();
        let response = encode(&Packet::HeartbeatAck, transmission.sequence.wrapping_add(1)).unwrap();
        assert!(matches!(talker.receive(&response), ReceiveResult::Response));
        assert!(failed.load(Ordering::SeqCst));
        assert!(transmission.is_settled());
    }
}
