use std::collections::BTreeMap;
use crate::protocol::enums::error_code::ErrorCode;
use crate::protocol::enums::error_level::ErrorLevel;
use crate::protocol::structs::leaderboard_entry::LeaderboardEntry;

/// Every frame the hub and its nodes exchange, tagged on the wire by a
/// one-byte type id. Holder data travels as a JSON object string.
#[derive(Debug, Clone, PartialEq)]
pub enum Packet {
    Hello,
    Auth { login: String, password: String, node: String },
    Ready { heartbeat_interval_ms: u32 },
    Heartbeat,
    HeartbeatAck,
    LoadData { scope_id: String, holder_id: String },
    UserData { scope_id: String, holder_id: String, data: String },
    SaveData { scope_id: String, holder_id: String, data: String },
    BatchSaveData { scope_id: String, data: BTreeMap<String, String> },
    StopSession { scope_id: String, holder_id: String },
    EndSession { scope_id: String, holder_id: String, data: Option<String> },
    RequestSync { scope_id: String },
    RequestLeaderboard { scope_id: String, field: String, start_from: u32, limit: u32, position_holder_id: Option<String> },
    Leaderboard { start_from: u32, entries: Vec<LeaderboardEntry>, position_entry: Option<LeaderboardEntry> },
    RequestTopPosition { scope_id: String, holder_id: String, field: String },
    TopPosition { entry: Option<LeaderboardEntry> },
    Error { level: ErrorLevel, code: ErrorCode, message: String },
    Ok { message: String },
}
