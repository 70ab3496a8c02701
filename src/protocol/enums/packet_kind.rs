/// Fieldless packet discriminant, identical to the one-byte wire type id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PacketKind {
    Hello = 1,
    Auth = 2,
    Ready = 3,
    Heartbeat = 4,
    HeartbeatAck = 5,
    LoadData = 6,
    UserData = 7,
    SaveData = 8,
    BatchSaveData = 9,
    StopSession = 10,
    EndSession = 11,
    RequestSync = 12,
    RequestLeaderboard = 13,
    Leaderboard = 14,
    RequestTopPosition = 15,
    TopPosition = 16,
    Error = 17,
    Ok = 18,
}
