use crate::protocol::enums::packet_kind::PacketKind;

impl PacketKind {
    pub fn from_u8(value: u8) -> Option<PacketKind> {
        match value {
            1 => Some(PacketKind::Hello),
            2 => Some(PacketKind::Auth),
            3 => Some(PacketKind::Ready),
            4 => Some(PacketKind::Heartbeat),
            5 => Some(PacketKind::HeartbeatAck),
            6 => Some(PacketKind::LoadData),
            7 => Some(PacketKind::UserData),
            8 => Some(PacketKind::SaveData),
            9 => Some(PacketKind::BatchSaveData),
            10 => Some(PacketKind::StopSession),
            11 => Some(PacketKind::EndSession),
            12 => Some(PacketKind::RequestSync),
            13 => Some(PacketKind::RequestLeaderboard),
            14 => Some(PacketKind::Leaderboard),
            15 => Some(PacketKind::RequestTopPosition),
            16 => Some(PacketKind::TopPosition),
            17 => Some(PacketKind::Error),
            18 => Some(PacketKind::Ok),
            _ => None,
        }
    }
}
