use crate::protocol::enums::packet::Packet;
use crate::protocol::enums::packet_kind::PacketKind;

impl Packet {
    /// The wire discriminant of this packet.
    pub fn kind(&self) -> PacketKind {
        match self {
            Packet::Hello => PacketKind::Hello,
            Packet::Auth { .. } => PacketKind::Auth,
            Packet::Ready { .. } => PacketKind::Ready,
            Packet::Heartbeat => PacketKind::Heartbeat,
            Packet::HeartbeatAck => PacketKind::HeartbeatAck,
            Packet::LoadData { .. } => PacketKind::LoadData,
            Packet::UserData { .. } => PacketKind::UserData,
            Packet::SaveData { .. } => PacketKind::SaveData,
            Packet::BatchSaveData { .. } => PacketKind::BatchSaveData,
            Packet::StopSession { .. } => PacketKind::StopSession,
            Packet::EndSession { .. } => PacketKind::EndSession,
            Packet::RequestSync { .. } => PacketKind::RequestSync,
            Packet::RequestLeaderboard { .. } => PacketKind::RequestLeaderboard,
            Packet::Leaderboard { .. } => PacketKind::Leaderboard,
            Packet::RequestTopPosition { .. } => PacketKind::RequestTopPosition,
            Packet::TopPosition { .. } => PacketKind::TopPosition,
            Packet::Error { .. } => PacketKind::Error,
            Packet::Ok { .. } => PacketKind::Ok,
        }
    }
}
