use std::collections::BTreeMap;
use std::io::{Cursor, Read, Write};
use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use crate::protocol::enums::decode_error::DecodeError;
use crate::protocol::enums::encode_error::EncodeError;
use crate::protocol::enums::error_code::ErrorCode;
use crate::protocol::enums::error_level::ErrorLevel;
use crate::protocol::enums::packet::Packet;
use crate::protocol::enums::packet_kind::PacketKind;
use crate::protocol::structs::leaderboard_entry::LeaderboardEntry;

/// Serializes a packet into one wire frame carrying the given sequence.
pub fn encode(packet: &Packet, sequence: u16) -> Result<Vec<u8>, EncodeError> {
    let mut buffer: Vec<u8> = Vec::with_capacity(64);
    let _ = buffer.write_u8(packet.kind() as u8);
    let _ = buffer.write_u16::<BigEndian>(sequence);
    match packet {
        Packet::Hello | Packet::Heartbeat | Packet::HeartbeatAck => {}
        Packet::Auth { login, password, node } => {
            write_string(&mut buffer, login)?;
            write_string(&mut buffer, password)?;
            write_string(&mut buffer, node)?;
        }
        Packet::Ready { heartbeat_interval_ms } => {
            let _ = buffer.write_u32::<BigEndian>(*heartbeat_interval_ms);
        }
        Packet::LoadData { scope_id, holder_id } | Packet::StopSession { scope_id, holder_id } => {
            write_string(&mut buffer, scope_id)?;
            write_string(&mut buffer, holder_id)?;
        }
        Packet::UserData { scope_id, holder_id, data } | Packet::SaveData { scope_id, holder_id, data } => {
            write_string(&mut buffer, scope_id)?;
            write_string(&mut buffer, holder_id)?;
            write_string(&mut buffer, data)?;
        }
        Packet::BatchSaveData { scope_id, data } => {
            write_string(&mut buffer, scope_id)?;
            write_map(&mut buffer, data)?;
        }
        Packet::EndSession { scope_id, holder_id, data } => {
            write_string(&mut buffer, scope_id)?;
            write_string(&mut buffer, holder_id)?;
            write_optional_string(&mut buffer, data.as_deref())?;
        }
        Packet::RequestSync { scope_id } => {
            write_string(&mut buffer, scope_id)?;
        }
        Packet::RequestLeaderboard { scope_id, field, start_from, limit, position_holder_id } => {
            write_string(&mut buffer, scope_id)?;
            write_string(&mut buffer, field)?;
            let _ = buffer.write_u32::<BigEndian>(*start_from);
            let _ = buffer.write_u32::<BigEndian>(*limit);
            write_optional_string(&mut buffer, position_holder_id.as_deref())?;
        }
        Packet::Leaderboard { start_from, entries, position_entry } => {
            let _ = buffer.write_u32::<BigEndian>(*start_from);
            if entries.len() > u16::MAX as usize {
                return Err(EncodeError::ListTooLarge);
            }
            let _ = buffer.write_u16::<BigEndian>(entries.len() as u16);
            for entry in entries {
                write_entry(&mut buffer, entry)?;
            }
            match position_entry {
                None => { let _ = buffer.write_u8(0); }
                Some(entry) => {
                    let _ = buffer.write_u8(1);
                    write_entry(&mut buffer, entry)?;
                }
            }
        }
        Packet::RequestTopPosition { scope_id, holder_id, field } => {
            write_string(&mut buffer, scope_id)?;
            write_string(&mut buffer, holder_id)?;
            write_string(&mut buffer, field)?;
        }
        Packet::TopPosition { entry } => {
            match entry {
                None => { let _ = buffer.write_u8(0); }
                Some(entry) => {
                    let _ = buffer.write_u8(1);
                    write_entry(&mut buffer, entry)?;
                }
            }
        }
        Packet::Error { level, code, message } => {
            let _ = buffer.write_u8(*level as u8);
            let _ = buffer.write_u8(*code as u8);
            write_string(&mut buffer, message)?;
        }
        Packet::Ok { message } => {
            write_string(&mut buffer, message)?;
        }
    }
    Ok(buffer)
}

/// Parses one wire frame back into a packet and its sequence.
///
/// An unknown type id or a malformed payload yields an error the caller
/// treats as a dropped frame, never as a connection failure.
pub fn decode(data: &[u8]) -> Result<(Packet, u16), DecodeError> {
    let mut cursor = Cursor::new(data);
    let type_id = cursor.read_u8().map_err(|_| DecodeError::Truncated)?;
    let kind = PacketKind::from_u8(type_id).ok_or(DecodeError::UnknownPacketType(type_id))?;
    let sequence = cursor.read_u16::<BigEndian>().map_err(|_| DecodeError::Truncated)?;
    let packet = match kind {
        PacketKind::Hello => Packet::Hello,
        PacketKind::Heartbeat => Packet::Heartbeat,
        PacketKind::HeartbeatAck => Packet::HeartbeatAck,
        PacketKind::Auth => Packet::Auth {
            login: read_string(&mut cursor)?,
            password: read_string(&mut cursor)?,
            node: read_string(&mut cursor)?,
        },
        PacketKind::Ready => Packet::Ready {
            heartbeat_interval_ms: cursor.read_u32::<BigEndian>().map_err(|_| DecodeError::Truncated)?,
        },
        PacketKind::LoadData => Packet::LoadData {
            scope_id: read_string(&mut cursor)?,
            holder_id: read_string(&mut cursor)?,
        },
        PacketKind::UserData => Packet::UserData {
            scope_id: read_string(&mut cursor)?,
            holder_id: read_string(&mut cursor)?,
            data: read_string(&mut cursor)?,
        },
        PacketKind::SaveData => Packet::SaveData {
            scope_id: read_string(&mut cursor)?,
            holder_id: read_string(&mut cursor)?,
            data: read_string(&mut cursor)?,
        },
        PacketKind::BatchSaveData => Packet::BatchSaveData {
            scope_id: read_string(&mut cursor)?,
            data: read_map(&mut cursor)?,
        },
        PacketKind::StopSession => Packet::StopSession {
            scope_id: read_string(&mut cursor)?,
            holder_id: read_string(&mut cursor)?,
        },
        PacketKind::EndSession => Packet::EndSession {
            scope_id: read_string(&mut cursor)?,
            holder_id: read_string(&mut cursor)?,
            data: read_optional_string(&mut cursor)?,
        },
        PacketKind::RequestSync => Packet::RequestSync {
            scope_id: read_string(&mut cursor)?,
        },
        PacketKind::RequestLeaderboard => Packet::RequestLeaderboard {
            scope_id: read_string(&mut cursor)?,
            field: read_string(&mut cursor)?,
            start_from: cursor.read_u32::<BigEndian>().map_err(|_| DecodeError::Truncated)?,
            limit: cursor.read_u32::<BigEndian>().map_err(|_| DecodeError::Truncated)?,
            position_holder_id: read_optional_string(&mut cursor)?,
        },
        PacketKind::Leaderboard => {
            let start_from = cursor.read_u32::<BigEndian>().map_err(|_| DecodeError::Truncated)?;
            let count = cursor.read_u16::<BigEndian>().map_err(|_| DecodeError::Truncated)?;
            let mut entries = Vec::with_capacity(count as usize);
            for _ in 0..count {
                entries.push(read_entry(&mut cursor)?);
            }
            let position_entry = match cursor.read_u8().map_err(|_| DecodeError::Truncated)? {
                0 => None,
                1 => Some(read_entry(&mut cursor)?),
                flag => return Err(DecodeError::InvalidFlag(flag)),
            };
            Packet::Leaderboard { start_from, entries, position_entry }
        }
        PacketKind::RequestTopPosition => Packet::RequestTopPosition {
            scope_id: read_string(&mut cursor)?,
            holder_id: read_string(&mut cursor)?,
            field: read_string(&mut cursor)?,
        },
        PacketKind::TopPosition => {
            let entry = match cursor.read_u8().map_err(|_| DecodeError::Truncated)? {
                0 => None,
                1 => Some(read_entry(&mut cursor)?),
                flag => return Err(DecodeError::InvalidFlag(flag)),
            };
            Packet::TopPosition { entry }
        }
        PacketKind::Error => {
            let level_raw = cursor.read_u8().map_err(|_| DecodeError::Truncated)?;
            let level = ErrorLevel::from_u8(level_raw).ok_or(DecodeError::UnknownErrorLevel(level_raw))?;
            let code_raw = cursor.read_u8().map_err(|_| DecodeError::Truncated)?;
            let code = ErrorCode::from_u8(code_raw).ok_or(DecodeError::UnknownErrorCode(code_raw))?;
            Packet::Error {
                level,
                code,
                message: read_string(&mut cursor)?,
            }
        }
        PacketKind::Ok => Packet::Ok {
            message: read_string(&mut cursor)?,
        },
    };
    if cursor.position() != data.len() as u64 {
        return Err(DecodeError::TrailingBytes);
    }
    Ok((packet, sequence))
}

fn write_string(buffer: &mut Vec<u8>, value: &str) -> Result<(), EncodeError> {
    let bytes = value.as_bytes();
    if bytes.len() > u16::MAX as usize {
        return Err(EncodeError::StringTooLong);
    }
    let _ = buffer.write_u16::<BigEndian>(bytes.len() as u16);
    let _ = buffer.write_all(bytes);
    Ok(())
}

fn write_optional_string(buffer: &mut Vec<u8>, value: Option<&str>) -> Result<(), EncodeError> {
    match value {
        None => { let _ = buffer.write_u8(0); Ok(()) }
        Some(value) => {
            let _ = buffer.write_u8(1);
            write_string(buffer, value)
        }
    }
}

fn write_map(buffer: &mut Vec<u8>, map: &BTreeMap<String, String>) -> Result<(), EncodeError> {
    if map.len() > u16::MAX as usize {
        return Err(EncodeError::MapTooLarge);
    }
    let _ = buffer.write_u16::<BigEndian>(map.len() as u16);
    for (key, value) in map {
        write_string(buffer, key)?;
        write_string(buffer, value)?;
    }
    Ok(())
}

fn write_entry(buffer: &mut Vec<u8>, entry: &LeaderboardEntry) -> Result<(), EncodeError> {
    let _ = buffer.write_u32::<BigEndian>(entry.rank);
    write_string(buffer, &entry.holder_id)?;
    let _ = buffer.write_f64::<BigEndian>(entry.value);
    Ok(())
}

fn read_string(cursor: &mut Cursor<&[u8]>) -> Result<String, DecodeError> {
    let length = cursor.read_u16::<BigEndian>().map_err(|_| DecodeError::Truncated)? as usize;
    let mut bytes = vec![0u8; length];
    cursor.read_exact(&mut bytes).map_err(|_| DecodeError::Truncated)?;
    String::from_utf8(bytes).map_err(|_| DecodeError::InvalidUtf8)
}

fn read_optional_string(cursor: &mut Cursor<&[u8]>) -> Result<Option<String>, DecodeError> {
    match cursor.read_u8().map_err(|_| DecodeError::Truncated)? {
        0 => Ok(None),
        1 => Ok(Some(read_string(cursor)?)),
        flag => Err(DecodeError::InvalidFlag(flag)),
    }
}

fn read_map(cursor: &mut Cursor<&[u8]>) -> Result<BTreeMap<String, String>, DecodeError> {
    let count = cursor.read_u16::<BigEndian>().map_err(|_| DecodeError::Truncated)?;
    let mut map = BTreeMap::new();
    for _ in 0..count {
        let key = read_string(cursor)?;
        let value = read_string(cursor)?;
        map.insert(key, value);
    }
    Ok(map)
}

fn read_entry(cursor: &mut Cursor<&[u8]>) -> Result<LeaderboardEntry, DecodeError> {
    Ok(LeaderboardEntry {
        rank: cursor.read_u32::<BigEndian>().map_err(|_| DecodeError::Truncated)?,
        holder_id: read_string(cursor)?,
        value: cursor.read_f64::<BigEndian>().map_err(|_| DecodeError::Truncated)?,
    })
}
