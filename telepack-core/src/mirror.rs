//! JSON mirror of decoded packets
//!
//! Each packet is written as a record stamped with its capture time:
//!
//! ```json
//! {"time":1700000000000,"type":"State","id":54,"data":[-724.875,846.5,442.5625]}
//! ```
//!
//! Older producers wrote the identifier under the key `name`; it is still
//! accepted when reading.

use crate::error::CodecError;
use crate::packet::{string_to_type, type_to_string, CommPacket};
use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// A packet as it appears in the JSON mirror
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PacketRecord {
    /// Capture time, milliseconds since the Unix epoch
    pub time: i64,

    /// Display name of the packet type
    #[serde(rename = "type")]
    pub packet_type: String,

    /// Packet identifier
    #[serde(alias = "name")]
    pub id: u8,

    /// The three readings, in field order
    pub data: [f32; 3],
}

impl PacketRecord {
    /// Build a record for `packet` captured at `time` (epoch milliseconds)
    pub fn from_packet(packet: &CommPacket, time: i64) -> Self {
        Self {
            time,
            packet_type: type_to_string(packet.packet_type).into(),
            id: packet.id,
            data: packet.data,
        }
    }

    /// Build a record for `packet` stamped with the current time
    pub fn capture(packet: &CommPacket) -> Self {
        Self::from_packet(packet, current_time_ms())
    }

    /// Reconstruct the packet
    ///
    /// Fails with [`CodecError::UnknownPacketType`] when the type name is not
    /// in the type table.
    pub fn to_packet(&self) -> Result<CommPacket, CodecError> {
        let packet_type = string_to_type(&self.packet_type)
            .ok_or_else(|| CodecError::UnknownPacketType(self.packet_type.clone()))?;

        Ok(CommPacket::new(packet_type, self.id, self.data))
    }
}

/// Milliseconds since the Unix epoch, or 0 if the clock is before it
///
/// Saturates at `i64::MAX`.
pub fn current_time_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, millis_saturating)
}

fn millis_saturating(elapsed: Duration) -> i64 {
    i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX)
}

/// Serialize `packet` as a JSON record stamped with the current time
pub fn encode_json(packet: &CommPacket) -> Result<String, CodecError> {
    encode_json_at(packet, current_time_ms())
}

/// Serialize `packet` as a JSON record with an explicit capture time
pub fn encode_json_at(packet: &CommPacket, time: i64) -> Result<String, CodecError> {
    Ok(serde_json::to_string(&PacketRecord::from_packet(packet, time))?)
}

/// Parse a JSON record without resolving the packet type
pub fn decode_record(text: &str) -> Result<PacketRecord, CodecError> {
    Ok(serde_json::from_str(text)?)
}

/// Parse a JSON record back into a packet
pub fn decode_json(text: &str) -> Result<CommPacket, CodecError> {
    decode_record(text)?.to_packet()
}
