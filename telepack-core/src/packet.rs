//! The fixed 8-byte packet frame
//!
//! Layout, bit 0 first (see [`crate::bits`] for bit addressing):
//!
//! | Field | Bits  | Encoding          |
//! |-------|-------|-------------------|
//! | type  | 0–2   | [`PacketType`]    |
//! | id    | 3–9   | raw integer       |
//! | data1 | 10–27 | [`crate::float18`]|
//! | data2 | 28–45 | [`crate::float18`]|
//! | data3 | 46–63 | [`crate::float18`]|

use crate::constants::{FRAME_SIZE, MAX_PACKET_ID, PACKET_FIELD_WIDTHS, TYPE_BITS};
use crate::error::CodecError;
use crate::float18::{decode_float18, encode_float18};
use crate::segment::{read_segments, write_segments, PACKET_SHAPE};
use alloc::vec::Vec;
use bytes::{BufMut, Bytes, BytesMut};
use serde::{Deserialize, Serialize};

#[cfg(feature = "logging")]
use tracing::debug;

/// Wire code of [`PacketType::State`]
pub const STATE_CODE: u8 = 2;

/// Known packet types: wire code and display name
pub static PACKET_TYPES: [(u8, &str); 1] = [(STATE_CODE, "State")];

/// Display names of codes missing from [`PACKET_TYPES`], indexed by code
///
/// The code is part of the name so that it survives a trip through the JSON
/// mirror.
pub static UNKNOWN_TYPE_NAMES: [&str; 8] = [
    "Unknown(0)",
    "Unknown(1)",
    "Unknown(2)",
    "Unknown(3)",
    "Unknown(4)",
    "Unknown(5)",
    "Unknown(6)",
    "Unknown(7)",
];

const TYPE_MASK: u8 = (1 << TYPE_BITS) - 1;
const FIELD_COUNT: usize = PACKET_FIELD_WIDTHS.len();

/// A 3-bit wire code with no entry in [`PACKET_TYPES`]
///
/// Only [`PacketType::from_code`] builds one, so it never holds a known code
/// or a value wider than 3 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnknownCode(u8);

impl UnknownCode {
    /// The wire code, in 0..=7
    pub const fn get(self) -> u8 {
        self.0
    }
}

/// Packet type tag carried in the low 3 bits of a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum PacketType {
    /// Vehicle state telemetry
    State,
    /// A code missing from the type table, kept so the frame re-encodes
    /// unchanged
    Unknown(UnknownCode),
}

impl PacketType {
    /// Map a wire code to a type, keeping only the low 3 bits
    pub const fn from_code(code: u8) -> Self {
        match code & TYPE_MASK {
            STATE_CODE => PacketType::State,
            other => PacketType::Unknown(UnknownCode(other)),
        }
    }

    /// Wire code of this type
    pub const fn code(self) -> u8 {
        match self {
            PacketType::State => STATE_CODE,
            PacketType::Unknown(code) => code.0,
        }
    }

    /// True for types listed in [`PACKET_TYPES`]
    pub const fn is_known(self) -> bool {
        !matches!(self, PacketType::Unknown(_))
    }

    /// Display name from [`PACKET_TYPES`], or from [`UNKNOWN_TYPE_NAMES`]
    pub fn name(self) -> &'static str {
        let code = self.code();
        PACKET_TYPES
            .iter()
            .find(|(c, _)| *c == code)
            .map_or(UNKNOWN_TYPE_NAMES[usize::from(code & TYPE_MASK)], |(_, name)| *name)
    }

    /// Look up a type by display name
    ///
    /// `"Unknown(n)"` only resolves for codes missing from the table, so a
    /// known type is never reachable under an unknown name.
    pub fn from_name(name: &str) -> Option<Self> {
        if let Some((code, _)) = PACKET_TYPES.iter().find(|(_, n)| *n == name) {
            return Some(Self::from_code(*code));
        }

        UNKNOWN_TYPE_NAMES
            .iter()
            .position(|n| *n == name)
            .map(|code| Self::from_code(code as u8))
            .filter(|packet_type| !packet_type.is_known())
    }
}

impl From<u8> for PacketType {
    fn from(code: u8) -> Self {
        Self::from_code(code)
    }
}

impl From<PacketType> for u8 {
    fn from(packet_type: PacketType) -> Self {
        packet_type.code()
    }
}

impl core::fmt::Display for PacketType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Display name of a packet type
pub fn type_to_string(packet_type: PacketType) -> &'static str {
    packet_type.name()
}

/// Packet type with the given display name, if the table has one
pub fn string_to_type(name: &str) -> Option<PacketType> {
    PacketType::from_name(name)
}

/// A decoded packet
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CommPacket {
    /// Type tag
    pub packet_type: PacketType,

    /// Identifier; only the low 7 bits (0..=127) reach the wire
    pub id: u8,

    /// Three readings, quantized to 18-bit minifloats on the wire
    pub data: [f32; 3],
}

impl CommPacket {
    /// Create a packet
    pub fn new(packet_type: PacketType, id: u8, data: [f32; 3]) -> Self {
        Self {
            packet_type,
            id,
            data,
        }
    }

    /// Decode a frame, see [`read_packet`]
    pub fn from_bytes(buf: &[u8; FRAME_SIZE]) -> Self {
        read_packet(buf)
    }

    /// Encode into a frame, see [`write_packet`]
    pub fn to_bytes(&self) -> [u8; FRAME_SIZE] {
        write_packet(self)
    }

    /// Decode the first frame of `data`, failing if it holds fewer than 8 bytes
    pub fn try_from_slice(data: &[u8]) -> Result<Self, CodecError> {
        if data.len() < FRAME_SIZE {
            return Err(CodecError::IncompleteFrame {
                expected: FRAME_SIZE,
                actual: data.len(),
            });
        }

        Ok(decode_packet(data))
    }

    /// The packet as it reads back after one trip over the wire
    pub fn quantized(&self) -> Self {
        read_packet(&write_packet(self))
    }
}

/// Decode an 8-byte frame
pub fn read_packet(buf: &[u8; FRAME_SIZE]) -> CommPacket {
    decode_packet(buf)
}

/// Encode a packet into a fresh 8-byte frame
///
/// Identifiers above 127 are truncated to their low 7 bits. Readings are
/// quantized with [`encode_float18`].
pub fn write_packet(packet: &CommPacket) -> [u8; FRAME_SIZE] {
    if packet.id > MAX_PACKET_ID {
        #[cfg(feature = "logging")]
        debug!(
            "Packet id {} exceeds {}, truncating to {}",
            packet.id,
            MAX_PACKET_ID,
            packet.id & MAX_PACKET_ID
        );
    }

    let [d1, d2, d3] = packet.data;
    let fields = [
        u32::from(packet.packet_type.code()),
        u32::from(packet.id),
        encode_float18(d1),
        encode_float18(d2),
        encode_float18(d3),
    ];

    let mut buf = [0u8; FRAME_SIZE];
    write_segments(&mut buf, &PACKET_SHAPE, &fields);
    buf
}

/// Decode the first frame of `data`, zero-filling any missing bytes
///
/// Bytes past the first 8 are ignored.
pub fn decode_packet(data: &[u8]) -> CommPacket {
    let mut fields = [0u32; FIELD_COUNT];
    for (slot, value) in fields.iter_mut().zip(read_segments(data, &PACKET_SHAPE)) {
        *slot = value;
    }

    let [kind, id, d1, d2, d3] = fields;
    CommPacket {
        // Both fit their widths: read_segments masks to 3 and 7 bits
        packet_type: PacketType::from_code(kind as u8),
        id: id as u8,
        data: [decode_float18(d1), decode_float18(d2), decode_float18(d3)],
    }
}

/// Decode back-to-back frames
///
/// A trailing partial frame is zero-filled and still decoded.
pub fn decode_stream(data: &[u8]) -> Vec<CommPacket> {
    let tail = data.len() % FRAME_SIZE;
    if tail != 0 {
        #[cfg(feature = "logging")]
        debug!("Trailing partial frame of {} bytes, zero-filling", tail);
    }

    data.chunks(FRAME_SIZE).map(decode_packet).collect()
}

/// Encode packets into back-to-back frames
pub fn encode_stream(packets: &[CommPacket]) -> Bytes {
    let mut buf = BytesMut::with_capacity(packets.len() * FRAME_SIZE);
    for packet in packets {
        buf.put_slice(&write_packet(packet));
    }
    buf.freeze()
}
