//! # Telepack Core
//!
//! Bit-packed 8-byte telemetry frames for bandwidth-constrained links.
//!
//! ## Modules
//!
//! - `constants`: Frame layout constants and limits
//! - `bits`: Bit-range reads and writes over a byte buffer
//! - `segment`: Packing ordered lists of bit-fields (`Shape`)
//! - `float18`: 18-bit minifloat quantization
//! - `packet`: The packet frame (`CommPacket`, `PacketType`)
//! - `mirror`: JSON mirror of decoded packets (feature `json`)
//!
//! ## Example
//!
//! ```
//! use telepack_core::{read_packet, write_packet, PacketType};
//!
//! let frame = [178, 157, 26, 78, 167, 88, 234, 94];
//! let packet = read_packet(&frame);
//!
//! assert_eq!(packet.packet_type, PacketType::State);
//! assert_eq!(packet.id, 54);
//! assert_eq!(packet.data, [-724.875, 846.5, 442.5625]);
//! assert_eq!(write_packet(&packet), frame);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod bits;
pub mod constants;
pub mod error;
pub mod float18;
#[cfg(feature = "json")]
pub mod mirror;
pub mod packet;
pub mod segment;

// Re-export commonly used types
pub use bits::{read_bits, set_bits, BitRange};
pub use error::CodecError;
pub use float18::{decode_float18, encode_float18, Float18};
pub use packet::{
    decode_packet, decode_stream, encode_stream, read_packet, string_to_type, type_to_string,
    write_packet, CommPacket, PacketType, UnknownCode,
};
pub use segment::{read_segments, write_segments, Shape, PACKET_SHAPE};

/// Result type alias for Telepack operations
pub type Result<T> = core::result::Result<T, CodecError>;
