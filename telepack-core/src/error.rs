//! Error types for Telepack operations
//!
//! The binary codec itself never fails: out-of-range reads yield zero and
//! out-of-range writes are dropped. Errors only arise when validating inputs
//! (shapes, strict slice decoding) and in the JSON mirror.

use alloc::string::String;

/// Errors that can occur during Telepack operations
#[cfg_attr(feature = "std", derive(thiserror::Error))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// A shape declared a field width outside 1..=32
    #[cfg_attr(feature = "std", error("Invalid field width {width} at index {index}: expected 1..=32"))]
    InvalidShape {
        /// Position of the offending width in the shape.
        index: usize,
        /// The offending width.
        width: u8,
    },

    /// Incomplete frame - not enough data
    #[cfg_attr(feature = "std", error("Incomplete frame: expected {expected} bytes, got {actual}"))]
    IncompleteFrame {
        /// The number of bytes expected.
        expected: usize,
        /// The number of bytes actually found.
        actual: usize,
    },

    /// Packet type name not present in the type table
    #[cfg_attr(feature = "std", error("Unknown packet type: {0:?}"))]
    UnknownPacketType(String),

    /// Serialization error
    #[cfg_attr(feature = "std", error("Serialization error: {0}"))]
    Serialization(String),
}

#[cfg(feature = "json")]
impl From<serde_json::Error> for CodecError {
    fn from(err: serde_json::Error) -> Self {
        CodecError::Serialization(err.to_string())
    }
}
