//! Constants and limits for the Telepack frame format

/// Size of one packet frame in bytes
pub const FRAME_SIZE: usize = 8;

/// Size of one packet frame in bits
pub const FRAME_BITS: usize = FRAME_SIZE * 8;

/// Widest field a shape may declare (the width of a `u32`)
pub const MAX_FIELD_WIDTH: u8 = 32;

/// Field widths of the packet frame: type, id, data1, data2, data3
pub const PACKET_FIELD_WIDTHS: [u8; 5] = [3, 7, 18, 18, 18];

/// Width of the packet type field in bits
pub const TYPE_BITS: u8 = 3;

/// Width of the packet identifier field in bits
pub const ID_BITS: u8 = 7;

/// Largest identifier that survives encoding unchanged
pub const MAX_PACKET_ID: u8 = (1 << ID_BITS) - 1;

/// Width of a minifloat code in bits
pub const FLOAT18_BITS: u32 = 18;

/// Mask covering all bits of a minifloat code
pub const FLOAT18_MASK: u32 = (1 << FLOAT18_BITS) - 1;

/// Number of mantissa bits in a minifloat code
pub const FLOAT18_MANTISSA_BITS: u32 = 12;

/// Number of exponent bits in a minifloat code
pub const FLOAT18_EXPONENT_BITS: u32 = 5;

/// Exponent bias of a minifloat code
pub const FLOAT18_BIAS: i32 = 15;

/// Position of the sign bit in a minifloat code
pub const FLOAT18_SIGN_BIT: u32 = FLOAT18_BITS - 1;
