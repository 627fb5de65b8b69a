//! Bit-range access over a byte buffer
//!
//! The buffer is treated as one continuous bit sequence: bit `p` lives in
//! byte `p / 8` at in-byte position `p % 8`, least-significant bit first,
//! lowest-addressed byte first.
//!
//! Reads past the end of the buffer see zeros. Writes past the end are
//! dropped. Neither ever panics or resizes the buffer.

use crate::constants::MAX_FIELD_WIDTH;

/// An inclusive range of bit positions, normalized so that `lo <= hi`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitRange {
    lo: usize,
    hi: usize,
}

impl BitRange {
    /// Create a range covering positions `a..=b` (or `b..=a`)
    pub const fn new(a: usize, b: usize) -> Self {
        if a <= b {
            Self { lo: a, hi: b }
        } else {
            Self { lo: b, hi: a }
        }
    }

    /// Create a range of `width` bits starting at `offset`
    ///
    /// Returns `None` for a zero width or when the range would run past
    /// `usize::MAX`.
    pub fn from_offset(offset: usize, width: usize) -> Option<Self> {
        let hi = offset.checked_add(width.checked_sub(1)?)?;
        Some(Self { lo: offset, hi })
    }

    /// Lowest bit position (contributes the least-significant output bit)
    pub const fn lo(&self) -> usize {
        self.lo
    }

    /// Highest bit position (contributes the most-significant output bit)
    pub const fn hi(&self) -> usize {
        self.hi
    }

    /// Number of bits covered by the range
    pub const fn width(&self) -> usize {
        self.hi - self.lo + 1
    }
}

/// Read the bits at positions `a..=b` as an unsigned integer
///
/// The argument order does not matter. The bit at the lower position becomes
/// the least-significant bit of the result. Positions beyond the buffer read
/// as zero.
///
/// Only the lowest 32 positions of the range are read; callers must keep
/// individual fields at or below 32 bits.
pub fn read_bits(buf: &[u8], a: usize, b: usize) -> u32 {
    read_range(buf, BitRange::new(a, b))
}

/// Read the bits covered by `range`, see [`read_bits`]
pub fn read_range(buf: &[u8], range: BitRange) -> u32 {
    let mut value = 0u32;

    for (i, pos) in (range.lo..=range.hi)
        .take(MAX_FIELD_WIDTH as usize)
        .enumerate()
    {
        // Everything past the last byte is zero
        let Some(byte) = buf.get(pos / 8) else {
            break;
        };
        value |= u32::from((byte >> (pos % 8)) & 1) << i;
    }

    value
}

/// Write the low `width` bits of `value` starting at bit `offset`
///
/// Bits of `value` above `width` are ignored, and `width` is capped at 32.
/// Positions beyond the buffer are silently dropped.
pub fn set_bits(buf: &mut [u8], value: u32, offset: usize, width: usize) {
    for i in 0..width.min(MAX_FIELD_WIDTH as usize) {
        let Some(pos) = offset.checked_add(i) else {
            break;
        };
        let Some(byte) = buf.get_mut(pos / 8) else {
            break;
        };

        let mask = 1u8 << (pos % 8);
        if (value >> i) & 1 == 1 {
            *byte |= mask;
        } else {
            *byte &= !mask;
        }
    }
}
