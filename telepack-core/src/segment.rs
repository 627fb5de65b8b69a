//! Segment codec: packs an ordered list of bit-fields back to back
//!
//! A [`Shape`] lists field widths. Fields are laid out consecutively starting
//! at bit 0 of the buffer, using the addressing rules of [`crate::bits`].

use crate::bits::{read_range, set_bits, BitRange};
use crate::constants::{MAX_FIELD_WIDTH, PACKET_FIELD_WIDTHS};
use crate::error::CodecError;
use alloc::vec::Vec;

/// Field layout of the packet frame: type(3), id(7), data1..data3(18 each)
pub const PACKET_SHAPE: Shape<'static> = Shape {
    widths: &PACKET_FIELD_WIDTHS,
};

/// An ordered sequence of field widths, each in 1..=32 bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape<'a> {
    widths: &'a [u8],
}

impl<'a> Shape<'a> {
    /// Create a shape, rejecting widths of zero or above 32
    pub fn new(widths: &'a [u8]) -> Result<Self, CodecError> {
        if let Some((index, &width)) = widths
            .iter()
            .enumerate()
            .find(|(_, w)| **w == 0 || **w > MAX_FIELD_WIDTH)
        {
            return Err(CodecError::InvalidShape { index, width });
        }

        Ok(Self { widths })
    }

    /// Field widths in layout order
    pub const fn widths(&self) -> &'a [u8] {
        self.widths
    }

    /// Number of fields
    pub const fn len(&self) -> usize {
        self.widths.len()
    }

    /// True when the shape has no fields
    pub const fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }

    /// Total number of bits covered by all fields
    pub fn bit_len(&self) -> usize {
        self.widths.iter().map(|&w| w as usize).sum()
    }

    /// Bit range of each field, in layout order
    pub fn fields(&self) -> impl Iterator<Item = BitRange> + 'a {
        self.widths.iter().scan(0usize, |cursor, &width| {
            let start = *cursor;
            *cursor = cursor.saturating_add(width as usize);
            Some(BitRange::new(start, start.saturating_add(width as usize - 1)))
        })
    }
}

/// Read every field of `shape` from `buf`
///
/// Always yields exactly `shape.len()` values. Fields that extend past the
/// end of the buffer are zero-filled; buffer bits past the shape are unused.
pub fn read_segments(buf: &[u8], shape: &Shape<'_>) -> Vec<u32> {
    shape.fields().map(|range| read_range(buf, range)).collect()
}

/// Write `values` into the fields of `shape`
///
/// Values are paired with fields in order. If `values` is shorter than the
/// shape the remaining fields are left untouched; extra values are ignored.
/// Bits past the end of the buffer are dropped.
pub fn write_segments(buf: &mut [u8], shape: &Shape<'_>, values: &[u32]) {
    for (range, &value) in shape.fields().zip(values) {
        set_bits(buf, value, range.lo(), range.width());
    }
}
