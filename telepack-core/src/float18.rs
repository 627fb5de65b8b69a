//! 18-bit minifloat quantization
//!
//! Code layout, most-significant bit first:
//!
//! ```text
//! | sign (1) | exponent (5, bias 15) | mantissa (12) |
//! ```
//!
//! Every code is a normalized number `(1 + mantissa / 4096) * 2^(exponent - 15)`.
//! There are no denormals, zeros, infinities or NaNs: the smallest magnitude
//! is `2^-15` and the largest is `(2 - 2^-12) * 2^16`.
//!
//! Encoding truncates the mantissa toward zero magnitude. Two inputs that
//! bracket a quantization step both land on the lower step, never the nearer
//! one. Inputs outside the representable range clamp to the nearest end.
//!
//! Both directions go through the IEEE-754 bit pattern of `f32`, which has
//! more exponent range and mantissa bits than a code, so the conversions are
//! exact and need no floating-point math.

use crate::constants::{
    FLOAT18_BIAS, FLOAT18_EXPONENT_BITS, FLOAT18_MANTISSA_BITS, FLOAT18_MASK, FLOAT18_SIGN_BIT,
};

#[cfg(feature = "logging")]
use tracing::debug;

const F32_MANTISSA_BITS: u32 = 23;
const F32_BIAS: i32 = 127;

const EXPONENT_MASK: u32 = (1 << FLOAT18_EXPONENT_BITS) - 1;
const MANTISSA_MASK: u32 = (1 << FLOAT18_MANTISSA_BITS) - 1;

/// Smallest unbiased exponent a code can carry
const MIN_EXPONENT: i32 = -FLOAT18_BIAS;

/// Largest unbiased exponent a code can carry
const MAX_EXPONENT: i32 = EXPONENT_MASK as i32 - FLOAT18_BIAS;

/// An 18-bit minifloat code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Float18(u32);

impl Float18 {
    /// Smallest positive value, `2^-15`
    pub const MIN_POSITIVE: Float18 = Float18(0);

    /// Largest positive value, `(2 - 2^-12) * 2^16`
    pub const MAX: Float18 = Float18((EXPONENT_MASK << FLOAT18_MANTISSA_BITS) | MANTISSA_MASK);

    /// Wrap a raw code, discarding bits above bit 17
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits & FLOAT18_MASK)
    }

    /// Raw 18-bit code
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Quantize a value, see [`encode_float18`]
    pub fn from_f32(value: f32) -> Self {
        Self(encode_float18(value))
    }

    /// Value represented by this code, see [`decode_float18`]
    pub fn to_f32(self) -> f32 {
        decode_float18(self.0)
    }

    /// True when the sign bit is set
    pub const fn is_negative(self) -> bool {
        (self.0 >> FLOAT18_SIGN_BIT) & 1 == 1
    }

    /// Unbiased exponent, in -15..=16
    pub const fn exponent(self) -> i32 {
        ((self.0 >> FLOAT18_MANTISSA_BITS) & EXPONENT_MASK) as i32 - FLOAT18_BIAS
    }

    /// Mantissa fraction bits, in 0..4096
    pub const fn mantissa(self) -> u32 {
        self.0 & MANTISSA_MASK
    }

    /// Distance between this code's magnitude and the next one up
    ///
    /// Doubles with every exponent increment.
    pub fn quantization_step(self) -> f32 {
        let exponent = self.exponent() - FLOAT18_MANTISSA_BITS as i32;
        f32::from_bits(((exponent + F32_BIAS) as u32) << F32_MANTISSA_BITS)
    }
}

impl From<Float18> for f32 {
    fn from(code: Float18) -> Self {
        code.to_f32()
    }
}

impl From<f32> for Float18 {
    fn from(value: f32) -> Self {
        Float18::from_f32(value)
    }
}

/// Decode an 18-bit minifloat code into an `f32`
///
/// Bits above bit 17 are ignored. The result is exact.
pub fn decode_float18(code: u32) -> f32 {
    let code = code & FLOAT18_MASK;

    let sign = code >> FLOAT18_SIGN_BIT;
    let exponent = ((code >> FLOAT18_MANTISSA_BITS) & EXPONENT_MASK) as i32 - FLOAT18_BIAS;
    let mantissa = code & MANTISSA_MASK;

    // Every code exponent is a normal f32 exponent
    let f32_exponent = (exponent + F32_BIAS) as u32;
    f32::from_bits(
        (sign << 31)
            | (f32_exponent << F32_MANTISSA_BITS)
            | (mantissa << (F32_MANTISSA_BITS - FLOAT18_MANTISSA_BITS)),
    )
}

/// Quantize an `f32` into an 18-bit minifloat code
///
/// The exponent is `floor(log2(|value|))` and the mantissa fraction is
/// truncated toward zero. Magnitudes above the largest code clamp to
/// [`Float18::MAX`]; magnitudes below the smallest (including zero) clamp to
/// [`Float18::MIN_POSITIVE`]. The sign is kept in both cases. NaN has no
/// code and encodes as 0.
pub fn encode_float18(value: f32) -> u32 {
    if value.is_nan() {
        #[cfg(feature = "logging")]
        debug!("NaN has no minifloat code, encoding as 0");
        return 0;
    }

    let bits = value.to_bits();
    let sign = bits >> 31;
    let exponent = ((bits >> F32_MANTISSA_BITS) & 0xFF) as i32 - F32_BIAS;

    let (exponent_field, mantissa) = if exponent < MIN_EXPONENT {
        (0, 0)
    } else if exponent > MAX_EXPONENT {
        #[cfg(feature = "logging")]
        debug!("Value {} exceeds minifloat range, clamping", value);
        (EXPONENT_MASK, MANTISSA_MASK)
    } else {
        // Top 12 bits of the f32 fraction: floor((|v| / 2^e - 1) * 4096)
        (
            (exponent + FLOAT18_BIAS) as u32,
            (bits >> (F32_MANTISSA_BITS - FLOAT18_MANTISSA_BITS)) & MANTISSA_MASK,
        )
    };

    (sign << FLOAT18_SIGN_BIT) | (exponent_field << FLOAT18_MANTISSA_BITS) | mantissa
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_exact() {
        assert_eq!(decode_float18(231_079), -724.875);
        assert_eq!(decode_float18(100_980), 846.5);
        assert_eq!(decode_float18(97_193), 442.5625);
    }

    #[test]
    fn test_encode_truncates() {
        assert_eq!(encode_float18(-724.99), 231_079);
        assert_eq!(encode_float18(846.53), 100_980);
        assert_eq!(encode_float18(442.59), 97_193);
    }

    #[test]
    fn test_encode_bracketing_values_take_lower_step() {
        // 846.5 and 846.625 are adjacent codes; everything between maps down
        assert_eq!(encode_float18(846.5), 100_980);
        assert_eq!(encode_float18(846.62), 100_980);
        assert_eq!(encode_float18(846.625), 100_981);
    }

    #[test]
    fn test_decode_ignores_high_bits() {
        assert_eq!(decode_float18(231_079 | 0xFFFC_0000), -724.875);
    }

    #[test]
    fn test_powers_of_two() {
        assert_eq!(encode_float18(1.0), 15 << 12);
        assert_eq!(decode_float18(15 << 12), 1.0);
        assert_eq!(encode_float18(-2.0), (1 << 17) | (16 << 12));
        assert_eq!(encode_float18(0.5), 14 << 12);
    }

    #[test]
    fn test_clamp_overflow() {
        let max = Float18::MAX.to_f32();
        assert_eq!(max, 131_056.0);
        assert_eq!(encode_float18(1.0e9), Float18::MAX.bits());
        assert_eq!(encode_float18(f32::INFINITY), Float18::MAX.bits());
        assert_eq!(
            encode_float18(f32::NEG_INFINITY),
            (1 << 17) | Float18::MAX.bits()
        );
    }

    #[test]
    fn test_clamp_underflow() {
        assert_eq!(Float18::MIN_POSITIVE.to_f32(), 1.0 / 32_768.0);
        assert_eq!(encode_float18(0.0), 0);
        assert_eq!(encode_float18(1.0e-9), 0);
        assert_eq!(encode_float18(-0.0), 1 << 17);
    }

    #[test]
    fn test_nan_encodes_as_zero() {
        assert_eq!(encode_float18(f32::NAN), 0);
    }

    #[test]
    fn test_float18_accessors() {
        let code = Float18::from_bits(231_079);
        assert!(code.is_negative());
        assert_eq!(code.exponent(), 9);
        assert_eq!(code.mantissa(), 1703);
        assert_eq!(code.quantization_step(), 0.125);
        assert_eq!(f32::from(code), -724.875);
        assert_eq!(Float18::from(-724.99f32), code);
    }
}
