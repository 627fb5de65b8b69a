//! Fuzzing harness for telepack-core decoders
//!
//! To use with cargo-fuzz:
//! 1. Install cargo-fuzz: cargo install cargo-fuzz
//! 2. Run fuzzer: cargo fuzz run fuzz_decode

use telepack_core::{bits::read_bits, constants::FRAME_SIZE};

pub fn fuzz_decode(data: &[u8]) {
    use telepack_core::{decode_packet, write_packet};

    // Must never panic, and any full frame must re-encode unchanged
    let packet = decode_packet(data);
    if let Some(frame) = data.get(..FRAME_SIZE) {
        assert_eq!(&write_packet(&packet)[..], frame);
    }
}

pub fn fuzz_stream(data: &[u8]) {
    use telepack_core::decode_stream;

    let packets = decode_stream(data);
    assert_eq!(packets.len(), data.len().div_ceil(FRAME_SIZE));
}

pub fn fuzz_read_bits(data: &[u8]) {
    // First two bytes pick the range, the rest is the buffer
    if let [a, b, rest @ ..] = data {
        let (a, b) = (*a as usize, *b as usize);
        assert_eq!(read_bits(rest, a, b), read_bits(rest, b, a));
    }
}

pub fn fuzz_json(data: &[u8]) {
    use telepack_core::mirror::decode_json;

    if let Ok(text) = std::str::from_utf8(data) {
        let _ = decode_json(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuzz_decode_empty() {
        fuzz_decode(&[]);
    }

    #[test]
    fn test_fuzz_decode_random() {
        fuzz_decode(&[0x12, 0x34, 0x56, 0x78, 0x9A, 0xBC, 0xDE, 0xF0, 0x11]);
    }

    #[test]
    fn test_fuzz_stream_ragged() {
        fuzz_stream(&[0xFF; 1023]);
    }

    #[test]
    fn test_fuzz_read_bits() {
        fuzz_read_bits(&[200, 3, 0xAA, 0x55]);
    }

    #[test]
    fn test_fuzz_json_garbage() {
        fuzz_json(b"{\"time\":1,\"type\":\"State\",\"id\":1,\"data\":[]}");
        fuzz_json(&[0xFF, 0xFE]);
    }
}
