//! End-to-end tests over known frames

use telepack_core::{
    constants::{FRAME_SIZE, MAX_PACKET_ID},
    decode_stream, encode_stream,
    packet::STATE_CODE,
    read_packet, string_to_type, type_to_string, write_packet, CommPacket, PacketType,
};

/// Frames captured from the link, with their expected decoding
const STATE_FRAME: &str = "b29d1a4ea758ea5e";
const UNKNOWN_FRAME: [u8; 8] = [181, 199, 212, 174, 57, 109, 167, 155];

fn frame_from_hex(text: &str) -> [u8; FRAME_SIZE] {
    let bytes = hex::decode(text).unwrap();
    bytes.try_into().unwrap()
}

#[test]
fn test_state_frame_decodes() {
    let frame = frame_from_hex(STATE_FRAME);
    assert_eq!(frame, [178, 157, 26, 78, 167, 88, 234, 94]);

    let packet = read_packet(&frame);
    assert_eq!(
        packet,
        CommPacket::new(PacketType::State, 54, [-724.875, 846.5, 442.5625])
    );
    assert_eq!(type_to_string(packet.packet_type), "State");
}

#[test]
fn test_state_frame_reencodes() {
    let frame = frame_from_hex(STATE_FRAME);
    assert_eq!(write_packet(&read_packet(&frame)), frame);
}

#[test]
fn test_unknown_frame_reencodes() {
    let packet = read_packet(&UNKNOWN_FRAME);
    assert!(matches!(packet.packet_type, PacketType::Unknown(_)));
    assert_eq!(write_packet(&packet), UNKNOWN_FRAME);
}

#[test]
fn test_sensor_readings_quantize_down() {
    let packet = CommPacket::new(
        string_to_type("State").unwrap(),
        54,
        [-724.99, 846.53, 442.59],
    );

    let frame = write_packet(&packet);
    assert_eq!(hex::encode(frame), STATE_FRAME);
}

#[test]
fn test_type_field_position() {
    let packet = CommPacket::new(PacketType::State, MAX_PACKET_ID, [1.0, 1.0, 1.0]);
    let frame = write_packet(&packet);

    assert_eq!(frame[0] & 0x07, STATE_CODE);
    // id occupies bits 3..=9
    assert_eq!(frame[0] >> 3, 0x1F);
    assert_eq!(frame[1] & 0x03, 0x03);
}

#[test]
fn test_stream_of_captured_frames() {
    let mut data = frame_from_hex(STATE_FRAME).to_vec();
    data.extend_from_slice(&UNKNOWN_FRAME);

    let packets = decode_stream(&data);
    assert_eq!(packets.len(), 2);
    assert_eq!(encode_stream(&packets).as_ref(), data.as_slice());
}

#[cfg(feature = "json")]
#[test]
fn test_json_mirror_of_captured_frame() {
    use telepack_core::mirror::{decode_json, encode_json_at};

    let packet = read_packet(&frame_from_hex(STATE_FRAME));
    let text = encode_json_at(&packet, 42).unwrap();
    let decoded = decode_json(&text).unwrap();

    assert_eq!(write_packet(&decoded), frame_from_hex(STATE_FRAME));
}
