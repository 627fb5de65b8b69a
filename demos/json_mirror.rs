//! Mirror a captured frame to JSON and back

use telepack_core::{
    mirror::{decode_json, encode_json},
    read_packet, write_packet,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let frame = [178u8, 157, 26, 78, 167, 88, 234, 94];

    let packet = read_packet(&frame);
    let json = encode_json(&packet)?;
    println!("{}", json);

    let restored = decode_json(&json)?;
    assert_eq!(write_packet(&restored), frame);
    println!("Frame restored from JSON: {}", hex::encode(write_packet(&restored)));

    Ok(())
}

