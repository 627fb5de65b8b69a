//! Basic encoding example

use telepack_core::{decode_stream, encode_stream, CommPacket, PacketType};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Telepack Basic Encoding Example\n");

    // A short burst of state telemetry
    let mut packets = Vec::new();
    for i in 1..=5u8 {
        let t = f32::from(i);
        packets.push(CommPacket::new(
            PacketType::State,
            i,
            [t * 101.37, -t * 12.5, 900.0 + t * 0.3],
        ));
    }

    let encoded = encode_stream(&packets);
    std::fs::write("example_output.tpk", &encoded)?;

    println!("Wrote {} frames ({} bytes) to example_output.tpk\n", packets.len(), encoded.len());

    // Show what survives the 18-bit quantization
    for (sent, received) in packets.iter().zip(decode_stream(&encoded)) {
        println!(
            "id {:>3}: {:?} -> {:?}",
            sent.id, sent.data, received.data
        );
    }

    println!("\nUse 'telepack decode --input example_output.tpk' to read it back");

    Ok(())
}
