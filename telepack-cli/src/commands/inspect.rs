use anyhow::{bail, Context, Result};
use colored::*;
use telepack_core::{
    constants::FRAME_SIZE,
    float18::Float18,
    read_segments, PacketType, PACKET_SHAPE,
};

const FIELD_NAMES: [&str; 5] = ["type", "id", "data1", "data2", "data3"];

/// One field of a frame, as shown by `inspect`
#[derive(Debug, Clone, PartialEq)]
pub struct FieldReport {
    /// Field name
    pub name: &'static str,
    /// First bit of the field
    pub lo: usize,
    /// Last bit of the field
    pub hi: usize,
    /// Raw field value
    pub raw: u32,
    /// Interpreted value
    pub value: String,
    /// False when the field holds a type code missing from the type table
    pub known: bool,
}

pub fn execute(frame_hex: &str) -> Result<()> {
    let frame = hex::decode(frame_hex.trim())
        .with_context(|| format!("Invalid hex frame: {}", frame_hex))?;

    if frame.len() != FRAME_SIZE {
        bail!("Expected {} bytes, got {}", FRAME_SIZE, frame.len());
    }

    println!("\n=== Frame {} ===", hex::encode(&frame));
    println!("{:<6} {:>7}  {:>8}  {}", "Field", "Bits", "Raw", "Value");

    for field in inspect_frame(&frame) {
        let value = if !field.known {
            field.value.yellow()
        } else {
            field.value.green()
        };
        println!(
            "{:<6} {:>3}-{:<3}  {:>#8x}  {}",
            field.name, field.lo, field.hi, field.raw, value
        );
    }

    Ok(())
}

/// Break a frame into its fields
pub fn inspect_frame(frame: &[u8]) -> Vec<FieldReport> {
    let raw = read_segments(frame, &PACKET_SHAPE);

    PACKET_SHAPE
        .fields()
        .zip(raw)
        .zip(FIELD_NAMES)
        .map(|((range, raw), name)| {
            let (value, known) = match name {
                "type" => {
                    let packet_type = PacketType::from_code(raw as u8);
                    (packet_type.to_string(), packet_type.is_known())
                }
                "id" => (raw.to_string(), true),
                _ => (Float18::from_bits(raw).to_f32().to_string(), true),
            };
            FieldReport {
                name,
                lo: range.lo(),
                hi: range.hi(),
                raw,
                value,
                known,
            }
        })
        .collect()
}
