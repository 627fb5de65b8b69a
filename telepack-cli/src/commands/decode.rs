use anyhow::{bail, Context, Result};
use std::fs;
use telepack_core::{
    constants::FRAME_SIZE,
    decode_stream,
    mirror::{current_time_ms, PacketRecord},
    PacketType,
};
use tracing::{info, warn};

use crate::read_input;

/// Decode binary frames into JSON records, one per line
///
/// Frames come from `input` (a file, or `-` for stdin) or from `hex`. Records
/// go to `output`, or stdout when it is `None`.
pub fn execute(input: Option<&str>, hex: Option<&str>, output: Option<&str>) -> Result<()> {
    let data = match (input, hex) {
        (Some(path), None) => read_input(path)?,
        (None, Some(text)) => hex::decode(text.trim())
            .with_context(|| format!("Invalid hex frame data: {}", text))?,
        _ => bail!("Exactly one of --input or --hex is required"),
    };

    let lines = decode_to_json_lines(&data, current_time_ms())?;

    if let Some(output_path) = output {
        let mut text = lines.join("\n");
        text.push('\n');
        fs::write(output_path, text)
            .with_context(|| format!("Failed to write output file: {}", output_path))?;
        info!("Decoded records written to: {}", output_path);
    } else {
        for line in &lines {
            println!("{}", line);
        }
    }

    Ok(())
}

/// Decode `data` and render each packet as a JSON record stamped with `time`
pub fn decode_to_json_lines(data: &[u8], time: i64) -> Result<Vec<String>> {
    if data.len() % FRAME_SIZE != 0 {
        warn!(
            "Input is {} bytes, not a multiple of {}; last frame is zero-filled",
            data.len(),
            FRAME_SIZE
        );
    }

    let packets = decode_stream(data);
    info!("Decoded {} frames", packets.len());

    packets
        .iter()
        .enumerate()
        .map(|(i, packet)| {
            if let PacketType::Unknown(code) = packet.packet_type {
                warn!("Frame {} has unknown type code {}", i, code.get());
            }
            serde_json::to_string(&PacketRecord::from_packet(packet, time))
                .with_context(|| format!("Failed to serialize frame {}", i))
        })
        .collect()
}
