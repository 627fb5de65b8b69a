use anyhow::{Context, Result};
use std::fs;
use telepack_core::{constants::MAX_PACKET_ID, encode_stream, mirror::PacketRecord, CommPacket};
use tracing::{info, warn};

use crate::{read_input, RecordFormat};

/// Encode JSON packet records into back-to-back binary frames
///
/// Frames are written to `output` as raw bytes, or printed as hex (one frame
/// per line) when `output` is `None`.
pub fn execute(input: &str, output: Option<&str>, format: RecordFormat) -> Result<()> {
    info!("Encoding records from {}", input);

    let content = read_input(input)?;
    let text = String::from_utf8(content).context("Input is not valid UTF-8")?;

    let packets = parse_records(&text, format)?;
    info!("Found {} records to encode", packets.len());

    let encoded = encode_stream(&packets);

    if let Some(output_path) = output {
        fs::write(output_path, &encoded)
            .with_context(|| format!("Failed to write output file: {}", output_path))?;
        info!(
            "Successfully encoded {} frames ({} bytes total)",
            packets.len(),
            encoded.len()
        );
    } else {
        for frame in encoded.chunks(telepack_core::constants::FRAME_SIZE) {
            println!("{}", hex::encode(frame));
        }
    }

    Ok(())
}

/// Parse JSON records into packets
pub fn parse_records(text: &str, format: RecordFormat) -> Result<Vec<CommPacket>> {
    let format = match format {
        RecordFormat::Auto if text.trim_start().starts_with('[') => RecordFormat::Array,
        RecordFormat::Auto => RecordFormat::Jsonl,
        other => other,
    };

    let records: Vec<PacketRecord> = match format {
        RecordFormat::Array => {
            serde_json::from_str(text).context("Failed to parse JSON array of records")?
        }
        _ => text
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(n, line)| {
                serde_json::from_str(line)
                    .with_context(|| format!("Failed to parse record on line {}", n + 1))
            })
            .collect::<Result<_>>()?,
    };

    records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            if record.id > MAX_PACKET_ID {
                warn!(
                    "Record {} has id {} above {}; it will be truncated",
                    i, record.id, MAX_PACKET_ID
                );
            }
            record
                .to_packet()
                .with_context(|| format!("Invalid record {}", i))
        })
        .collect()
}
