//! Library entry for telepack-cli used by integration tests and embedding.

pub mod commands;

// Re-export commands for convenience
pub use commands::*;

/// Layout of a file of JSON packet records
#[derive(Copy, Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum RecordFormat {
    /// Detect from the first non-blank character (`[` means array)
    Auto,
    /// One JSON record per line
    Jsonl,
    /// A single JSON array of records
    Array,
}

/// Read a whole input file, or stdin when the path is `-`
pub fn read_input(input: &str) -> anyhow::Result<Vec<u8>> {
    use anyhow::Context;
    use std::io::Read;

    if input == "-" {
        let mut buf = Vec::new();
        std::io::stdin().read_to_end(&mut buf)?;
        Ok(buf)
    } else {
        std::fs::read(input).with_context(|| format!("Failed to read input file: {}", input))
    }
}
