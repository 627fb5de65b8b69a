use anyhow::Result;
use clap::{Parser, Subcommand};
use telepack_cli::{commands, RecordFormat};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "telepack")]
#[command(about = "Telepack - Bit-packed telemetry frames for constrained links", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode binary frames into JSON records
    Decode {
        /// Input file of back-to-back frames ("-" for stdin)
        #[arg(short, long, conflicts_with = "hex", required_unless_present = "hex")]
        input: Option<String>,

        /// Frames given as a hex string instead of a file
        #[arg(long)]
        hex: Option<String>,

        /// Output file for JSON lines (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Encode JSON records into binary frames
    Encode {
        /// Input file of JSON records ("-" for stdin)
        #[arg(short, long)]
        input: String,

        /// Output file for frames (hex on stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Layout of the input file
        #[arg(long, value_enum, default_value = "auto")]
        format: RecordFormat,
    },

    /// Show the fields of a single frame
    Inspect {
        /// The frame as 16 hex digits
        frame: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    // Execute command
    match cli.command {
        Commands::Decode { input, hex, output } => {
            commands::decode::execute(input.as_deref(), hex.as_deref(), output.as_deref())
        }

        Commands::Encode {
            input,
            output,
            format,
        } => commands::encode::execute(&input, output.as_deref(), format),

        Commands::Inspect { frame } => commands::inspect::execute(&frame),
    }
}
