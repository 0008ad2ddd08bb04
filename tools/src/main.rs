use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use codec::Codec;
use polyline_tools::{
    decode_coordinates, encode_coordinates, format_coordinates_pretty, format_inspect_pretty,
    inspect_polyline, logging, Coordinates,
};

#[derive(Parser)]
#[command(
    name = "polyline-tools",
    version,
    about = "Encoded polyline conversion and inspection tools"
)]
struct Cli {
    /// Log debug details to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode a JSON coordinate array into a polyline.
    Encode {
        /// Path to the JSON coordinates (stdin if omitted).
        input: Option<PathBuf>,
        #[command(flatten)]
        codec: CodecArgs,
        /// Expect a flat array `[lat, lng, lat, lng, ...]`.
        #[arg(long)]
        flat: bool,
    },
    /// Decode a polyline into coordinates.
    Decode {
        /// The polyline (stdin if omitted).
        polyline: Option<String>,
        #[command(flatten)]
        codec: CodecArgs,
        /// Emit a flat array instead of one array per coordinate.
        #[arg(long)]
        flat: bool,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Show every varint in a polyline with its delta and running value.
    Inspect {
        /// The polyline (stdin if omitted).
        polyline: Option<String>,
        #[command(flatten)]
        codec: CodecArgs,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
        format: OutputFormat,
    },
}

#[derive(Args)]
struct CodecArgs {
    /// Values per coordinate.
    #[arg(long, default_value_t = 2)]
    dimensions: usize,
    /// Scale applied before rounding.
    #[arg(long, default_value_t = 1e5)]
    scale: f64,
}

impl CodecArgs {
    fn codec(&self) -> Result<Codec> {
        Codec::new(self.dimensions, self.scale).context("invalid codec parameters")
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Json,
    Pretty,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(if cli.verbose { "debug" } else { "warn" });

    match cli.command {
        Command::Encode { input, codec, flat } => {
            let codec = codec.codec()?;
            let json = match &input {
                Some(path) => fs::read_to_string(path)
                    .with_context(|| format!("read coordinates {}", path.display()))?,
                None => read_stdin()?,
            };
            let coords: Coordinates = if flat {
                Coordinates::Flat(serde_json::from_str(&json).context("parse flat json array")?)
            } else {
                Coordinates::Nested(serde_json::from_str(&json).context("parse coordinate json")?)
            };
            tracing::debug!(
                coordinates = coords.count(&codec),
                dimensions = codec.dimensions(),
                scale = codec.scale(),
                "encoding"
            );
            let polyline = encode_coordinates(&coords, &codec).context("encode coordinates")?;
            tracing::debug!(bytes = polyline.len(), "encoded");
            println!("{polyline}");
        }
        Command::Decode {
            polyline,
            codec,
            flat,
            format,
        } => {
            let codec = codec.codec()?;
            let polyline = polyline_input(polyline)?;
            tracing::debug!(bytes = polyline.len(), flat, "decoding");
            let coords = decode_coordinates(polyline.as_bytes(), &codec, flat)
                .context("decode polyline")?;
            tracing::debug!(coordinates = coords.count(&codec), "decoded");
            match format {
                OutputFormat::Json => {
                    let json = serde_json::to_string(&coords).context("serialize json")?;
                    println!("{json}");
                }
                OutputFormat::Pretty => {
                    print!("{}", format_coordinates_pretty(&coords, &codec));
                }
            }
        }
        Command::Inspect {
            polyline,
            codec,
            format,
        } => {
            let codec = codec.codec()?;
            let polyline = polyline_input(polyline)?;
            let report =
                inspect_polyline(polyline.as_bytes(), &codec).context("inspect polyline")?;
            match format {
                OutputFormat::Json => {
                    let json = serde_json::to_string_pretty(&report).context("serialize json")?;
                    println!("{json}");
                }
                OutputFormat::Pretty => {
                    print!("{}", format_inspect_pretty(&report));
                }
            }
        }
    }
    Ok(())
}

fn read_stdin() -> Result<String> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("read stdin")?;
    Ok(input)
}

/// Takes the polyline argument or stdin, dropping surrounding whitespace.
///
/// Whitespace is never part of the encoding alphabet.
fn polyline_input(arg: Option<String>) -> Result<String> {
    let raw = match arg {
        Some(polyline) => polyline,
        None => read_stdin()?,
    };
    Ok(raw.trim().to_owned())
}
