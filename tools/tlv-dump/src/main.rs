//! tlv-dump - print the contents of a TLV picture record
//!
//! # Usage
//!
//! ```bash
//! # Indented text dump of a record file
//! tlv-dump frame.tlv
//!
//! # Skip a 16-byte transport header, print JSON
//! tlv-dump frame.tlv --offset 16 --format json
//!
//! # Every top-level tag with a hex preview, from stdin
//! cat frame.tlv | tlv-dump --format raw
//! ```
//!
//! Set `RUST_LOG=tlvbox=debug` to trace decoding.

mod render;

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tlvbox::record::RecordView;
use tlvbox::{DecodeLimits, DEFAULT_MAX_DEPTH, DEFAULT_MAX_INPUT_LEN};

use render::Format;

/// Print the contents of a TLV picture record
#[derive(Parser)]
#[command(name = "tlv-dump")]
#[command(version)]
struct Cli {
    /// Input file (reads stdin when omitted)
    file: Option<PathBuf>,

    /// Byte offset of the first record
    #[arg(long, default_value_t = 0)]
    offset: usize,

    /// Deepest nesting level to decode
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: u32,

    /// Largest input accepted, in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_INPUT_LEN)]
    max_input_len: usize,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

fn read_input(file: Option<&PathBuf>) -> Result<Vec<u8>> {
    match file {
        Some(path) => {
            fs::read(path).with_context(|| format!("Failed to read {}", path.display()))
        }
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let input = read_input(cli.file.as_ref())?;
    tracing::debug!("Read {} bytes", input.len());

    let limits = DecodeLimits::default()
        .with_max_depth(cli.max_depth)
        .with_max_input_len(cli.max_input_len);
    let view = RecordView::parse_with_limits(&input, cli.offset, limits)
        .context("Failed to decode TLV record")?;

    print!("{}", render::render(&view, cli.format)?);
    Ok(())
}
