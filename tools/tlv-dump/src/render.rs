use std::fmt::Write as _;

use anyhow::Result;
use clap::ValueEnum;
use tlvbox::record::RecordView;
use tlvbox_buffers::print_octets;

/// Bytes shown per payload in the raw listing.
const RAW_PREVIEW_LEN: usize = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Indented field dump
    Text,
    /// Pretty-printed JSON
    Json,
    /// Every top-level tag with its length and a hex preview
    Raw,
}

pub fn render(view: &RecordView, format: Format) -> Result<String> {
    Ok(match format {
        Format::Text => view.dump(),
        Format::Json => {
            let mut out = serde_json::to_string_pretty(&view.to_json())?;
            out.push('\n');
            out
        }
        Format::Raw => {
            let mut out = String::new();
            for (tag, payload) in view.as_box().iter() {
                writeln!(
                    out,
                    "0x{tag:08x} len={:<6} {}",
                    payload.len(),
                    print_octets(payload, RAW_PREVIEW_LEN)
                )?;
            }
            out
        }
    })
}
