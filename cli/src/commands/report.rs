//! Report Serialization
//!
//! Shared flag types and the text/CSV row format used by both commands.

use anyhow::{Context, Result};
use clap::ValueEnum;
use elimac::CounterEncoding;
use std::fs::File;
use std::io::Write;
use std::path::Path;

// =============================================================================
// FLAG TYPES
// =============================================================================

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
pub enum OutputFormat {
    /// Human-readable report
    Text,
    /// One comma-separated row per configuration
    Csv,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug, Default)]
pub enum EncodingArg {
    /// Counter repeated across all four 32-bit lanes
    Repeated,
    /// Big-endian counter in the low four bytes
    #[default]
    Compact,
    /// Alias of compact kept for recorded parameter sets
    CompactAlt,
    /// Little-endian counter in the low four bytes
    CompactLe,
}

impl EncodingArg {
    pub fn to_encoding(self) -> CounterEncoding {
        match self {
            Self::Repeated => CounterEncoding::Repeated,
            Self::Compact => CounterEncoding::Compact,
            Self::CompactAlt => CounterEncoding::CompactAlt,
            Self::CompactLe => CounterEncoding::CompactLe,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Repeated => "repeated",
            Self::Compact => "compact",
            Self::CompactAlt => "compact-alt",
            Self::CompactLe => "compact-le",
        }
    }
}

// =============================================================================
// ROW FORMAT
// =============================================================================

pub const CSV_HEADER: &str = "MessageLength,TagBits,Precompute,Parallel,Encoding,Tag,TimeUs";

/// One measured configuration.
pub struct ReportRow {
    pub message_length: usize,
    pub tag_bits: u16,
    pub precompute: bool,
    pub parallel: bool,
    pub encoding: &'static str,
    pub tag: String,
    pub time_us: f64,
}

impl ReportRow {
    pub fn to_csv(&self) -> String {
        format!(
            "{},{},{},{},{},{},{:.2}",
            self.message_length,
            self.tag_bits,
            u8::from(self.precompute),
            u8::from(self.parallel),
            self.encoding,
            self.tag,
            self.time_us,
        )
    }

    pub fn to_text(&self) -> String {
        format!(
            "len {:>8}  tag {:>3} bits  precompute {}  parallel {}  {:<11}  {:<32}  {:>10.2} us",
            self.message_length,
            self.tag_bits,
            if self.precompute { "on " } else { "off" },
            if self.parallel { "on " } else { "off" },
            self.encoding,
            self.tag,
            self.time_us,
        )
    }
}

// =============================================================================
// OUTPUT SINK
// =============================================================================

/// Open the report destination: a file when `--output` is given, stdout otherwise.
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(p) => {
            let file = File::create(p)
                .with_context(|| format!("Failed to create output file: {}", p.display()))?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(std::io::stdout())),
    }
}
