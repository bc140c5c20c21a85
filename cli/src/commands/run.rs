//! Run Command
//!
//! Authenticate a single message and report the tag with mean timing.

use anyhow::{ensure, Result};
use clap::Args;
use elimac::{Elimac, Precomputation, TagRequest};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use super::report::{open_output, EncodingArg, OutputFormat, ReportRow, CSV_HEADER};
use super::{FIXED_KEY1, FIXED_KEY2};

// =============================================================================
// ARGUMENTS
// =============================================================================

#[derive(Args)]
pub struct RunArgs {
    /// Message to authenticate
    #[arg(short, long, default_value = "Hello, EliMAC!")]
    message: String,

    /// Draw both keys from the seeded generator instead of the fixed demo keys
    #[arg(long)]
    random_keys: bool,

    /// Seed for the deterministic key/message generator
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Precompute the stream subkeys once before the timed runs
    #[arg(short, long)]
    precompute: bool,

    /// Fold message blocks across threads
    #[arg(long)]
    parallel: bool,

    /// Tag length in bits (32, 64, 96 or 128)
    #[arg(short, long, default_value_t = 128)]
    tag_bits: u16,

    /// Block counter encoding
    #[arg(long, value_enum, default_value_t = EncodingArg::Compact)]
    encoding: EncodingArg,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Write the report here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Number of timed iterations
    #[arg(long, default_value_t = 100)]
    iterations: u32,
}

// =============================================================================
// RUN
// =============================================================================

pub fn run_mode(args: &RunArgs) -> Result<()> {
    ensure!(
        matches!(args.tag_bits, 32 | 64 | 96 | 128),
        "tag-bits must be one of 32, 64, 96, 128 (got {})",
        args.tag_bits
    );
    ensure!(args.iterations > 0, "iterations must be at least 1");

    let (key1, key2) = if args.random_keys {
        let mut rng = StdRng::seed_from_u64(args.seed);
        generate_keys(&mut rng)
    } else {
        (FIXED_KEY1, FIXED_KEY2)
    };

    let mac = Elimac::with_encoding(&key1, &key2, args.encoding.to_encoding());
    let message = args.message.as_bytes();

    // Counters cover every 16-byte block except the final padded one.
    let cache = if args.precompute {
        let max_blocks = ((message.len() / 16) as u32).max(1);
        Some(mac.precompute(max_blocks)?)
    } else {
        None
    };
    let request = TagRequest {
        tag_bits: usize::from(args.tag_bits),
        parallel: args.parallel,
        precomputation: cache
            .as_ref()
            .map_or(Precomputation::Off, Precomputation::Cached),
    };

    let tag = mac.tag_with(message, &request)?;

    let start = Instant::now();
    for _ in 0..args.iterations {
        let _ = mac.tag_with(message, &request)?;
    }
    let time_us = start.elapsed().as_secs_f64() * 1e6 / f64::from(args.iterations);

    let mut out = open_output(args.output.as_deref())?;
    match args.format {
        OutputFormat::Text => {
            writeln!(out, "=== EliMAC ===")?;
            writeln!(out, "Backend:     {}", elimac::active_backend())?;
            writeln!(
                out,
                "Message:     {:?} ({} bytes)",
                args.message,
                message.len()
            )?;
            if args.random_keys {
                writeln!(out, "Keys:        seeded random (seed {})", args.seed)?;
            } else {
                writeln!(out, "Keys:        fixed demo keys")?;
            }
            writeln!(out, "Encoding:    {}", args.encoding.label())?;
            writeln!(out, "Tag bits:    {}", args.tag_bits)?;
            writeln!(
                out,
                "Precompute:  {}",
                if args.precompute { "on" } else { "off" }
            )?;
            writeln!(
                out,
                "Parallel:    {}",
                if args.parallel { "on" } else { "off" }
            )?;
            writeln!(out, "Tag:         {tag}")?;
            writeln!(
                out,
                "Mean time:   {time_us:.2} us over {} iterations",
                args.iterations
            )?;
        }
        OutputFormat::Csv => {
            let row = ReportRow {
                message_length: message.len(),
                tag_bits: args.tag_bits,
                precompute: args.precompute,
                parallel: args.parallel,
                encoding: args.encoding.label(),
                tag: format!("{tag:x}"),
                time_us,
            };
            writeln!(out, "{CSV_HEADER}")?;
            writeln!(out, "{}", row.to_csv())?;
        }
    }

    Ok(())
}

// =============================================================================
// HELPERS
// =============================================================================

/// Draw a key pair from the seeded generator.
pub fn generate_keys(rng: &mut StdRng) -> ([u8; 16], [u8; 16]) {
    let mut key1 = [0u8; 16];
    let mut key2 = [0u8; 16];
    rng.fill_bytes(&mut key1);
    rng.fill_bytes(&mut key2);
    (key1, key2)
}
