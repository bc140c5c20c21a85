//! Suite Command
//!
//! Sweeps message lengths, tag sizes, precomputation, and key sources,
//! emitting one measured row per configuration and cross-checking that
//! precomputed and on-the-fly tags agree.

use anyhow::{ensure, Result};
use clap::Args;
use elimac::{Elimac, Precomputation, Tag, TagRequest};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use super::report::{open_output, EncodingArg, OutputFormat, ReportRow, CSV_HEADER};
use super::run::generate_keys;
use super::{FIXED_KEY1, FIXED_KEY2};

// =============================================================================
// ARGUMENTS
// =============================================================================

#[derive(Args)]
pub struct SuiteArgs {
    /// Seed for the deterministic key/message generator
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Fold message blocks across threads
    #[arg(long)]
    parallel: bool,

    /// Block counter encoding
    #[arg(long, value_enum, default_value_t = EncodingArg::Compact)]
    encoding: EncodingArg,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Write the report here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Number of timed iterations per configuration
    #[arg(long, default_value_t = 10)]
    iterations: u32,
}

// =============================================================================
// SUITE
// =============================================================================

const LENGTHS: [usize; 6] = [16, 128, 1024, 10_000, 100_000, 1_000_000];
const TAG_BITS: [u16; 4] = [128, 96, 64, 32];

pub fn suite_mode(args: &SuiteArgs) -> Result<()> {
    ensure!(args.iterations > 0, "iterations must be at least 1");

    let mut rng = StdRng::seed_from_u64(args.seed);
    let mut out = open_output(args.output.as_deref())?;
    let text = args.format == OutputFormat::Text;

    if text {
        writeln!(out, "=== EliMAC Test Suite ===")?;
        writeln!(out, "Backend: {}", elimac::active_backend())?;
        writeln!(out, "Encoding: {}", args.encoding.label())?;
    } else {
        writeln!(out, "{CSV_HEADER}")?;
    }

    let mut configurations = 0u32;

    // Fixed demo keys first, then a pair drawn from the seeded generator.
    for random_keys in [false, true] {
        let (key1, key2) = if random_keys {
            generate_keys(&mut rng)
        } else {
            (FIXED_KEY1, FIXED_KEY2)
        };
        if text {
            if random_keys {
                writeln!(out, "\n-- Seeded random keys (seed {}) --", args.seed)?;
            } else {
                writeln!(out, "\n-- Fixed demo keys --")?;
            }
        }

        let mac = Elimac::with_encoding(&key1, &key2, args.encoding.to_encoding());

        for &len in &LENGTHS {
            let mut message = vec![0u8; len];
            rng.fill_bytes(&mut message);

            // Counters cover every block except the final padded one.
            let cache = mac.precompute(((len / 16) as u32).max(1))?;

            for &bits in &TAG_BITS {
                let mut plain_tag: Option<Tag> = None;

                for precompute in [false, true] {
                    let request = TagRequest {
                        tag_bits: usize::from(bits),
                        parallel: args.parallel,
                        precomputation: if precompute {
                            Precomputation::Cached(&cache)
                        } else {
                            Precomputation::Off
                        },
                    };

                    let tag = mac.tag_with(&message, &request)?;
                    match plain_tag {
                        None => plain_tag = Some(tag),
                        Some(reference) => ensure!(
                            tag == reference,
                            "precomputed tag diverged at len {len}, {bits} bits"
                        ),
                    }

                    let start = Instant::now();
                    for _ in 0..args.iterations {
                        let _ = mac.tag_with(&message, &request)?;
                    }
                    let time_us =
                        start.elapsed().as_secs_f64() * 1e6 / f64::from(args.iterations);

                    let row = ReportRow {
                        message_length: len,
                        tag_bits: bits,
                        precompute,
                        parallel: args.parallel,
                        encoding: args.encoding.label(),
                        tag: format!("{tag:x}"),
                        time_us,
                    };
                    if text {
                        writeln!(out, "{}", row.to_text())?;
                    } else {
                        writeln!(out, "{}", row.to_csv())?;
                    }
                    configurations += 1;
                }
            }
        }
    }

    if text {
        writeln!(out, "\nAll {configurations} configurations verified")?;
    }

    Ok(())
}
