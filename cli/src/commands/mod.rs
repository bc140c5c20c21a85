//! CLI Commands
//!
//! All elimac CLI commands organized as separate modules.

mod report;
mod run;
mod suite;

pub use run::{run_mode, RunArgs};
pub use suite::{suite_mode, SuiteArgs};

/// Fixed demo key pair used when `--random-keys` is not given.
pub const FIXED_KEY1: [u8; 16] = [
    0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f, 0x3c,
];
/// Second half of the fixed demo key pair.
pub const FIXED_KEY2: [u8; 16] = [
    0x3c, 0x4f, 0xcf, 0x09, 0x88, 0x15, 0xf7, 0xab, 0xa6, 0xd2, 0xae, 0x28, 0x16, 0x15, 0x7e, 0x2b,
];
