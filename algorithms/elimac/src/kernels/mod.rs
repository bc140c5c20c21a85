//! Cipher Kernels
//!
//! Hardware-specific and portable implementations of truncated-round AES,
//! plus the key schedule and the constants they share.

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub mod aesni;
pub mod constants;
pub mod portable;
pub mod schedule;

use crate::types::Block;
use schedule::KeySchedule;

/// Encrypt one block under `schedule` using the fastest available backend.
///
/// Convenience entry for callers outside the hot path; the MAC engine binds
/// the backend once per keyed instance instead.
#[must_use]
pub fn encrypt_block(schedule: &KeySchedule, input: &Block) -> Block {
    (crate::engine::dispatcher::best_cipher())(schedule, input)
}
