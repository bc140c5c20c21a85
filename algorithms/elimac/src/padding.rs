//! Message padding.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use crate::kernels::constants::BLOCK_SIZE;
use crate::types::Error;

/// Pad `message` with `0x80` and zeros to the next block boundary.
///
/// Always appends: a block-aligned message gains one full block of padding,
/// so two distinct messages can never pad to the same buffer. An empty
/// message pads to exactly one block (`0x80` then fifteen zeros).
///
/// # Errors
/// Returns `Error::AllocationFailed` if the padded buffer cannot be allocated.
pub fn pad(message: &[u8]) -> Result<Vec<u8>, Error> {
    let remainder = message.len() % BLOCK_SIZE;
    let padded_len = message
        .len()
        .checked_add(BLOCK_SIZE - remainder)
        .ok_or(Error::AllocationFailed)?;

    let mut padded = Vec::new();
    padded
        .try_reserve_exact(padded_len)
        .map_err(|_| Error::AllocationFailed)?;
    padded.extend_from_slice(message);
    padded.push(0x80);
    padded.resize(padded_len, 0);
    Ok(padded)
}
