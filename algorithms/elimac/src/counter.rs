//! Counter encodings for the stream layer.
//!
//! Each non-final padded block is identified by a 1-based 32-bit counter. The
//! encoding controls how that counter is laid out in the 16-byte input to the
//! AES-7 stream cipher. All encodings are injective over the valid counter
//! range, which is what the hash stage needs; they exist as recorded variants
//! so parameter sets replay losslessly.

use crate::kernels::constants::BLOCK_SIZE;
use crate::types::{Block, Error};

// =============================================================================
// ENCODINGS
// =============================================================================

/// How a 32-bit block counter is laid out in a 16-byte cipher input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum CounterEncoding {
    /// Big-endian counter repeated in all four 32-bit lanes.
    Repeated = 0,
    /// Twelve zero bytes, then the big-endian counter.
    #[default]
    Compact = 1,
    /// Byte-for-byte identical to `Compact`; a separate id kept so recorded
    /// parameter sets replay losslessly.
    CompactAlt = 2,
    /// Twelve zero bytes, then the little-endian counter.
    CompactLe = 3,
}

impl CounterEncoding {
    /// Resolve a numeric encoding id.
    ///
    /// # Errors
    /// Returns `Error::InvalidParameter` for ids above 3.
    pub const fn from_id(id: u8) -> Result<Self, Error> {
        match id {
            0 => Ok(Self::Repeated),
            1 => Ok(Self::Compact),
            2 => Ok(Self::CompactAlt),
            3 => Ok(Self::CompactLe),
            _ => Err(Error::InvalidParameter("unknown counter encoding id")),
        }
    }

    /// Numeric id of this encoding.
    #[must_use]
    pub const fn id(self) -> u8 {
        self as u8
    }
}

// =============================================================================
// ENCODING
// =============================================================================

/// Encode a block counter into a cipher input block. Counters are 1-based.
///
/// # Errors
/// Returns `Error::InvalidParameter` for counter 0.
pub fn encode_counter(counter: u32, encoding: CounterEncoding) -> Result<Block, Error> {
    if counter == 0 {
        return Err(Error::InvalidParameter("block counters start at 1"));
    }
    Ok(encode(counter, encoding))
}

/// Encoding body; callers guarantee `counter >= 1`.
pub(crate) fn encode(counter: u32, encoding: CounterEncoding) -> Block {
    debug_assert!(counter >= 1);
    let mut block = [0u8; BLOCK_SIZE];
    match encoding {
        CounterEncoding::Repeated => {
            let be = counter.to_be_bytes();
            for lane in block.chunks_exact_mut(4) {
                lane.copy_from_slice(&be);
            }
        }
        CounterEncoding::Compact | CounterEncoding::CompactAlt => {
            block[12..].copy_from_slice(&counter.to_be_bytes());
        }
        CounterEncoding::CompactLe => {
            block[12..].copy_from_slice(&counter.to_le_bytes());
        }
    }
    block
}
