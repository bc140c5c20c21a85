//! Shared types used across the EliMAC library.

use core::fmt;
#[cfg(feature = "std")]
use std::error;

use subtle::ConstantTimeEq;

use crate::kernels::constants::{BLOCK_SIZE, TAG_SIZE};

// =============================================================================
// CIPHER INTERFACE
// =============================================================================

/// A single 128-bit AES block.
pub type Block = [u8; BLOCK_SIZE];

/// Unified cipher function signature: `(schedule, input) -> output`.
///
/// The AES-NI backend and the portable fallback implement this same signature
/// so the dispatcher can swap them at runtime. The schedule carries its own
/// round count, so one function serves the 4-, 7-, and 10-round layers.
pub type CipherFn = fn(&crate::kernels::schedule::KeySchedule, &Block) -> Block;

/// XOR `src` into `dst` in place. `src` must hold at least `BLOCK_SIZE` bytes.
pub(crate) fn xor_into(dst: &mut Block, src: &[u8]) {
    for (d, s) in dst.iter_mut().zip(src) {
        *d ^= s;
    }
}

// =============================================================================
// TAG
// =============================================================================

/// An authentication tag truncated to the requested length.
///
/// Only the first `len` bytes are ever populated; the discarded suffix of the
/// 128-bit encryption output is zeroed at construction so no accessor (or
/// `Debug` output) can observe more tag material than was requested.
#[derive(Debug, Clone, Copy)]
pub struct Tag {
    bytes: [u8; TAG_SIZE],
    len: usize,
}

impl Tag {
    /// Truncate a full 128-bit encryption output to `tag_bits` bits.
    pub(crate) fn new(full: Block, tag_bits: usize) -> Self {
        let len = tag_bits / 8;
        let mut bytes = [0u8; TAG_SIZE];
        bytes[..len].copy_from_slice(&full[..len]);
        Self { bytes, len }
    }

    /// The truncated tag bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Tag length in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// `true` when a zero-bit tag was requested.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl AsRef<[u8]> for Tag {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

/// Constant-time comparison. Tags of different lengths are unequal without
/// inspecting their contents.
impl PartialEq for Tag {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && bool::from(self.as_bytes().ct_eq(other.as_bytes()))
    }
}

impl Eq for Tag {}

impl fmt::LowerHex for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.as_bytes() {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors produced by parameter validation and MAC computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Requested tag length outside [0, 128] bits.
    InvalidTagLength {
        /// The rejected length in bits.
        bits: usize,
    },
    /// The padded message spans more blocks than the 32-bit counter space.
    MessageTooLarge {
        /// Number of padded blocks in the rejected message.
        blocks: u64,
    },
    /// Precomputation was requested but the cache is absent or too small.
    InsufficientPrecomputation {
        /// Highest counter the message needs.
        required: u64,
        /// Highest counter the cache covers.
        available: u64,
    },
    /// Storage for the padded buffer or subkey cache could not be obtained.
    AllocationFailed,
    /// A parameter was structurally invalid (round count, encoding id,
    /// zero counter, cache/encoding mismatch).
    InvalidParameter(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTagLength { bits } => {
                write!(f, "tag length {bits} bits outside supported range [0, 128]")
            }
            Self::MessageTooLarge { blocks } => {
                write!(f, "message spans {blocks} blocks, more than the 2^32 supported")
            }
            Self::InsufficientPrecomputation {
                required,
                available,
            } => {
                write!(
                    f,
                    "precomputed cache covers counters up to {available}, message needs {required}"
                )
            }
            Self::AllocationFailed => write!(f, "allocation failed"),
            Self::InvalidParameter(what) => write!(f, "invalid parameter: {what}"),
        }
    }
}

#[cfg(feature = "std")]
impl error::Error for Error {}
