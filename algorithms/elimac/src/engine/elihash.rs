//! Elihash Accumulator
//!
//! The parallelizable universal-hash core: every non-final padded block is
//! compressed independently (stream subkey XOR block, then AES-4) and the
//! outputs are XOR-folded into one 128-bit state. XOR is commutative and
//! associative, so sequential and parallel folds produce identical states.

#![allow(clippy::cast_possible_truncation)]

use crate::cache::SubkeyCache;
use crate::counter::{self, CounterEncoding};
use crate::kernels::constants::BLOCK_SIZE;
use crate::kernels::schedule::KeySchedule;
use crate::types::{xor_into, Block, CipherFn};

#[cfg(feature = "multithread")]
use rayon::prelude::*;

// =============================================================================
// HASH CONTEXT
// =============================================================================

/// Everything one compression call needs, shared read-only across workers.
pub(crate) struct HashContext<'a> {
    pub(crate) cipher: CipherFn,
    pub(crate) schedule7: &'a KeySchedule,
    pub(crate) schedule4: &'a KeySchedule,
    pub(crate) cache: Option<&'a SubkeyCache>,
    pub(crate) encoding: CounterEncoding,
}

impl HashContext<'_> {
    /// Stream subkey for one counter: AES-7 of the encoded counter, read from
    /// the cache when one is wired in. The orchestrator has already verified
    /// that a wired cache covers every counter this message needs.
    fn stream_subkey(&self, counter: u32) -> Block {
        match self.cache.and_then(|cache| cache.subkey(counter)) {
            Some(entry) => *entry,
            None => (self.cipher)(
                self.schedule7,
                &counter::encode(counter, self.encoding),
            ),
        }
    }

    /// Compress one message block: AES-4 over (stream subkey XOR block).
    fn compress(&self, counter: u32, block: &[u8]) -> Block {
        let mut input = self.stream_subkey(counter);
        xor_into(&mut input, block);
        (self.cipher)(self.schedule4, &input)
    }
}

// =============================================================================
// ACCUMULATION
// =============================================================================

/// XOR-fold the compression outputs of all blocks except the last.
///
/// `padded` must be a non-empty whole number of blocks whose count the caller
/// has already validated against the counter space.
pub(crate) fn accumulate(ctx: &HashContext<'_>, padded: &[u8]) -> Block {
    let blocks = padded.len() / BLOCK_SIZE;
    let mut state = [0u8; BLOCK_SIZE];
    for (i, block) in padded
        .chunks_exact(BLOCK_SIZE)
        .take(blocks.saturating_sub(1))
        .enumerate()
    {
        let out = ctx.compress((i + 1) as u32, block);
        xor_into(&mut state, &out);
    }
    state
}

/// Parallel fold: per-worker partial states merged with XOR, so the result is
/// bit-identical to the sequential fold regardless of work splitting.
#[cfg(feature = "multithread")]
pub(crate) fn accumulate_parallel(ctx: &HashContext<'_>, padded: &[u8]) -> Block {
    let blocks = padded.len() / BLOCK_SIZE;
    padded
        .par_chunks_exact(BLOCK_SIZE)
        .take(blocks.saturating_sub(1))
        .enumerate()
        .fold(
            || [0u8; BLOCK_SIZE],
            |mut acc, (i, block)| {
                let out = ctx.compress((i + 1) as u32, block);
                xor_into(&mut acc, &out);
                acc
            },
        )
        .reduce(
            || [0u8; BLOCK_SIZE],
            |mut a, b| {
                xor_into(&mut a, &b);
                a
            },
        )
}

/// Degrades to the sequential fold when thread support is compiled out.
#[cfg(not(feature = "multithread"))]
pub(crate) fn accumulate_parallel(ctx: &HashContext<'_>, padded: &[u8]) -> Block {
    accumulate(ctx, padded)
}
