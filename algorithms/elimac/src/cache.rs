//! Precomputed subkey table for the stream layer.

#![allow(clippy::cast_possible_truncation)]

use core::fmt;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use crate::counter::{self, CounterEncoding};
use crate::engine::dispatcher;
use crate::kernels::constants::{KEY_SIZE, STREAM_ROUNDS};
use crate::kernels::schedule::KeySchedule;
use crate::types::{Block, Error};

// =============================================================================
// SUBKEY CACHE
// =============================================================================

/// Precomputed AES-7 outputs for every counter in `[1, max_blocks]`.
///
/// Hashing a message reads one stream subkey per non-final block; building
/// this table once trades `max_blocks` encryptions up front for table lookups
/// on every message afterwards.
///
/// A cache is valid only for the key and counter encoding it was built from.
/// The encoding travels with the cache and is checked at use; key identity is
/// the caller's contract, since verifying it would cost the very encryptions
/// the cache exists to save.
pub struct SubkeyCache {
    entries: Vec<Block>,
    encoding: CounterEncoding,
}

impl SubkeyCache {
    /// Build a cache covering counters `1..=max_blocks` under `key1`.
    ///
    /// # Errors
    /// Returns `Error::AllocationFailed` if the table cannot be allocated.
    pub fn build(
        key1: &[u8; KEY_SIZE],
        max_blocks: u32,
        encoding: CounterEncoding,
    ) -> Result<Self, Error> {
        let schedule = KeySchedule::new(key1, STREAM_ROUNDS)?;
        Self::build_with_schedule(&schedule, max_blocks, encoding)
    }

    /// Build from an already-expanded 7-round schedule.
    ///
    /// # Errors
    /// Returns `Error::InvalidParameter` for a schedule with any other round
    /// count, or `Error::AllocationFailed` if the table cannot be allocated.
    pub fn build_with_schedule(
        schedule: &KeySchedule,
        max_blocks: u32,
        encoding: CounterEncoding,
    ) -> Result<Self, Error> {
        if schedule.rounds() != STREAM_ROUNDS {
            return Err(Error::InvalidParameter(
                "subkey cache needs a 7-round schedule",
            ));
        }
        let cipher = dispatcher::best_cipher();
        let mut entries = Vec::new();
        entries
            .try_reserve_exact(max_blocks as usize)
            .map_err(|_| Error::AllocationFailed)?;
        for i in 1..=max_blocks {
            entries.push(cipher(schedule, &counter::encode(i, encoding)));
        }
        Ok(Self { entries, encoding })
    }

    /// Highest counter this cache serves.
    #[must_use]
    pub fn max_blocks(&self) -> u32 {
        u32::try_from(self.entries.len()).unwrap_or(u32::MAX)
    }

    /// Encoding the cache was built with.
    #[must_use]
    pub const fn encoding(&self) -> CounterEncoding {
        self.encoding
    }

    /// Cached AES-7 output for `counter`, if within range.
    #[must_use]
    pub fn subkey(&self, counter: u32) -> Option<&Block> {
        counter
            .checked_sub(1)
            .and_then(|i| self.entries.get(i as usize))
    }
}

/// Omits the entries themselves, which are key-derived material.
impl fmt::Debug for SubkeyCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubkeyCache")
            .field("max_blocks", &self.max_blocks())
            .field("encoding", &self.encoding)
            .finish_non_exhaustive()
    }
}
