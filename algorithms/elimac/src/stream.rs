//! Streaming Hasher
//!
//! Incremental EliMAC with a one-block lag buffer. The final block of a
//! message folds into the state raw instead of through the compression
//! layer, so a block is only compressed once a later byte proves it is not
//! the last. Memory use is constant regardless of message length.

#![allow(clippy::cast_possible_truncation)]

use crate::counter::{self, CounterEncoding};
use crate::engine::dispatcher;
use crate::kernels::constants::{
    BLOCK_SIZE, COMPRESS_ROUNDS, FINAL_ROUNDS, KEY_SIZE, MAX_BLOCKS, STREAM_ROUNDS, TAG_SIZE,
};
use crate::kernels::schedule::KeySchedule;
use crate::types::{xor_into, Block, CipherFn, Error, Tag};

#[cfg(feature = "digest-trait")]
use crypto_common::{Key, KeySizeUser};
#[cfg(feature = "digest-trait")]
use digest::typenum::{U16, U32};
#[cfg(feature = "digest-trait")]
use digest::Output;
#[cfg(feature = "digest-trait")]
use digest::{FixedOutput, KeyInit, MacMarker, OutputSizeUser, Reset, Update};

// =============================================================================
// STREAMING HASHER
// =============================================================================

/// Incremental EliMAC over two 128-bit keys.
///
/// Feed data with [`update`](Self::update), then consume the hasher with
/// [`finalize`](Self::finalize). Produces exactly the tag the one-shot
/// [`Elimac`](crate::Elimac) API computes for the concatenated input.
/// Streaming is sequential; use [`Elimac::tag_with`](crate::Elimac::tag_with)
/// when the whole message is in memory and worth folding in parallel.
#[derive(Clone)]
pub struct ElimacHasher {
    schedule7: KeySchedule,
    schedule4: KeySchedule,
    schedule10: KeySchedule,
    cipher: CipherFn,
    encoding: CounterEncoding,
    /// Lag buffer holding the newest (possibly final) block.
    buffer: [u8; BLOCK_SIZE],
    buffered: usize,
    state: Block,
    /// Blocks already run through the compression layer.
    compressed: u64,
    overflowed: bool,
}

impl ElimacHasher {
    // =========================================================================
    // INITIALIZATION
    // =========================================================================

    /// Create a hasher with the default `Compact` counter encoding.
    #[must_use]
    pub fn new(key1: &[u8; KEY_SIZE], key2: &[u8; KEY_SIZE]) -> Self {
        Self::with_encoding(key1, key2, CounterEncoding::default())
    }

    /// Create a hasher with a chosen counter encoding.
    #[must_use]
    pub fn with_encoding(
        key1: &[u8; KEY_SIZE],
        key2: &[u8; KEY_SIZE],
        encoding: CounterEncoding,
    ) -> Self {
        Self::from_parts(
            KeySchedule::expand(key1, STREAM_ROUNDS),
            KeySchedule::expand(key1, COMPRESS_ROUNDS),
            KeySchedule::expand(key2, FINAL_ROUNDS),
            dispatcher::best_cipher(),
            encoding,
        )
    }

    pub(crate) fn from_parts(
        schedule7: KeySchedule,
        schedule4: KeySchedule,
        schedule10: KeySchedule,
        cipher: CipherFn,
        encoding: CounterEncoding,
    ) -> Self {
        Self {
            schedule7,
            schedule4,
            schedule10,
            cipher,
            encoding,
            buffer: [0u8; BLOCK_SIZE],
            buffered: 0,
            state: [0u8; BLOCK_SIZE],
            compressed: 0,
            overflowed: false,
        }
    }

    // =========================================================================
    // STATE MODIFICATION
    // =========================================================================

    /// Add data to the hasher.
    ///
    /// A buffered block is compressed only once a later byte arrives, keeping
    /// the candidate final block out of the compression layer.
    pub fn update(&mut self, data: &[u8]) {
        let mut input = data;
        while !input.is_empty() {
            if self.buffered == BLOCK_SIZE {
                self.compress_buffer();
            }
            let take = (BLOCK_SIZE - self.buffered).min(input.len());
            self.buffer[self.buffered..self.buffered + take].copy_from_slice(&input[..take]);
            self.buffered += take;
            input = &input[take..];
        }
    }

    /// Run the full lag buffer through the compression layer.
    ///
    /// Counters are 32-bit; once they would wrap, the hasher switches to an
    /// overflow state that only keeps counting blocks, and `finalize` reports
    /// the message as too large.
    fn compress_buffer(&mut self) {
        debug_assert_eq!(self.buffered, BLOCK_SIZE);
        if self.compressed >= MAX_BLOCKS - 1 {
            self.overflowed = true;
            self.compressed += 1;
            self.buffered = 0;
            return;
        }
        let counter = (self.compressed + 1) as u32;
        let mut mixed = (self.cipher)(&self.schedule7, &counter::encode(counter, self.encoding));
        xor_into(&mut mixed, &self.buffer);
        let compressed = (self.cipher)(&self.schedule4, &mixed);
        xor_into(&mut self.state, &compressed);
        self.compressed += 1;
        self.buffered = 0;
    }

    // =========================================================================
    // FINALIZATION
    // =========================================================================

    /// Finalize with a truncated tag of `tag_bits` bits.
    ///
    /// # Errors
    /// Returns `Error::InvalidTagLength` for `tag_bits > 128`, or
    /// `Error::MessageTooLarge` if the stream exceeded 2^32 padded blocks.
    pub fn finalize_bits(mut self, tag_bits: usize) -> Result<Tag, Error> {
        if tag_bits > 8 * TAG_SIZE {
            return Err(Error::InvalidTagLength { bits: tag_bits });
        }

        // Build the padded final block. A full buffer means the message
        // length is block-aligned, so the final block is pure padding.
        let mut last = [0u8; BLOCK_SIZE];
        if self.buffered == BLOCK_SIZE {
            self.compress_buffer();
            last[0] = 0x80;
        } else {
            last[..self.buffered].copy_from_slice(&self.buffer[..self.buffered]);
            last[self.buffered] = 0x80;
        }

        if self.overflowed {
            return Err(Error::MessageTooLarge {
                blocks: self.compressed + 1,
            });
        }

        xor_into(&mut self.state, &last);
        let full = (self.cipher)(&self.schedule10, &self.state);
        Ok(Tag::new(full, tag_bits))
    }

    /// Finalize with the full 128-bit tag.
    ///
    /// # Errors
    /// Returns `Error::MessageTooLarge` if the stream exceeded 2^32 padded
    /// blocks.
    pub fn finalize(self) -> Result<Tag, Error> {
        self.finalize_bits(8 * TAG_SIZE)
    }

    /// Reset for reuse under the same keys and encoding.
    pub fn reset(&mut self) {
        self.buffer = [0u8; BLOCK_SIZE];
        self.buffered = 0;
        self.state = [0u8; BLOCK_SIZE];
        self.compressed = 0;
        self.overflowed = false;
    }
}

// =============================================================================
// TRAIT IMPL
// =============================================================================

#[cfg(feature = "digest-trait")]
impl OutputSizeUser for ElimacHasher {
    type OutputSize = U16;
}

#[cfg(feature = "digest-trait")]
impl KeySizeUser for ElimacHasher {
    type KeySize = U32;
}

#[cfg(feature = "digest-trait")]
impl Update for ElimacHasher {
    fn update(&mut self, data: &[u8]) {
        self.update(data);
    }
}

#[cfg(feature = "digest-trait")]
impl FixedOutput for ElimacHasher {
    #[allow(clippy::expect_used)]
    fn finalize_into(self, out: &mut Output<Self>) {
        let tag = self
            .finalize()
            .expect("message exceeds the 2^32-block limit");
        out.copy_from_slice(tag.as_bytes());
    }
}

#[cfg(feature = "digest-trait")]
impl Reset for ElimacHasher {
    fn reset(&mut self) {
        self.reset();
    }
}

#[cfg(feature = "digest-trait")]
impl MacMarker for ElimacHasher {}

#[cfg(feature = "digest-trait")]
impl KeyInit for ElimacHasher {
    #[allow(clippy::expect_used)]
    fn new(key: &Key<Self>) -> Self {
        // KeySize is U32: the first key drives hashing, the second finalization.
        let (k1, k2) = key.as_slice().split_at(KEY_SIZE);
        let key1: [u8; KEY_SIZE] = k1.try_into().expect("Key length mismatch");
        let key2: [u8; KEY_SIZE] = k2.try_into().expect("Key length mismatch");
        Self::new(&key1, &key2)
    }
}
