//! MAC Orchestration
//!
//! Parameter validation, padding, subkey-cache resolution, the hash fold, and
//! final-block encryption under the second key.

use subtle::ConstantTimeEq;

use crate::cache::SubkeyCache;
use crate::counter::CounterEncoding;
use crate::engine::dispatcher;
use crate::engine::elihash::{self, HashContext};
use crate::kernels::constants::{
    BLOCK_SIZE, COMPRESS_ROUNDS, FINAL_ROUNDS, KEY_SIZE, MAX_BLOCKS, STREAM_ROUNDS, TAG_SIZE,
};
use crate::kernels::schedule::KeySchedule;
use crate::padding;
use crate::types::{xor_into, CipherFn, Error, Tag};

// =============================================================================
// REQUEST OPTIONS
// =============================================================================

/// Where the stream-layer subkeys come from during hashing.
#[derive(Debug, Clone, Copy, Default)]
pub enum Precomputation<'a> {
    /// Compute every AES-7 subkey on the fly.
    #[default]
    Off,
    /// Serve subkeys from a caller-owned cache built via
    /// [`Elimac::precompute`] or [`SubkeyCache::build`].
    Cached(&'a SubkeyCache),
    /// Build a throwaway cache covering `1..=max_blocks` before hashing.
    Build {
        /// Highest counter the cache will cover; must be at least the
        /// message's non-final block count, and at least 1.
        max_blocks: u32,
    },
}

/// Per-message options for [`Elimac::tag_with`] and [`compute_tag`].
#[derive(Debug, Clone, Copy)]
pub struct TagRequest<'a> {
    /// Requested tag length in bits, `0..=128`. Only byte-aligned values are
    /// meaningful; others truncate down to whole bytes.
    pub tag_bits: usize,
    /// Fold blocks across threads. Without the `multithread` feature this
    /// degrades to the sequential fold, which produces the same tag.
    pub parallel: bool,
    /// Stream-layer subkey sourcing.
    pub precomputation: Precomputation<'a>,
}

impl Default for TagRequest<'_> {
    fn default() -> Self {
        Self {
            tag_bits: 128,
            parallel: false,
            precomputation: Precomputation::Off,
        }
    }
}

// =============================================================================
// KEYED INSTANCE
// =============================================================================

/// A keyed EliMAC instance: schedules expanded once, backend selected once.
///
/// # Example
/// ```rust
/// use elimac::Elimac;
///
/// let mac = Elimac::new(&[0x2b; 16], &[0x3c; 16]);
/// let tag = mac.tag(b"attested payload")?;
/// assert!(mac.verify(b"attested payload", tag.as_bytes())?);
/// # Ok::<(), elimac::Error>(())
/// ```
#[derive(Clone)]
pub struct Elimac {
    schedule7: KeySchedule,
    schedule4: KeySchedule,
    schedule10: KeySchedule,
    cipher: CipherFn,
    encoding: CounterEncoding,
}

impl Elimac {
    /// Expand both keys, hashing with the default `Compact` counter encoding.
    #[must_use]
    pub fn new(key1: &[u8; KEY_SIZE], key2: &[u8; KEY_SIZE]) -> Self {
        Self::with_encoding(key1, key2, CounterEncoding::default())
    }

    /// Expand both keys for a chosen counter encoding.
    ///
    /// The 7-round (stream) and 4-round (compression) schedules both derive
    /// from `key1`; the 10-round finalization schedule derives from `key2`.
    #[must_use]
    pub fn with_encoding(
        key1: &[u8; KEY_SIZE],
        key2: &[u8; KEY_SIZE],
        encoding: CounterEncoding,
    ) -> Self {
        Self {
            schedule7: KeySchedule::expand(key1, STREAM_ROUNDS),
            schedule4: KeySchedule::expand(key1, COMPRESS_ROUNDS),
            schedule10: KeySchedule::expand(key2, FINAL_ROUNDS),
            cipher: dispatcher::best_cipher(),
            encoding,
        }
    }

    /// Counter encoding this instance hashes with.
    #[must_use]
    pub const fn encoding(&self) -> CounterEncoding {
        self.encoding
    }

    /// Build a reusable subkey cache for counters `1..=max_blocks` under this
    /// instance's first key and encoding.
    ///
    /// # Errors
    /// Returns `Error::AllocationFailed` if the table cannot be allocated.
    pub fn precompute(&self, max_blocks: u32) -> Result<SubkeyCache, Error> {
        SubkeyCache::build_with_schedule(&self.schedule7, max_blocks, self.encoding)
    }

    /// Start an incremental hasher sharing this instance's schedules.
    #[must_use]
    pub fn hasher(&self) -> crate::stream::ElimacHasher {
        crate::stream::ElimacHasher::from_parts(
            self.schedule7,
            self.schedule4,
            self.schedule10,
            self.cipher,
            self.encoding,
        )
    }

    /// 128-bit tag with default options (sequential, no precomputation).
    ///
    /// # Errors
    /// Returns `Error::MessageTooLarge` if the padded message exceeds 2^32 blocks.
    pub fn tag(&self, message: &[u8]) -> Result<Tag, Error> {
        self.tag_with(message, &TagRequest::default())
    }

    /// Compute a tag under explicit options.
    ///
    /// # Errors
    /// Returns `Error::InvalidTagLength` for `tag_bits > 128`,
    /// `Error::MessageTooLarge` past 2^32 padded blocks, and
    /// `Error::InsufficientPrecomputation` when the requested cache cannot
    /// cover every non-final block.
    pub fn tag_with(&self, message: &[u8], request: &TagRequest<'_>) -> Result<Tag, Error> {
        if request.tag_bits > 8 * TAG_SIZE {
            return Err(Error::InvalidTagLength {
                bits: request.tag_bits,
            });
        }

        let padded = padding::pad(message)?;
        let blocks = (padded.len() / BLOCK_SIZE) as u64;
        if blocks > MAX_BLOCKS {
            return Err(Error::MessageTooLarge { blocks });
        }

        // Counters run over the non-final blocks only.
        let required = blocks - 1;
        let built;
        let cache = match request.precomputation {
            Precomputation::Off => None,
            Precomputation::Cached(cache) => {
                if cache.encoding() != self.encoding {
                    return Err(Error::InvalidParameter(
                        "cache was built with a different counter encoding",
                    ));
                }
                let available = u64::from(cache.max_blocks());
                if available < required {
                    return Err(Error::InsufficientPrecomputation {
                        required,
                        available,
                    });
                }
                Some(cache)
            }
            Precomputation::Build { max_blocks } => {
                if max_blocks == 0 || u64::from(max_blocks) < required {
                    return Err(Error::InsufficientPrecomputation {
                        required,
                        available: u64::from(max_blocks),
                    });
                }
                built = self.precompute(max_blocks)?;
                Some(&built)
            }
        };

        let ctx = HashContext {
            cipher: self.cipher,
            schedule7: &self.schedule7,
            schedule4: &self.schedule4,
            cache,
            encoding: self.encoding,
        };
        let mut state = if request.parallel {
            elihash::accumulate_parallel(&ctx, &padded)
        } else {
            elihash::accumulate(&ctx, &padded)
        };

        // Last block enters the state raw, without compression.
        xor_into(&mut state, &padded[padded.len() - BLOCK_SIZE..]);

        let full = (self.cipher)(&self.schedule10, &state);
        Ok(Tag::new(full, request.tag_bits))
    }

    /// Constant-time check of `expected` against a freshly computed tag.
    ///
    /// The expected length selects the tag truncation: pass 4 bytes to check
    /// a 32-bit tag.
    ///
    /// # Errors
    /// Returns `Error::InvalidTagLength` if `expected` is longer than 16
    /// bytes, or any error [`tag_with`](Self::tag_with) reports.
    pub fn verify(&self, message: &[u8], expected: &[u8]) -> Result<bool, Error> {
        let request = TagRequest {
            tag_bits: expected.len() * 8,
            ..TagRequest::default()
        };
        let tag = self.tag_with(message, &request)?;
        Ok(bool::from(tag.as_bytes().ct_eq(expected)))
    }
}

// =============================================================================
// ONE-SHOT API
// =============================================================================

/// One-shot EliMAC under explicit keys, encoding, and options.
///
/// Equivalent to building an [`Elimac`] and calling
/// [`tag_with`](Elimac::tag_with); prefer the instance when authenticating
/// many messages under one key pair, since it expands the schedules once.
///
/// # Errors
/// Returns any error [`Elimac::tag_with`] reports.
pub fn compute_tag(
    key1: &[u8; KEY_SIZE],
    key2: &[u8; KEY_SIZE],
    message: &[u8],
    encoding: CounterEncoding,
    request: &TagRequest<'_>,
) -> Result<Tag, Error> {
    Elimac::with_encoding(key1, key2, encoding).tag_with(message, request)
}

/// One-shot 128-bit tag with default options.
///
/// # Example
/// ```rust
/// let tag = elimac::authenticate(&[0x2b; 16], &[0x3c; 16], b"message")?;
/// assert_eq!(tag.len(), 16);
/// # Ok::<(), elimac::Error>(())
/// ```
///
/// # Errors
/// Returns `Error::MessageTooLarge` if the padded message exceeds 2^32 blocks.
pub fn authenticate(
    key1: &[u8; KEY_SIZE],
    key2: &[u8; KEY_SIZE],
    message: &[u8],
) -> Result<Tag, Error> {
    Elimac::new(key1, key2).tag(message)
}

/// One-shot constant-time verification; see [`Elimac::verify`].
///
/// # Errors
/// Returns any error [`Elimac::verify`] reports.
pub fn verify_tag(
    key1: &[u8; KEY_SIZE],
    key2: &[u8; KEY_SIZE],
    message: &[u8],
    expected: &[u8],
) -> Result<bool, Error> {
    Elimac::new(key1, key2).verify(message, expected)
}
