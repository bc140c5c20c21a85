#![cfg_attr(not(feature = "std"), no_std)]

//! # EliMAC
//!
//! Fast message authentication built from reduced-round AES layers.
//! A 7-round counter stream and a 4-round compression layer hash the
//! message; full 10-round AES under a second key produces the tag.
//! Accelerated by AES-NI where available.
//!
//! # Usage
//! ```rust
//! // 1. One-shot authentication
//! let key1 = [0x2b; 16];
//! let key2 = [0x3c; 16];
//! let tag = elimac::authenticate(&key1, &key2, b"Integrity Matters")?;
//!
//! // 2. Constant-time verification
//! let valid = elimac::verify_tag(&key1, &key2, b"Integrity Matters", tag.as_bytes())?;
//! assert!(valid);
//!
//! // 3. Streaming (large inputs / unknown length)
//! use elimac::Hasher;
//!
//! let mut hasher = Hasher::new(&key1, &key2);
//! hasher.update(b"Chunk 1");
//! hasher.update(b"Chunk 2");
//! let streamed = hasher.finalize()?;
//! assert_eq!(streamed.len(), 16);
//! # Ok::<(), elimac::Error>(())
//! ```

// =============================================================================
// MODULES
// =============================================================================

#[cfg(not(feature = "std"))]
extern crate alloc;

mod cache;
mod counter;
mod engine;
// Re-export internal kernels for benchmarking/testing if needed, but hide from docs
#[doc(hidden)]
pub mod kernels; // Public for test/example use only
mod mac;
mod padding;
mod stream;
pub(crate) mod types;

// =============================================================================
// EXPORTS
// =============================================================================

#[cfg(feature = "digest-trait")]
pub use digest;
pub use cache::SubkeyCache;
pub use counter::{encode_counter, CounterEncoding};
pub use mac::{authenticate, compute_tag, verify_tag, Elimac, Precomputation, TagRequest};
pub use padding::pad;
pub use stream::ElimacHasher as Hasher;
pub use types::{Block, Error, Tag};

/// Returns the name of the cipher backend currently in use.
#[must_use]
pub fn active_backend() -> &'static str {
    engine::active_backend_name()
}
