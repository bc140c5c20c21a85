//! AES-128 key expansion, truncated to a configurable round count.

use crate::kernels::constants::{BLOCK_SIZE, KEY_SIZE, MAX_ROUNDS, MIN_ROUNDS, RCON, SBOX};
use crate::types::Error;

// =============================================================================
// KEY SCHEDULE
// =============================================================================

/// Expanded round keys for truncated AES-128 encryption.
///
/// Storage is sized for the full 10-round schedule; `rounds` bounds how much
/// of it a cipher invocation reads. Expansion for `n` rounds is a prefix of
/// the expansion for any larger round count under the same key, so the 4- and
/// 7-round schedules derived from one key never disagree on shared rounds.
#[derive(Clone, Copy)]
pub struct KeySchedule {
    round_keys: [[u8; BLOCK_SIZE]; MAX_ROUNDS + 1],
    rounds: usize,
}

impl KeySchedule {
    /// Expand `key` for a `rounds`-round encryption, `4 <= rounds <= 10`.
    ///
    /// # Errors
    /// Returns `Error::InvalidParameter` for round counts outside `[4, 10]`.
    pub fn new(key: &[u8; KEY_SIZE], rounds: usize) -> Result<Self, Error> {
        if !(MIN_ROUNDS..=MAX_ROUNDS).contains(&rounds) {
            return Err(Error::InvalidParameter("round count must be in [4, 10]"));
        }
        Ok(Self::expand(key, rounds))
    }

    /// Expansion body shared with internal callers that pass crate constants.
    pub(crate) fn expand(key: &[u8; KEY_SIZE], rounds: usize) -> Self {
        debug_assert!((MIN_ROUNDS..=MAX_ROUNDS).contains(&rounds));
        let mut round_keys = [[0u8; BLOCK_SIZE]; MAX_ROUNDS + 1];
        round_keys[0] = *key;

        for i in 4..4 * (rounds + 1) {
            let mut temp = word(&round_keys, i - 1);
            if i % 4 == 0 {
                let t = temp[0];
                temp[0] = SBOX[temp[1] as usize] ^ RCON[i / 4 - 1];
                temp[1] = SBOX[temp[2] as usize];
                temp[2] = SBOX[temp[3] as usize];
                temp[3] = SBOX[t as usize];
            }
            let prev = word(&round_keys, i - 4);
            set_word(
                &mut round_keys,
                i,
                [
                    prev[0] ^ temp[0],
                    prev[1] ^ temp[1],
                    prev[2] ^ temp[2],
                    prev[3] ^ temp[3],
                ],
            );
        }
        Self { round_keys, rounds }
    }

    /// Number of rounds this schedule drives.
    #[must_use]
    pub const fn rounds(&self) -> usize {
        self.rounds
    }

    /// Round key `i`, valid for `0 <= i <= rounds`.
    #[must_use]
    pub const fn round_key(&self, i: usize) -> &[u8; BLOCK_SIZE] {
        &self.round_keys[i]
    }
}

// =============================================================================
// INTERNAL HELPERS
// =============================================================================

/// Read 32-bit word `i` of the flat schedule.
const fn word(keys: &[[u8; BLOCK_SIZE]; MAX_ROUNDS + 1], i: usize) -> [u8; 4] {
    let block = &keys[i / 4];
    let off = (i % 4) * 4;
    [block[off], block[off + 1], block[off + 2], block[off + 3]]
}

/// Write 32-bit word `i` of the flat schedule.
fn set_word(keys: &mut [[u8; BLOCK_SIZE]; MAX_ROUNDS + 1], i: usize, w: [u8; 4]) {
    let off = (i % 4) * 4;
    keys[i / 4][off..off + 4].copy_from_slice(&w);
}
