//! Portable software AES, bit-compatible with the AES-NI backend.

use crate::kernels::constants::{GF_POLY, SBOX};
use crate::kernels::schedule::KeySchedule;
use crate::types::Block;

// =============================================================================
// ROUND PRIMITIVES
// =============================================================================

/// GF(2^8) multiplication by 2 (used in `MixColumns`).
/// Branchless: `b >> 7` extracts the MSB as 0 or 1; multiplying by `GF_POLY`
/// produces the conditional reduction polynomial without a data-dependent branch.
const fn gf_double(b: u8) -> u8 {
    (b << 1) ^ ((b >> 7) * GF_POLY)
}

/// AES `MixColumns` on a single 4-byte column.
fn mix_column(c: &mut [u8]) {
    let t = [c[0], c[1], c[2], c[3]];
    c[0] = gf_double(t[0] ^ t[1]) ^ t[1] ^ t[2] ^ t[3];
    c[1] = gf_double(t[1] ^ t[2]) ^ t[2] ^ t[3] ^ t[0];
    c[2] = gf_double(t[2] ^ t[3]) ^ t[3] ^ t[0] ^ t[1];
    c[3] = gf_double(t[3] ^ t[0]) ^ t[0] ^ t[1] ^ t[2];
}

fn sub_bytes(s: &mut Block) {
    for b in s {
        *b = SBOX[*b as usize];
    }
}

fn shift_rows(s: &mut Block) {
    // Row 0: No shift
    // Row 1: Shift left 1
    let tmp = s[1];
    s[1] = s[5];
    s[5] = s[9];
    s[9] = s[13];
    s[13] = tmp;
    // Row 2: Shift left 2
    let tmp1 = s[2];
    let tmp2 = s[6];
    s[2] = s[10];
    s[6] = s[14];
    s[10] = tmp1;
    s[14] = tmp2;
    // Row 3: Shift left 3
    let tmp = s[15];
    s[15] = s[11];
    s[11] = s[7];
    s[7] = s[3];
    s[3] = tmp;
}

/// One middle AES round. Matches the hardware `aesenc` instruction.
pub(crate) fn aes_round(state: &Block, key: &Block) -> Block {
    let mut s = *state;
    sub_bytes(&mut s);
    shift_rows(&mut s);
    mix_column(&mut s[0..4]);
    mix_column(&mut s[4..8]);
    mix_column(&mut s[8..12]);
    mix_column(&mut s[12..16]);
    for (b, k) in s.iter_mut().zip(key) {
        *b ^= k;
    }
    s
}

/// Final AES round, without `MixColumns`. Matches `aesenclast`.
pub(crate) fn aes_last_round(state: &Block, key: &Block) -> Block {
    let mut s = *state;
    sub_bytes(&mut s);
    shift_rows(&mut s);
    for (b, k) in s.iter_mut().zip(key) {
        *b ^= k;
    }
    s
}

// =============================================================================
// BLOCK ENCRYPTION
// =============================================================================

/// Encrypt one block under `schedule`, honoring its truncated round count:
/// whitening with round key 0, `rounds - 1` middle rounds, one final round.
pub fn encrypt_block(schedule: &KeySchedule, input: &Block) -> Block {
    let rounds = schedule.rounds();
    let mut state = *input;
    for (b, k) in state.iter_mut().zip(schedule.round_key(0)) {
        *b ^= k;
    }
    for i in 1..rounds {
        state = aes_round(&state, schedule.round_key(i));
    }
    aes_last_round(&state, schedule.round_key(rounds))
}
