//! AES-NI accelerated encryption (x86/x86_64).
//!
//! One `aesenc` per middle round and one `aesenclast` for the final round,
//! driven by the schedule's truncated round count. Bit-identical to the
//! portable backend.

use crate::kernels::constants::BLOCK_SIZE;
use crate::kernels::schedule::KeySchedule;
use crate::types::Block;

#[cfg(target_arch = "x86")]
use core::arch::x86::{
    __m128i, _mm_aesenc_si128, _mm_aesenclast_si128, _mm_loadu_si128, _mm_storeu_si128,
    _mm_xor_si128,
};
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::{
    __m128i, _mm_aesenc_si128, _mm_aesenclast_si128, _mm_loadu_si128, _mm_storeu_si128,
    _mm_xor_si128,
};

// =============================================================================
// BLOCK ENCRYPTION
// =============================================================================

/// Encrypt one block under `schedule`, honoring its truncated round count.
// SAFETY: Requires AES/SSE2 CPU features (enforced by the dispatcher).
// All loads/stores use unaligned intrinsics on 16-byte arrays, so there is
// no alignment contract beyond the references being valid.
#[target_feature(enable = "aes")]
#[target_feature(enable = "sse2")]
#[allow(unsafe_code)]
pub unsafe fn encrypt_block(schedule: &KeySchedule, input: &Block) -> Block {
    let rounds = schedule.rounds();
    let mut state = _mm_loadu_si128(input.as_ptr().cast::<__m128i>());
    state = _mm_xor_si128(
        state,
        _mm_loadu_si128(schedule.round_key(0).as_ptr().cast::<__m128i>()),
    );
    for i in 1..rounds {
        state = _mm_aesenc_si128(
            state,
            _mm_loadu_si128(schedule.round_key(i).as_ptr().cast::<__m128i>()),
        );
    }
    state = _mm_aesenclast_si128(
        state,
        _mm_loadu_si128(schedule.round_key(rounds).as_ptr().cast::<__m128i>()),
    );
    let mut output = [0u8; BLOCK_SIZE];
    _mm_storeu_si128(output.as_mut_ptr().cast::<__m128i>(), state);
    output
}
