//! Hardware Dispatcher
//!
//! Selects the fastest available cipher backend (AES-NI or portable) for the
//! current CPU.

use crate::kernels;
use crate::types::CipherFn;

// =============================================================================
// DISPATCHER
// =============================================================================

/// Returns the fastest cipher backend for this CPU.
#[must_use]
pub fn best_cipher() -> CipherFn {
    // 1. Runtime Dispatch (Std-only)
    #[cfg(all(feature = "std", any(target_arch = "x86", target_arch = "x86_64")))]
    {
        if is_x86_feature_detected!("aes") && is_x86_feature_detected!("sse2") {
            return safe_aesni_cipher;
        }
    }

    // 2. Compile-Time Dispatch (no_std)
    #[cfg(not(feature = "std"))]
    {
        #[cfg(all(
            any(target_arch = "x86", target_arch = "x86_64"),
            target_feature = "aes",
            target_feature = "sse2"
        ))]
        return safe_aesni_cipher;
    }

    // 3. Portable Fallback
    kernels::portable::encrypt_block
}

/// Returns the name of the active cipher backend.
#[must_use]
pub fn active_backend_name() -> &'static str {
    #[cfg(all(feature = "std", any(target_arch = "x86", target_arch = "x86_64")))]
    {
        if is_x86_feature_detected!("aes") && is_x86_feature_detected!("sse2") {
            return "aes-ni";
        }
    }

    #[cfg(all(
        not(feature = "std"),
        any(target_arch = "x86", target_arch = "x86_64"),
        target_feature = "aes",
        target_feature = "sse2"
    ))]
    {
        return "aes-ni";
    }

    "portable"
}

// =============================================================================
// WRAPPERS
// =============================================================================

/// Safe wrapper around the AES-NI backend.
#[inline]
#[allow(unsafe_code)]
#[allow(unused_variables)]
#[allow(dead_code)]
fn safe_aesni_cipher(
    schedule: &kernels::schedule::KeySchedule,
    input: &crate::types::Block,
) -> crate::types::Block {
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    // SAFETY: Only reachable after AES/SSE2 validation (runtime CPUID under
    // std, target_feature cfg under no_std).
    unsafe {
        kernels::aesni::encrypt_block(schedule, input)
    }
    #[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
    unreachable!("CPUID escape");
}
