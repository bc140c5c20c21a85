#![no_main]

use libfuzzer_sys::fuzz_target;
use elimac::{Elimac, Precomputation, TagRequest};

fuzz_target!(|data: &[u8]| {
    // =============================================================================
    // PREPARATION
    // =============================================================================

    // Split input to get specific parameters
    let mut key1 = [0u8; 16];
    let mut key2 = [0u8; 16];
    let msg_start = if data.len() >= 32 {
        key1.copy_from_slice(&data[0..16]);
        key2.copy_from_slice(&data[16..32]);
        32
    } else {
        0
    };
    let msg = &data[msg_start..];

    let mac = Elimac::new(&key1, &key2);

    // =============================================================================
    // 1. TAGGING & VERIFICATION
    // =============================================================================

    let tag = mac.tag(msg).unwrap();

    // Positive case: Correct key pair must verify
    assert!(
        mac.verify(msg, tag.as_bytes()).unwrap(),
        "Verification failed with correct keys"
    );

    // Negative case: Wrong hashing key must fail
    let mut wrong_key1 = key1;
    wrong_key1[0] ^= 0xFF; // Flip bits
    let wrong_mac = Elimac::new(&wrong_key1, &key2);

    assert!(
        !wrong_mac.verify(msg, tag.as_bytes()).unwrap(),
        "Verification succeeded with wrong key"
    );

    // =============================================================================
    // 2. TRUNCATION
    // =============================================================================

    // Every shorter tag must be a prefix of the full one
    for bits in [32, 64, 96] {
        let request = TagRequest {
            tag_bits: bits,
            ..TagRequest::default()
        };
        let short = mac.tag_with(msg, &request).unwrap();
        assert_eq!(
            short.as_bytes(),
            &tag.as_bytes()[..bits / 8],
            "Truncated tag is not a prefix"
        );
    }

    // =============================================================================
    // 3. PRECOMPUTATION TRANSPARENCY
    // =============================================================================

    let blocks = (msg.len() / 16 + 1) as u32;
    let request = TagRequest {
        precomputation: Precomputation::Build { max_blocks: blocks },
        ..TagRequest::default()
    };
    let precomputed = mac.tag_with(msg, &request).unwrap();
    assert_eq!(precomputed, tag, "Precomputation changed the tag");
});
