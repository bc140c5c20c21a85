use bolero::check;
use elimac::{Elimac, TagRequest};

const KEY1: [u8; 16] = [
    0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f, 0x3c,
];
const KEY2: [u8; 16] = [
    0x3c, 0x4f, 0xcf, 0x09, 0x88, 0x15, 0xf7, 0xab, 0xa6, 0xd2, 0xae, 0x28, 0x16, 0x15, 0x7e, 0x2b,
];

#[test]
fn fuzz_parallel_consistency() {
    let mac = Elimac::new(&KEY1, &KEY2);
    check!().with_type::<Vec<u8>>().for_each(|data| {
        // =============================================================================
        // PARALLEL EXECUTION (RAYON)
        // =============================================================================

        // Logic: the XOR fold is order-free, so Rayon's work splitting must
        // be invisible in the tag.
        let request = TagRequest {
            parallel: true,
            ..TagRequest::default()
        };
        let parallel_tag = mac.tag_with(data, &request).unwrap();

        // =============================================================================
        // SEQUENTIAL REFERENCE
        // =============================================================================

        // Logic: the plain fold walks blocks strictly in counter order.
        // This serves as the "Ground Truth" for the parallel implementation.
        let sequential_tag = mac.tag(data).unwrap();

        // =============================================================================
        // VERIFICATION
        // =============================================================================

        assert_eq!(
            parallel_tag, sequential_tag,
            "Parallel tag mismatch (Rayon vs Sequential)"
        );
    });
}
