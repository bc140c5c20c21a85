use bolero::check;
use elimac::Elimac;

const KEY1: [u8; 16] = [
    0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f, 0x3c,
];
const KEY2: [u8; 16] = [
    0x3c, 0x4f, 0xcf, 0x09, 0x88, 0x15, 0xf7, 0xab, 0xa6, 0xd2, 0xae, 0x28, 0x16, 0x15, 0x7e, 0x2b,
];

#[test]
fn fuzz_verification_logic() {
    let mac = Elimac::new(&KEY1, &KEY2);
    check!().with_type::<Vec<u8>>().for_each(|data| {
        // =============================================================================
        // POSITIVE TEST
        // =============================================================================

        let tag = mac.tag(data).unwrap();
        assert!(
            mac.verify(data, tag.as_bytes()).unwrap(),
            "verify() failed on correct data"
        );

        // =============================================================================
        // NEGATIVE TESTS (CORRUPTION)
        // =============================================================================

        // 1. Data Corruption
        if !data.is_empty() {
            let mut corrupted_data = data.clone();
            corrupted_data[0] ^= 0x01;
            assert!(
                !mac.verify(&corrupted_data, tag.as_bytes()).unwrap(),
                "verify() succeeded on corrupted data"
            );
        }

        // 2. Tag Corruption
        let mut bad_tag = [0u8; 16];
        bad_tag.copy_from_slice(tag.as_bytes());
        bad_tag[0] ^= 0xFF; // Flip influential bits

        assert!(
            !mac.verify(data, &bad_tag).unwrap(),
            "verify() succeeded on corrupted tag"
        );
    });
}
