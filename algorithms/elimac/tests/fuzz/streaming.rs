use bolero::check;
use elimac::Hasher;

const KEY1: [u8; 16] = [
    0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f, 0x3c,
];
const KEY2: [u8; 16] = [
    0x3c, 0x4f, 0xcf, 0x09, 0x88, 0x15, 0xf7, 0xab, 0xa6, 0xd2, 0xae, 0x28, 0x16, 0x15, 0x7e, 0x2b,
];

#[test]
fn fuzz_streaming_consistency() {
    check!().with_type::<Vec<u8>>().for_each(|data| {
        // =============================================================================
        // BASELINE (ONE-SHOT)
        // =============================================================================
        let expected = elimac::authenticate(&KEY1, &KEY2, data).unwrap();

        // =============================================================================
        // STREAMING VARIATIONS
        // =============================================================================

        // 1. Single Update
        let mut hasher = Hasher::new(&KEY1, &KEY2);
        hasher.update(data);
        let res = hasher.finalize().unwrap();
        assert_eq!(res, expected, "Streaming single update mismatch");

        // 2. Byte-by-Byte (Small Inputs Only)
        if data.len() < 256 {
            let mut hasher = Hasher::new(&KEY1, &KEY2);
            for b in data {
                hasher.update(&[*b]);
            }
            let res = hasher.finalize().unwrap();
            assert_eq!(res, expected, "Byte-by-byte streaming mismatch");
        }

        // 3. Arbitrary Split Points
        if data.len() > 1 {
            for split_idx in [1, data.len() / 2, data.len() - 1] {
                let mut hasher = Hasher::new(&KEY1, &KEY2);
                let (first, second) = data.split_at(split_idx);
                hasher.update(first);
                hasher.update(second);
                let res = hasher.finalize().unwrap();
                assert_eq!(res, expected, "Split at {split_idx} mismatch");
            }
        }
    });
}
