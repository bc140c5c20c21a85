#![no_main]

use libfuzzer_sys::fuzz_target;
use elimac::Hasher;

const KEY1: [u8; 16] = [
    0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f, 0x3c,
];
const KEY2: [u8; 16] = [
    0x3c, 0x4f, 0xcf, 0x09, 0x88, 0x15, 0xf7, 0xab, 0xa6, 0xd2, 0xae, 0x28, 0x16, 0x15, 0x7e, 0x2b,
];

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    // Calculate one-shot tag as reference
    let reference_tag = elimac::authenticate(&KEY1, &KEY2, data).unwrap();

    // Calculate streaming tag by splitting into arbitrary small chunks.
    // Chunk size is derived from the first byte (1 to 255).
    let chunk_size = (data[0] as usize % 255) + 1;

    let mut hasher = Hasher::new(&KEY1, &KEY2);
    for chunk in data.chunks(chunk_size) {
        hasher.update(chunk);
    }
    let streaming_tag = hasher.finalize().unwrap();

    // They must be identical
    assert_eq!(
        reference_tag, streaming_tag,
        "Streaming and One-Shot approaches differ!"
    );
});
