use bolero::check;
use elimac::{CounterEncoding, Elimac, Error, TagRequest};

const KEY1: [u8; 16] = [
    0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f, 0x3c,
];
const KEY2: [u8; 16] = [
    0x3c, 0x4f, 0xcf, 0x09, 0x88, 0x15, 0xf7, 0xab, 0xa6, 0xd2, 0xae, 0x28, 0x16, 0x15, 0x7e, 0x2b,
];

#[test]
fn fuzz_parameter_validation() {
    let mac = Elimac::new(&KEY1, &KEY2);
    check!()
        .with_type::<(Vec<u8>, u8, u8)>()
        .for_each(|(data, raw_bits, raw_id)| {
            // =============================================================================
            // TAG LENGTH: ACCEPT OR REJECT, NEVER PANIC
            // =============================================================================

            let tag_bits = usize::from(*raw_bits);
            let request = TagRequest {
                tag_bits,
                ..TagRequest::default()
            };
            match mac.tag_with(data, &request) {
                Ok(tag) => {
                    assert!(tag_bits <= 128, "Accepted an out-of-range tag length");
                    assert_eq!(tag.len(), tag_bits / 8, "Tag length disagrees with request");
                }
                Err(Error::InvalidTagLength { bits }) => {
                    assert_eq!(bits, tag_bits);
                    assert!(tag_bits > 128, "Rejected an in-range tag length");
                }
                Err(other) => panic!("Unexpected error for tag length {tag_bits}: {other}"),
            }

            // =============================================================================
            // ENCODING IDS: ONLY THE RECORDED SET DECODES
            // =============================================================================

            match CounterEncoding::from_id(*raw_id) {
                Ok(encoding) => assert_eq!(encoding.id(), *raw_id),
                Err(_) => assert!(*raw_id > 3, "Rejected a recorded encoding id"),
            }

            // =============================================================================
            // COUNTER ZERO IS NEVER ENCODABLE
            // =============================================================================

            assert!(elimac::encode_counter(0, CounterEncoding::Compact).is_err());
        });
}
