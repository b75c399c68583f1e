use compact_jws::base64_url::{add_padding, decode, encode};
use proptest::prelude::*;

proptest! {
    #[test]
    fn padding_is_idempotent(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
        let field = encode(&bytes);
        prop_assert!(!field.contains('='));
        prop_assert_ne!(field.len() % 4, 1);

        prop_assert_eq!(decode(&field).unwrap(), bytes.clone());
        prop_assert_eq!(decode(&add_padding(&field)).unwrap(), bytes.clone());

        let padded = add_padding(&field);
        prop_assert_eq!(add_padding(&padded), padded.clone());
    }

    #[test]
    fn impossible_lengths_are_rejected(field in "[A-Za-z0-9_-]{0,64}") {
        if field.len() % 4 == 1 {
            prop_assert!(decode(&field).is_err());
        }
    }
}

#[test]
fn every_padding_length() {
    assert_eq!(decode("").unwrap(), b"");
    assert_eq!(decode("YQ").unwrap(), b"a");
    assert_eq!(decode("YQ==").unwrap(), b"a");
    assert_eq!(decode("YWI").unwrap(), b"ab");
    assert_eq!(decode("YWI=").unwrap(), b"ab");
    assert_eq!(decode("YWJj").unwrap(), b"abc");
    assert!(decode("YWJjZ").is_err());
}
