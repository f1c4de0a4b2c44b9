//! Property tests for the hex codec and object id parsing.

use proptest::prelude::*;
use wyag_hash::hex::{hex_decode, hex_to_string};
use wyag_hash::ObjectId;

proptest! {
    #[test]
    fn encode_then_decode_is_identity(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
        let hex = hex_to_string(&bytes);
        prop_assert_eq!(hex.len(), bytes.len() * 2);
        let mut decoded = vec![0u8; bytes.len()];
        hex_decode(&hex, &mut decoded).unwrap();
        prop_assert_eq!(decoded, bytes);
    }

    #[test]
    fn oid_roundtrips_any_digest(bytes in proptest::collection::vec(any::<u8>(), 20)) {
        let oid = ObjectId::from_bytes(&bytes).unwrap();
        let hex = oid.to_hex();
        prop_assert_eq!(hex.len(), 40);
        let reparsed = ObjectId::from_hex(&hex).unwrap();
        prop_assert_eq!(reparsed, oid);
    }

    #[test]
    fn oid_parse_accepts_any_case(bytes in proptest::collection::vec(any::<u8>(), 20)) {
        let lower = ObjectId::from_bytes(&bytes).unwrap().to_hex();
        let upper = lower.to_ascii_uppercase();
        prop_assert_eq!(
            ObjectId::from_hex(&lower).unwrap(),
            ObjectId::from_hex(&upper).unwrap()
        );
    }
}
