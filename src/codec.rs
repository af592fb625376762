//! Codec Module
//!
//! Converts between strings of binary digits and uppercase hexadecimal text.
//!
//! Bits are packed eight to a byte from the left. A final group shorter than
//! eight bits is padded with trailing zero bits, so `decode(encode(b))` only
//! reproduces `b` exactly when its length is a multiple of eight.

use std::fmt::Write;

use crate::error::FormatError;

// == Encode ==
/// Packs a string of `'0'`/`'1'` characters into uppercase hex.
///
/// Empty input yields empty output.
pub fn encode(bits: &str) -> Result<String, FormatError> {
    if let Some((position, found)) = bits.char_indices().find(|&(_, c)| c != '0' && c != '1') {
        return Err(FormatError::InvalidBinaryDigit { found, position });
    }

    let bytes: Vec<u8> = bits
        .as_bytes()
        .chunks(8)
        .map(|group| {
            let byte = group
                .iter()
                .fold(0u8, |acc, &digit| (acc << 1) | (digit - b'0'));
            // Short final group: real bits go high, padding low
            byte << (8 - group.len())
        })
        .collect();

    Ok(hex::encode_upper(bytes))
}

// == Decode ==
/// Expands hex text into eight binary digits per byte.
///
/// Fails on odd length or any non-hex character. Either case is accepted.
pub fn decode(hex_str: &str) -> Result<String, FormatError> {
    let bytes = hex::decode(hex_str)?;

    let mut bits = String::with_capacity(bytes.len() * 8);
    for byte in bytes {
        // Writing into a String cannot fail
        let _ = write!(bits, "{:08b}", byte);
    }
    Ok(bits)
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_encode_single_byte() {
        assert_eq!(encode("01000001").unwrap(), "41");
        assert_eq!(encode("11111111").unwrap(), "FF");
    }

    #[test]
    fn test_encode_multiple_bytes_uppercase() {
        assert_eq!(encode("1010101111001101").unwrap(), "ABCD");
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode("").unwrap(), "");
    }

    #[test]
    fn test_encode_pads_short_group_with_trailing_zeros() {
        assert_eq!(encode("1").unwrap(), "80");
        assert_eq!(encode("0100000101").unwrap(), "4140");
    }

    #[test]
    fn test_encode_rejects_non_binary() {
        let err = encode("0102").unwrap_err();
        assert!(matches!(
            err,
            FormatError::InvalidBinaryDigit {
                found: '2',
                position: 2
            }
        ));
    }

    #[test]
    fn test_encode_rejects_whitespace() {
        assert!(matches!(
            encode("0100 0001"),
            Err(FormatError::InvalidBinaryDigit { found: ' ', .. })
        ));
    }

    #[test]
    fn test_decode_basic() {
        assert_eq!(decode("41").unwrap(), "01000001");
        assert_eq!(decode("00ff").unwrap(), "0000000011111111");
        assert_eq!(decode("").unwrap(), "");
    }

    #[test]
    fn test_decode_odd_length() {
        assert!(matches!(decode("ABC"), Err(FormatError::InvalidHex(_))));
    }

    #[test]
    fn test_decode_invalid_character() {
        assert!(matches!(decode("4G"), Err(FormatError::InvalidHex(_))));
    }

    #[test]
    fn test_lossy_padding_is_preserved() {
        let bits = "101";
        let restored = decode(&encode(bits).unwrap()).unwrap();
        assert_eq!(restored, "10100000");
        assert_ne!(restored, bits);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        // Whole bytes survive a round trip unchanged
        #[test]
        fn prop_roundtrip_whole_bytes(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
            let bits: String = bytes.iter().map(|b| format!("{:08b}", b)).collect();
            prop_assert_eq!(decode(&encode(&bits).unwrap()).unwrap(), bits);
        }

        // Partial bytes come back padded with zero bits at the end
        #[test]
        fn prop_roundtrip_pads_trailing_zeros(bits in "[01]{1,200}") {
            prop_assume!(bits.len() % 8 != 0);

            let restored = decode(&encode(&bits).unwrap()).unwrap();
            prop_assert_eq!(restored.len(), 8 * bits.len().div_ceil(8));
            prop_assert!(restored.starts_with(&bits));
            prop_assert!(restored[bits.len()..].chars().all(|c| c == '0'));
        }

        // Output length is two hex digits per started byte
        #[test]
        fn prop_encoded_length(bits in "[01]{0,200}") {
            let encoded = encode(&bits).unwrap();
            prop_assert_eq!(encoded.len(), bits.len().div_ceil(8) * 2);
        }

        #[test]
        fn prop_hex_roundtrip_uppercases(hex_str in "([0-9a-fA-F]{2}){0,64}") {
            let bits = decode(&hex_str).unwrap();
            prop_assert_eq!(encode(&bits).unwrap(), hex_str.to_uppercase());
        }
    }
}
