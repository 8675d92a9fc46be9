//! URL-fragment-safe text tokens.
//!
//! Text is carried as URL-safe base64 over its UTF-8 bytes with the padding
//! stripped, so a token only ever contains `A-Z a-z 0-9 - _` and can be
//! dropped into a fragment without escaping.

use base64::alphabet;
use base64::engine::DecodePaddingMode;
use base64::engine::GeneralPurpose;
use base64::engine::GeneralPurposeConfig;
use base64::Engine as _;
use thiserror::Error;

/// Writes unpadded tokens but still reads padded ones from older links.
const TOKEN_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("token is not valid URL-safe base64")]
    Alphabet(#[from] base64::DecodeError),
    #[error("token does not decode to UTF-8 text")]
    Utf8(#[from] std::string::FromUtf8Error),
}

#[must_use]
pub fn encode(text: &str) -> String {
    TOKEN_ENGINE.encode(text.as_bytes())
}

pub fn decode(token: &str) -> Result<String, DecodeError> {
    let bytes = TOKEN_ENGINE.decode(token)?;
    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_fragment_safe(token: &str) -> bool {
        token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    }

    mod encode {
        use super::*;

        #[test]
        fn test_empty_text_is_empty_token() {
            assert_eq!(encode(""), "");
        }

        #[test]
        fn test_never_emits_reserved_characters() {
            // Inputs chosen so that standard base64 would produce `+`, `/` and `=`.
            for text in ["?>?>", "~~~", "ab", "\u{fbff}\u{fbff}"] {
                let token = encode(text);
                assert!(is_fragment_safe(&token), "unsafe token {token:?} for {text:?}");
            }
        }
    }

    mod decode {
        use super::*;

        #[test]
        fn test_inverts_encode() {
            for text in [
                "",
                "hello",
                "<h1>hi</h1>",
                "nul\0inside",
                "emoji \u{1f525} and accents é ü",
                "日本語のテキスト",
            ] {
                assert_eq!(decode(&encode(text)).unwrap(), text);
            }
        }

        #[test]
        fn test_accepts_padded_tokens() {
            assert_eq!(decode("YWI=").unwrap(), "ab");
            assert_eq!(decode("YWI").unwrap(), "ab");
        }

        #[test]
        fn test_rejects_standard_alphabet() {
            let result = decode("a+b/");
            assert!(matches!(result, Err(DecodeError::Alphabet(_))));
        }

        #[test]
        fn test_rejects_impossible_length() {
            assert!(matches!(decode("A"), Err(DecodeError::Alphabet(_))));
        }

        #[test]
        fn test_rejects_misplaced_padding() {
            assert!(matches!(decode("YW=I"), Err(DecodeError::Alphabet(_))));
        }

        #[test]
        fn test_rejects_non_canonical_trailing_bits() {
            // `YWI` is "ab"; `YWJ` sets bits past the last byte.
            assert!(matches!(decode("YWJ"), Err(DecodeError::Alphabet(_))));
        }

        #[test]
        fn test_rejects_non_utf8_payload() {
            let token = TOKEN_ENGINE.encode([0xff_u8, 0xfe, 0xfd]);
            assert!(matches!(decode(&token), Err(DecodeError::Utf8(_))));
        }
    }

    mod properties {
        use proptest::prelude::*;

        use super::*;

        proptest! {
            #[test]
            fn prop_decode_inverts_encode(text in any::<String>()) {
                prop_assert_eq!(decode(&encode(&text)).unwrap(), text);
            }

            #[test]
            fn prop_decode_inverts_encode_with_nul(head in ".*", tail in ".*") {
                let text = format!("{head}\0{tail}");
                prop_assert_eq!(decode(&encode(&text)).unwrap(), text);
            }

            #[test]
            fn prop_tokens_are_fragment_safe(text in any::<String>()) {
                let token = encode(&text);
                prop_assert!(is_fragment_safe(&token), "unsafe token {:?}", token);
            }
        }
    }
}
