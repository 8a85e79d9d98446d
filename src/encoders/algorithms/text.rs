//! Formats that treat the bytes as UTF-8 text, plus Base64 which is
//! delegated to the `base64` crate.

use base64::Engine;
use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD, URL_SAFE_NO_PAD};
use base64::engine::DecodePaddingMode;

use super::errors::FormatError;

pub fn accept_any(_input: &str) -> bool {
    true
}

pub fn decode_text(input: &str) -> Result<Vec<u8>, FormatError> {
    Ok(input.as_bytes().to_vec())
}

/// Invalid UTF-8 sequences become U+FFFD.
pub fn encode_text(data: &[u8]) -> Result<String, FormatError> {
    Ok(String::from_utf8_lossy(data).into_owned())
}

pub fn decode_reverse(input: &str) -> Result<Vec<u8>, FormatError> {
    Ok(input.chars().rev().collect::<String>().into_bytes())
}

pub fn encode_reverse(data: &[u8]) -> Result<String, FormatError> {
    Ok(String::from_utf8_lossy(data).chars().rev().collect())
}

/// Number of runs of `[A-Za-z0-9_]`.
pub fn encode_word_count(data: &[u8]) -> Result<String, FormatError> {
    let text = String::from_utf8_lossy(data);
    let count = text
        .split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .filter(|word| !word.is_empty())
        .count();
    Ok(count.to_string())
}

/// Characters `encodeURIComponent` leaves alone on top of the RFC 3986
/// unreserved set that `urlencoding` already keeps.
const URI_COMPONENT_KEPT: [(&str, &str); 5] = [
    ("%21", "!"),
    ("%27", "'"),
    ("%28", "("),
    ("%29", ")"),
    ("%2A", "*"),
];

pub fn validate_url(input: &str) -> bool {
    let bytes = input.as_bytes();
    let escapes_well_formed = bytes.iter().enumerate().all(|(i, &b)| {
        b != b'%'
            || (bytes.len() > i + 2
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit())
    });
    escapes_well_formed && urlencoding::decode(input).is_ok()
}

pub fn decode_url(input: &str) -> Result<Vec<u8>, FormatError> {
    urlencoding::decode(input)
        .map(|text| text.into_owned().into_bytes())
        .map_err(|e| FormatError::malformed(input, format!("escapes do not form UTF-8: {}", e)))
}

pub fn encode_url(data: &[u8]) -> Result<String, FormatError> {
    let text = String::from_utf8_lossy(data);
    let mut encoded = urlencoding::encode(&text).into_owned();
    for (escape, literal) in URI_COMPONENT_KEPT {
        encoded = encoded.replace(escape, literal);
    }
    Ok(encoded)
}

/// Accepts input with or without `=` padding, like a browser's `atob`.
const LENIENT: GeneralPurposeConfig = GeneralPurposeConfig::new()
    .with_decode_padding_mode(DecodePaddingMode::Indifferent)
    .with_decode_allow_trailing_bits(true);
const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, LENIENT);
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, LENIENT);

/// Map a byte offset in the whitespace-stripped text back to the offending
/// character and its character index in the original input.
fn locate_in_input(input: &str, compact: &str, offset: usize, byte: u8) -> (char, usize) {
    let Some((start, character)) = compact
        .char_indices()
        .take_while(|(index, _)| *index <= offset)
        .last()
    else {
        return (byte as char, offset);
    };
    let nth = compact[..start].chars().count();
    let position = input
        .chars()
        .enumerate()
        .filter(|(_, c)| !c.is_ascii_whitespace())
        .nth(nth)
        .map_or(nth, |(index, _)| index);
    (character, position)
}

fn decode_base64_with(
    engine: &GeneralPurpose,
    input: &str,
    valid_chars: &str,
) -> Result<Vec<u8>, FormatError> {
    let compact: String = input.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    engine.decode(&compact).map_err(|e| match e {
        base64::DecodeError::InvalidByte(offset, byte)
        | base64::DecodeError::InvalidLastSymbol(offset, byte) => {
            let (character, position) = locate_in_input(input, &compact, offset, byte);
            FormatError::invalid_character(character, position, input, valid_chars)
        }
        base64::DecodeError::InvalidLength(len) => FormatError::invalid_length(
            len,
            "a length that is not 1 more than a multiple of 4",
            "check for missing or extra characters",
        ),
        base64::DecodeError::InvalidPadding => FormatError::malformed(compact.clone(), "invalid padding"),
    })
}

pub fn validate_base64(input: &str) -> bool {
    decode_base64(input).is_ok()
}

pub fn decode_base64(input: &str) -> Result<Vec<u8>, FormatError> {
    decode_base64_with(&STANDARD_LENIENT, input, "A-Za-z0-9+/=")
}

pub fn encode_base64(data: &[u8]) -> Result<String, FormatError> {
    Ok(STANDARD.encode(data))
}

pub fn validate_base64url(input: &str) -> bool {
    decode_base64url(input).is_ok()
}

pub fn decode_base64url(input: &str) -> Result<Vec<u8>, FormatError> {
    decode_base64_with(&URL_SAFE_LENIENT, input, "A-Za-z0-9-_=")
}

pub fn encode_base64url(data: &[u8]) -> Result<String, FormatError> {
    Ok(URL_SAFE_NO_PAD.encode(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "the little fox JUMPS!!";

    #[test]
    fn test_text_is_lossy_for_invalid_utf8() {
        assert_eq!(encode_text(&[0x66, 0xff, 0x6f]).unwrap(), "f\u{FFFD}o");
    }

    #[test]
    fn test_reverse_involution() {
        let once = decode_reverse("héllo 🦀").unwrap();
        assert_eq!(once, "🦀 olléh".as_bytes());
        assert_eq!(encode_reverse(&once).unwrap(), "héllo 🦀");
    }

    #[test]
    fn test_word_count() {
        assert_eq!(encode_word_count(SAMPLE.as_bytes()).unwrap(), "4");
        assert_eq!(encode_word_count(b"  snake_case, x2 ").unwrap(), "2");
        assert_eq!(encode_word_count(b"").unwrap(), "0");
    }

    #[test]
    fn test_url_matches_encode_uri_component() {
        assert_eq!(
            encode_url(SAMPLE.as_bytes()).unwrap(),
            "the%20little%20fox%20JUMPS!!"
        );
        assert_eq!(encode_url(b"a+b/c?d=(e)*'f'").unwrap(), "a%2Bb%2Fc%3Fd%3D(e)*'f'");
        assert_eq!(decode_url("the%20little%20fox%20JUMPS!!").unwrap(), SAMPLE.as_bytes());
    }

    #[test]
    fn test_url_validation() {
        assert!(validate_url("a%20b"));
        assert!(!validate_url("100%"));
        assert!(!validate_url("%zz"));
        assert!(!validate_url("%ff"));
    }

    #[test]
    fn test_base64_vectors() {
        assert_eq!(
            encode_base64(SAMPLE.as_bytes()).unwrap(),
            "dGhlIGxpdHRsZSBmb3ggSlVNUFMhIQ=="
        );
        assert_eq!(
            decode_base64("dGhlIGxpdHRsZSBmb3ggSlVNUFMhIQ==").unwrap(),
            SAMPLE.as_bytes()
        );
        assert_eq!(
            encode_base64url(SAMPLE.as_bytes()).unwrap(),
            "dGhlIGxpdHRsZSBmb3ggSlVNUFMhIQ"
        );
        assert_eq!(
            decode_base64url("dGhlIGxpdHRsZSBmb3ggSlVNUFMhIQ").unwrap(),
            SAMPLE.as_bytes()
        );
    }

    #[test]
    fn test_base64_padding_optional_and_whitespace_ignored() {
        assert_eq!(decode_base64("aGk").unwrap(), b"hi");
        assert_eq!(decode_base64("aG\nk=").unwrap(), b"hi");
        assert_eq!(decode_base64url("-_8").unwrap(), vec![0xfb, 0xff]);
    }

    #[test]
    fn test_base64_invalid_character() {
        assert!(matches!(
            decode_base64("aG*k").unwrap_err(),
            FormatError::InvalidCharacter { character: '*', position: 2, .. }
        ));
        assert!(!validate_base64url("a+b/"));
    }

    #[test]
    fn test_base64_invalid_character_position_in_input() {
        assert!(matches!(
            decode_base64("a\né b").unwrap_err(),
            FormatError::InvalidCharacter { character: 'é', position: 2, .. }
        ));
        assert!(matches!(
            decode_base64("ñaG").unwrap_err(),
            FormatError::InvalidCharacter { character: 'ñ', position: 0, .. }
        ));
    }
}
