//! Byte-list text: decimal byte values separated by single spaces,
//! e.g. `116 104 101`.

use super::errors::FormatError;

fn parse_token(token: &str) -> Option<u8> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

pub fn validate(input: &str) -> bool {
    input.is_empty() || input.split(' ').all(|token| parse_token(token).is_some())
}

pub fn decode(input: &str) -> Result<Vec<u8>, FormatError> {
    if input.is_empty() {
        return Ok(Vec::new());
    }

    input
        .split(' ')
        .map(|token| {
            parse_token(token)
                .ok_or_else(|| FormatError::malformed(token, "expected a decimal byte value 0-255"))
        })
        .collect()
}

pub fn encode(data: &[u8]) -> Result<String, FormatError> {
    Ok(data
        .iter()
        .map(|b| b.to_string())
        .collect::<Vec<_>>()
        .join(" "))
}
