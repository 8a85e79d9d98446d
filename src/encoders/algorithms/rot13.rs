use super::errors::FormatError;

/// Rotate ASCII letters by 13, preserving case. Every other byte passes
/// through, so applying it twice gives back the input.
pub fn rotate(data: &[u8]) -> Vec<u8> {
    data.iter()
        .map(|&b| match b {
            b'a'..=b'z' => (b - b'a' + 13) % 26 + b'a',
            b'A'..=b'Z' => (b - b'A' + 13) % 26 + b'A',
            _ => b,
        })
        .collect()
}

pub fn decode(input: &str) -> Result<Vec<u8>, FormatError> {
    Ok(rotate(input.as_bytes()))
}

pub fn encode(data: &[u8]) -> Result<String, FormatError> {
    Ok(String::from_utf8_lossy(&rotate(data)).into_owned())
}
