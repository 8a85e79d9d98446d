use super::bits::BitAccumulator;
use super::errors::FormatError;

pub fn validate(input: &str) -> bool {
    input
        .chars()
        .all(|c| c == '0' || c == '1' || c.is_whitespace())
}

/// Decode a run of binary digits. Whitespace is ignored and a trailing
/// partial byte is dropped.
pub fn decode(input: &str) -> Result<Vec<u8>, FormatError> {
    let mut acc = BitAccumulator::new();
    let mut result = Vec::with_capacity(input.len() / 8);

    for (position, c) in input.chars().enumerate() {
        let bit = match c {
            '0' => 0,
            '1' => 1,
            c if c.is_whitespace() => continue,
            c => return Err(FormatError::invalid_character(c, position, input, "01")),
        };
        acc.push(bit, 1);
        if let Some(byte) = acc.pop(8) {
            result.push(byte as u8);
        }
    }

    Ok(result)
}

pub fn encode(data: &[u8]) -> Result<String, FormatError> {
    let mut result = String::with_capacity(data.len() * 8);
    for byte in data {
        result.push_str(&format!("{:08b}", byte));
    }
    Ok(result)
}
