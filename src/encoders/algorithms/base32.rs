use super::bits::BitAccumulator;
use super::errors::FormatError;

const ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";
const PADDING: char = '=';
const BITS_PER_CHAR: u32 = 5;
/// LCM(5, 8) / 5
const GROUP_SIZE: usize = 8;

fn decode_char(c: char) -> Option<u32> {
    match c.to_ascii_uppercase() {
        c @ 'A'..='Z' => Some(c as u32 - 'A' as u32),
        c @ '2'..='7' => Some(c as u32 - '2' as u32 + 26),
        _ => None,
    }
}

pub fn validate(input: &str) -> bool {
    decode(input).is_ok()
}

/// Decode RFC 4648 Base32. Padding and characters outside the alphabet are
/// skipped; leftover bits shorter than a byte are dropped.
pub fn decode(input: &str) -> Result<Vec<u8>, FormatError> {
    let mut acc = BitAccumulator::new();
    let mut result = Vec::with_capacity(input.len() * BITS_PER_CHAR as usize / 8);

    for digit in input.chars().filter_map(decode_char) {
        acc.push(digit, BITS_PER_CHAR);
        while let Some(byte) = acc.pop(8) {
            result.push(byte as u8);
        }
    }

    Ok(result)
}

pub fn encode(data: &[u8]) -> Result<String, FormatError> {
    let output_chars = (data.len() * 8).div_ceil(BITS_PER_CHAR as usize);
    let mut result = String::with_capacity(output_chars.div_ceil(GROUP_SIZE) * GROUP_SIZE);
    let mut acc = BitAccumulator::new();

    for &byte in data {
        acc.push(u32::from(byte), 8);
        while let Some(index) = acc.pop(BITS_PER_CHAR) {
            result.push(ALPHABET[index as usize] as char);
        }
    }

    if let Some(index) = acc.flush(BITS_PER_CHAR) {
        result.push(ALPHABET[index as usize] as char);
    }

    let padded_chars = result.len().div_ceil(GROUP_SIZE) * GROUP_SIZE;
    while result.len() < padded_chars {
        result.push(PADDING);
    }

    Ok(result)
}
