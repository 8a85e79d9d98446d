//! Ascii85 (btoa / Adobe flavour, without the `<~ ~>` delimiters).
//!
//! Four bytes form one big-endian 32-bit value written as five base-85
//! digits offset by 33 (`!`..`u`). An all-zero block is shortened to `z`.
//! A final block of `n` bytes is written as `n + 1` digits; when decoding,
//! a short block is padded with `u` (84) and cut back to `len - 1` bytes.

use super::errors::FormatError;

const OFFSET: u8 = 33;
const MAX_DIGIT: u8 = 117;
const PAD_DIGIT: u32 = 84;
const ZERO_BLOCK: char = 'z';

const VALID_CHARS: &str = "'!' to 'u', 'z'";

pub fn validate(input: &str) -> bool {
    input.chars().all(|c| {
        c.is_whitespace()
            || c == ZERO_BLOCK
            || u8::try_from(c).is_ok_and(|b| (OFFSET..=MAX_DIGIT).contains(&b))
    })
}

pub fn decode(input: &str) -> Result<Vec<u8>, FormatError> {
    let mut result = Vec::with_capacity(input.len() * 4 / 5);
    let mut block = [0u32; 5];
    let mut filled = 0;
    let mut block_start = 0;

    for (position, c) in input.chars().enumerate() {
        if c.is_whitespace() {
            continue;
        }

        if c == ZERO_BLOCK && filled == 0 {
            result.extend_from_slice(&[0; 4]);
            continue;
        }

        let digit = u8::try_from(c)
            .ok()
            .filter(|b| (OFFSET..=MAX_DIGIT).contains(b))
            .ok_or_else(|| FormatError::invalid_character(c, position, input, VALID_CHARS))?;

        if filled == 0 {
            block_start = position;
        }
        block[filled] = u32::from(digit - OFFSET);
        filled += 1;

        if filled == 5 {
            let value = block_value(&block, input, block_start)?;
            result.extend_from_slice(&value.to_be_bytes());
            filled = 0;
        }
    }

    match filled {
        0 => {}
        1 => {
            return Err(FormatError::invalid_length(
                1,
                "2 to 5 characters in the final block",
                "a trailing single character cannot hold a byte",
            ));
        }
        n => {
            block[n..].fill(PAD_DIGIT);
            let value = block_value(&block, input, block_start)?;
            result.extend_from_slice(&value.to_be_bytes()[..n - 1]);
        }
    }

    Ok(result)
}

fn block_value(block: &[u32; 5], input: &str, start: usize) -> Result<u32, FormatError> {
    let value = block
        .iter()
        .fold(0u64, |acc, &digit| acc * 85 + u64::from(digit));

    u32::try_from(value).map_err(|_| {
        let fragment: String = input.chars().skip(start).take(5).collect();
        FormatError::malformed(fragment, "block value exceeds 32 bits")
    })
}

pub fn encode(data: &[u8]) -> Result<String, FormatError> {
    let mut result = String::with_capacity(data.len().div_ceil(4) * 5);

    for chunk in data.chunks(4) {
        if chunk.len() == 4 && chunk.iter().all(|&b| b == 0) {
            result.push(ZERO_BLOCK);
            continue;
        }

        let mut padded = [0u8; 4];
        padded[..chunk.len()].copy_from_slice(chunk);
        let mut value = u32::from_be_bytes(padded);

        let mut digits = [0u8; 5];
        for digit in digits.iter_mut().rev() {
            *digit = (value % 85) as u8 + OFFSET;
            value /= 85;
        }

        for &digit in &digits[..chunk.len() + 1] {
            result.push(digit as char);
        }
    }

    Ok(result)
}
