//! Decimal text as one arbitrary-precision non-negative integer.
//!
//! The integer's minimal big-endian bytes are the byte sequence, so leading
//! zero bytes do not survive a round trip: `[0, 0, 1]` encodes as `1`.

use num_bigint::BigUint;
use num_traits::Zero;

use super::errors::FormatError;

pub fn validate(input: &str) -> bool {
    let digits = input.trim();
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

pub fn decode(input: &str) -> Result<Vec<u8>, FormatError> {
    let digits = input.trim();
    if digits.is_empty() {
        return Err(FormatError::invalid_length(
            0,
            "at least one digit",
            "enter a non-negative integer such as 1234",
        ));
    }

    if let Some((position, c)) = digits.chars().enumerate().find(|(_, c)| !c.is_ascii_digit()) {
        return Err(FormatError::invalid_character(c, position, digits, "0123456789"));
    }

    let num = BigUint::parse_bytes(digits.as_bytes(), 10)
        .ok_or_else(|| FormatError::malformed(digits, "not a decimal integer"))?;

    Ok(num.to_bytes_be())
}

pub fn encode(data: &[u8]) -> Result<String, FormatError> {
    let num = BigUint::from_bytes_be(data);
    if num.is_zero() {
        return Ok("0".to_string());
    }
    Ok(num.to_str_radix(10))
}
