use super::errors::FormatError;

const DIGITS_PER_BYTE: usize = 3;

pub fn validate(input: &str) -> bool {
    input
        .chars()
        .all(|c| matches!(c, '0'..='7') || c.is_whitespace())
}

/// Decode fixed-width groups of three octal digits. Whitespace between
/// groups is ignored.
pub fn decode(input: &str) -> Result<Vec<u8>, FormatError> {
    let mut digits = Vec::with_capacity(input.len());
    for (position, c) in input.chars().enumerate() {
        match c {
            '0'..='7' => digits.push(c as u8 - b'0'),
            c if c.is_whitespace() => {}
            c => return Err(FormatError::invalid_character(c, position, input, "01234567")),
        }
    }

    if digits.len() % DIGITS_PER_BYTE != 0 {
        return Err(FormatError::invalid_length(
            digits.len(),
            "a multiple of 3 digits",
            "each byte is written as three octal digits, e.g. 012",
        ));
    }

    digits
        .chunks_exact(DIGITS_PER_BYTE)
        .map(|group| {
            let value = group
                .iter()
                .fold(0u16, |acc, &d| acc * 8 + u16::from(d));
            u8::try_from(value).map_err(|_| {
                let fragment: String = group.iter().map(|d| (d + b'0') as char).collect();
                FormatError::malformed(fragment, "octal byte exceeds 377")
            })
        })
        .collect()
}

pub fn encode(data: &[u8]) -> Result<String, FormatError> {
    Ok(data
        .iter()
        .map(|b| format!("{:03o}", b))
        .collect::<Vec<_>>()
        .join(" "))
}
