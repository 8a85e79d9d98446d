use super::errors::FormatError;

const VALID_CHARS: &str = "0123456789abcdefABCDEF";

pub fn validate(input: &str) -> bool {
    input.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Decode two hex digits per byte. An odd trailing digit is dropped.
pub fn decode(input: &str) -> Result<Vec<u8>, FormatError> {
    if let Some((position, c)) = input.char_indices().find(|(_, c)| !c.is_ascii_hexdigit()) {
        let char_position = input[..position].chars().count();
        return Err(FormatError::invalid_character(
            c,
            char_position,
            input,
            VALID_CHARS,
        ));
    }

    // all ASCII at this point, so byte and char lengths agree
    let even = input.len() - input.len() % 2;
    ::hex::decode(&input[..even]).map_err(|e| FormatError::malformed(input, e.to_string()))
}

pub fn encode(data: &[u8]) -> Result<String, FormatError> {
    Ok(::hex::encode(data))
}
