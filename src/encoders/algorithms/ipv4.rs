use super::errors::FormatError;

const OCTETS: usize = 4;

fn parse_octet(part: &str) -> Option<u8> {
    if part.is_empty() || part.len() > 3 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

pub fn validate(input: &str) -> bool {
    let parts: Vec<&str> = input.split('.').collect();
    parts.len() == OCTETS && parts.iter().all(|part| parse_octet(part).is_some())
}

pub fn decode(input: &str) -> Result<Vec<u8>, FormatError> {
    let parts: Vec<&str> = input.split('.').collect();
    if parts.len() != OCTETS {
        return Err(FormatError::malformed(
            input,
            format!("expected 4 dot-separated octets, found {}", parts.len()),
        ));
    }

    parts
        .into_iter()
        .map(|part| {
            parse_octet(part).ok_or_else(|| FormatError::malformed(part, "octet must be 0-255"))
        })
        .collect()
}

pub fn encode(data: &[u8]) -> Result<String, FormatError> {
    if data.len() != OCTETS {
        return Err(FormatError::length_mismatch(OCTETS, data.len()));
    }
    Ok(format!("{}.{}.{}.{}", data[0], data[1], data[2], data[3]))
}
