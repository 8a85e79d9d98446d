use super::errors::FormatError;

const BYTES: usize = 16;
/// Hex digits per dash-separated group
const LAYOUT: [usize; 5] = [8, 4, 4, 4, 12];

/// Accepts `xxxxxxxx-xxxx-4xxx-[89ab]xxx-xxxxxxxxxxxx`, any case.
pub fn validate(input: &str) -> bool {
    let groups: Vec<&str> = input.split('-').collect();
    if groups.len() != LAYOUT.len()
        || groups
            .iter()
            .zip(LAYOUT)
            .any(|(group, len)| group.len() != len || !group.bytes().all(|b| b.is_ascii_hexdigit()))
    {
        return false;
    }

    let version = groups[2].as_bytes()[0];
    let variant = groups[3].as_bytes()[0].to_ascii_lowercase();
    version == b'4' && matches!(variant, b'8' | b'9' | b'a' | b'b')
}

/// Strip dashes and hex-decode. Version and variant bits are not checked.
pub fn decode(input: &str) -> Result<Vec<u8>, FormatError> {
    let digits: String = input.chars().filter(|&c| c != '-').collect();
    if digits.len() != BYTES * 2 {
        return Err(FormatError::invalid_length(
            digits.len(),
            "32 hex digits",
            "a UUID has the form xxxxxxxx-xxxx-4xxx-yxxx-xxxxxxxxxxxx",
        ));
    }
    ::hex::decode(&digits).map_err(|e| FormatError::malformed(input, e.to_string()))
}

/// Format 16 bytes as a UUIDv4, forcing the version and variant bits.
pub fn encode(data: &[u8]) -> Result<String, FormatError> {
    if data.len() != BYTES {
        return Err(FormatError::length_mismatch(BYTES, data.len()));
    }

    let mut bytes = [0u8; BYTES];
    bytes.copy_from_slice(data);
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;

    let digits = ::hex::encode(bytes);
    let mut result = String::with_capacity(36);
    let mut offset = 0;
    for (i, len) in LAYOUT.iter().enumerate() {
        if i > 0 {
            result.push('-');
        }
        result.push_str(&digits[offset..offset + len]);
        offset += len;
    }

    Ok(result)
}
