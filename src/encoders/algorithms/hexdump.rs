//! Canonical hex dump, 16 bytes per line:
//!
//! ```text
//! 00000000  74 68 65 20 6c 69 74 74 6c 65 20 66 6f 78 20 4a  the little fox J
//! ```

use super::errors::FormatError;

const BYTES_PER_LINE: usize = 16;
const HEX_COLUMN_WIDTH: usize = BYTES_PER_LINE * 3;
/// `{:08x}` plus two spaces
const OFFSET_WIDTH: usize = 10;

fn ascii_column(chunk: &[u8]) -> String {
    chunk
        .iter()
        .map(|&b| if (32..=126).contains(&b) { b as char } else { '.' })
        .collect()
}

pub fn encode(data: &[u8]) -> Result<String, FormatError> {
    let lines: Vec<String> = data
        .chunks(BYTES_PER_LINE)
        .enumerate()
        .map(|(index, chunk)| {
            let hex = chunk
                .iter()
                .map(|b| format!("{:02x}", b))
                .collect::<Vec<_>>()
                .join(" ");
            format!(
                "{:08x}  {:<width$} {}",
                index * BYTES_PER_LINE,
                hex,
                ascii_column(chunk),
                width = HEX_COLUMN_WIDTH
            )
        })
        .collect();

    Ok(lines.join("\n"))
}

fn parse_byte(token: &str) -> Option<u8> {
    if token.len() != 2 || !token.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u8::from_str_radix(token, 16).ok()
}

/// Decode a hex dump. Only the fixed-width hex column after the offset is
/// read, so the space-padded ASCII column can never lose or add bytes; tokens
/// in that column that do not read as a hex byte are skipped.
pub fn decode(input: &str) -> Result<Vec<u8>, FormatError> {
    let mut result = Vec::new();

    for line in input.lines() {
        let hex_column: String = line
            .chars()
            .skip(OFFSET_WIDTH)
            .take(HEX_COLUMN_WIDTH)
            .collect();

        result.extend(
            hex_column
                .split_whitespace()
                .filter_map(parse_byte)
                .take(BYTES_PER_LINE),
        );
    }

    Ok(result)
}

pub fn validate(input: &str) -> bool {
    decode(input).is_ok()
}
