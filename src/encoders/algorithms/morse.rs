use std::collections::HashMap;
use std::sync::OnceLock;

use super::errors::FormatError;

const TABLE: [(char, &str); 37] = [
    ('A', ".-"),
    ('B', "-..."),
    ('C', "-.-."),
    ('D', "-.."),
    ('E', "."),
    ('F', "..-."),
    ('G', "--."),
    ('H', "...."),
    ('I', ".."),
    ('J', ".---"),
    ('K', "-.-"),
    ('L', ".-.."),
    ('M', "--"),
    ('N', "-."),
    ('O', "---"),
    ('P', ".--."),
    ('Q', "--.-"),
    ('R', ".-."),
    ('S', "..."),
    ('T', "-"),
    ('U', "..-"),
    ('V', "...-"),
    ('W', ".--"),
    ('X', "-..-"),
    ('Y', "-.--"),
    ('Z', "--.."),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
    ('0', "-----"),
    (' ', "/"),
];

static CODE_TO_CHAR: OnceLock<HashMap<&'static str, char>> = OnceLock::new();

fn code_to_char() -> &'static HashMap<&'static str, char> {
    CODE_TO_CHAR.get_or_init(|| TABLE.iter().map(|&(c, code)| (code, c)).collect())
}

fn char_to_code(c: char) -> Option<&'static str> {
    TABLE
        .iter()
        .find(|&&(entry, _)| entry == c)
        .map(|&(_, code)| code)
}

pub fn validate(input: &str) -> bool {
    input
        .chars()
        .all(|c| matches!(c, '.' | '-' | '/') || c.is_whitespace())
}

/// Decode whitespace-separated Morse tokens. `/` is a word gap; tokens with
/// no mapping come out as a space.
pub fn decode(input: &str) -> Result<Vec<u8>, FormatError> {
    let table = code_to_char();
    let text: String = input
        .split_whitespace()
        .map(|token| table.get(token).copied().unwrap_or(' '))
        .collect();
    Ok(text.into_bytes())
}

/// Encode text as Morse, one token per character. Characters outside
/// A-Z, 0-9 and space are skipped.
pub fn encode(data: &[u8]) -> Result<String, FormatError> {
    let text = String::from_utf8_lossy(data).to_uppercase();
    Ok(text
        .chars()
        .filter_map(char_to_code)
        .collect::<Vec<_>>()
        .join(" "))
}
