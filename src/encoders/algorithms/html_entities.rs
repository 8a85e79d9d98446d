use super::errors::FormatError;

fn needs_escape(c: char) -> bool {
    c >= '\u{80}' || matches!(c, '<' | '>' | '&' | '"' | '\'')
}

/// Replace every `&#<digits>;` with the character it names. Sequences that
/// do not name a valid code point are left as they are.
pub fn decode(input: &str) -> Result<Vec<u8>, FormatError> {
    let mut result = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find("&#") {
        result.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let digits = after.bytes().take_while(u8::is_ascii_digit).count();

        let entity = (digits > 0 && after[digits..].starts_with(';'))
            .then(|| after[..digits].parse::<u32>().ok().and_then(char::from_u32))
            .flatten();

        match entity {
            Some(c) => {
                result.push(c);
                rest = &after[digits + 1..];
            }
            None => {
                result.push_str("&#");
                rest = after;
            }
        }
    }
    result.push_str(rest);

    Ok(result.into_bytes())
}

/// Escape markup-significant characters and everything from U+0080 upward
/// as decimal numeric entities.
pub fn encode(data: &[u8]) -> Result<String, FormatError> {
    let text = String::from_utf8_lossy(data);
    let mut result = String::with_capacity(text.len());

    for c in text.chars() {
        if needs_escape(c) {
            result.push_str(&format!("&#{};", c as u32));
        } else {
            result.push(c);
        }
    }

    Ok(result)
}
