use crate::cli::{
    args::ConvertArgs,
    config::{read_input, write_output},
    global::GlobalArgs,
};
use convert_d::{FormatRegistry, Settings};

/// Drops one trailing line terminator, as left by `echo` or an editor.
fn strip_trailing_newline(text: &mut String) {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
}

pub fn handle(
    args: ConvertArgs,
    global: &GlobalArgs,
    settings: &Settings,
) -> Result<(), Box<dyn std::error::Error>> {
    let from = args.from.as_deref().unwrap_or(&settings.default_input);
    let to = args.to.as_deref().unwrap_or(&settings.default_output);

    let input_data = read_input(args.file.as_ref(), global)?;
    let mut text =
        String::from_utf8(input_data).map_err(|_| "Input must be valid UTF-8 text")?;
    strip_trailing_newline(&mut text);

    if args.ignore_line_breaks || settings.ignore_line_breaks {
        text.retain(|c| c != '\n' && c != '\r');
    }

    let converted = FormatRegistry::builtin().convert(from, to, &text)?;

    let casing = args.case.map(Into::into).unwrap_or(settings.casing);
    write_output(args.output.as_ref(), &casing.apply(converted))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_trailing_newline() {
        let mut text = "abc\r\n".to_string();
        strip_trailing_newline(&mut text);
        assert_eq!(text, "abc");

        let mut text = "abc\n\n".to_string();
        strip_trailing_newline(&mut text);
        assert_eq!(text, "abc\n");

        let mut text = "abc".to_string();
        strip_trailing_newline(&mut text);
        assert_eq!(text, "abc");
    }
}
