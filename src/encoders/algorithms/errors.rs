use std::fmt;
use thiserror::Error;

/// Errors raised by an individual codec while decoding text or encoding bytes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The input contains a character outside the format's alphabet
    #[error("invalid character '{character}' at position {position}")]
    InvalidCharacter {
        character: char,
        position: usize,
        input: String,
        valid_chars: String,
    },
    /// The input has a length the format cannot decode
    #[error("invalid length: input is {actual} characters, expected {expected}")]
    InvalidLength {
        actual: usize,
        expected: String,
        hint: String,
    },
    /// The byte sequence has the wrong length for the target format
    #[error("invalid length: {expected} bytes required, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    /// A token or value could not be interpreted
    #[error("malformed input '{fragment}': {reason}")]
    Malformed { fragment: String, reason: String },
}

impl FormatError {
    /// Create an InvalidCharacter error with context
    pub fn invalid_character(c: char, position: usize, input: &str, valid_chars: &str) -> Self {
        // Truncate long inputs
        let display_input = if input.chars().count() > 60 {
            format!("{}...", input.chars().take(60).collect::<String>())
        } else {
            input.to_string()
        };

        FormatError::InvalidCharacter {
            character: c,
            position,
            input: display_input,
            valid_chars: valid_chars.to_string(),
        }
    }

    /// Create an InvalidLength error
    pub fn invalid_length(
        actual: usize,
        expected: impl Into<String>,
        hint: impl Into<String>,
    ) -> Self {
        FormatError::InvalidLength {
            actual,
            expected: expected.into(),
            hint: hint.into(),
        }
    }

    pub fn length_mismatch(expected: usize, actual: usize) -> Self {
        FormatError::LengthMismatch { expected, actual }
    }

    pub fn malformed(fragment: impl Into<String>, reason: impl Into<String>) -> Self {
        FormatError::Malformed {
            fragment: fragment.into(),
            reason: reason.into(),
        }
    }

    /// The piece of input responsible for the failure, when one can be singled out.
    pub fn fragment(&self) -> Option<String> {
        match self {
            FormatError::InvalidCharacter { character, .. } => Some(character.to_string()),
            FormatError::Malformed { fragment, .. } => Some(fragment.clone()),
            FormatError::InvalidLength { .. } | FormatError::LengthMismatch { .. } => None,
        }
    }

    /// A short suggestion for fixing the input.
    pub fn hint(&self) -> Option<String> {
        match self {
            FormatError::InvalidCharacter { valid_chars, .. } => {
                // Truncate long alphabets
                let hint_chars = if valid_chars.chars().count() > 80 {
                    format!("{}...", valid_chars.chars().take(80).collect::<String>())
                } else {
                    valid_chars.clone()
                };
                Some(format!("valid characters: {}", hint_chars))
            }
            FormatError::InvalidLength { hint, .. } if !hint.is_empty() => Some(hint.clone()),
            _ => None,
        }
    }
}

/// Which side of a conversion a format id was requested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatRole {
    Input,
    Output,
}

impl fmt::Display for FormatRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatRole::Input => write!(f, "input"),
            FormatRole::Output => write!(f, "output"),
        }
    }
}

/// Errors returned by a registry conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// The format id is not registered for the requested role
    #[error("unknown {role} format '{id}'")]
    UnknownFormat {
        id: String,
        role: FormatRole,
        suggestion: Option<String>,
    },
    /// The text failed the input format's validation; nothing was decoded
    #[error("input is not valid {format}")]
    InvalidInput { format: &'static str },
    /// The text looked valid but could not be decoded
    #[error("cannot decode {format}: {source}")]
    DecodeError {
        format: &'static str,
        fragment: Option<String>,
        source: FormatError,
    },
    /// The decoded bytes cannot be represented in the output format
    #[error("cannot encode {format}: {source}")]
    EncodeError {
        format: &'static str,
        source: FormatError,
    },
}

impl ConversionError {
    pub fn unknown_format(id: &str, role: FormatRole, available: &[&str]) -> Self {
        ConversionError::UnknownFormat {
            id: id.to_string(),
            role,
            suggestion: find_closest_format(id, available),
        }
    }

    pub fn decode(format: &'static str, source: FormatError) -> Self {
        ConversionError::DecodeError {
            format,
            fragment: source.fragment(),
            source,
        }
    }

    pub fn encode(format: &'static str, source: FormatError) -> Self {
        ConversionError::EncodeError { format, source }
    }

    pub fn hint(&self) -> Option<String> {
        match self {
            ConversionError::UnknownFormat {
                suggestion: Some(suggestion),
                ..
            } => Some(format!("did you mean '{}'?", suggestion)),
            ConversionError::UnknownFormat { .. } => {
                Some("run `convert-d formats` to see all formats".to_string())
            }
            ConversionError::InvalidInput { .. } => None,
            ConversionError::DecodeError { source, .. }
            | ConversionError::EncodeError { source, .. } => source.hint(),
        }
    }
}

/// A registry that cannot serve every declared conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationDefect {
    #[error("{role} format '{id}' has no {operation} operation")]
    MissingCapability {
        id: &'static str,
        role: FormatRole,
        operation: &'static str,
    },
    #[error("{role} format '{id}' is registered more than once")]
    DuplicateId { id: &'static str, role: FormatRole },
    #[error("no converter path from '{from}' to '{to}'")]
    MissingPath { from: &'static str, to: &'static str },
}

/// Calculate Levenshtein distance between two strings
fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let len1 = s1.chars().count();
    let len2 = s2.chars().count();

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for (i, c1) in s1.chars().enumerate() {
        curr_row[0] = i + 1;

        for (j, c2) in s2.chars().enumerate() {
            let cost = if c1 == c2 { 0 } else { 1 };
            curr_row[j + 1] = (curr_row[j] + 1)
                .min(prev_row[j + 1] + 1)
                .min(prev_row[j] + cost);
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len2]
}

/// Find the closest matching format id
pub fn find_closest_format(id: &str, available: &[&str]) -> Option<String> {
    let mut best_match = None;
    let mut best_distance = usize::MAX;

    // 1-2 character typos for short ids, up to 3 for longer ones
    let threshold = if id.len() < 5 { 2 } else { 3 };

    for candidate in available {
        let distance = levenshtein_distance(id, candidate);
        if distance < best_distance && distance <= threshold {
            best_distance = distance;
            best_match = Some(candidate.to_string());
        }
    }

    best_match
}
