//! ISO 8601 timestamps.
//!
//! The byte form of a timestamp is the decimal text of its Unix epoch value
//! in milliseconds, one ASCII digit per byte: `1970-01-01T00:00:01Z` decodes
//! to `b"1000"`. Encoding reads the digits back and renders
//! `YYYY-MM-DDTHH:MM:SS.sssZ`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

use super::errors::FormatError;

/// Naive layouts tried after RFC 3339; all are taken as UTC.
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

fn parse(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(input) {
        return Some(timestamp.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

pub fn validate(input: &str) -> bool {
    parse(input).is_some()
}

pub fn decode(input: &str) -> Result<Vec<u8>, FormatError> {
    let timestamp = parse(input)
        .ok_or_else(|| FormatError::malformed(input.trim(), "not an ISO 8601 timestamp"))?;
    Ok(timestamp.timestamp_millis().to_string().into_bytes())
}

pub fn encode(data: &[u8]) -> Result<String, FormatError> {
    let digits = match data.split_first() {
        Some((b'-', rest)) => rest,
        _ => data,
    };
    if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
        return Err(FormatError::malformed(
            String::from_utf8_lossy(data),
            "expected the decimal digits of a millisecond epoch value",
        ));
    }

    // only ASCII digits and '-' remain, so this is valid UTF-8
    let text = String::from_utf8_lossy(data);
    let millis: i64 = text
        .parse()
        .map_err(|_| FormatError::malformed(text.as_ref(), "epoch value out of range"))?;
    let timestamp = DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| FormatError::malformed(text.as_ref(), "epoch value out of range"))?;

    Ok(timestamp.to_rfc3339_opts(SecondsFormat::Millis, true))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_to_millisecond_digits() {
        assert_eq!(decode("1970-01-01T00:00:01Z").unwrap(), b"1000");
        assert_eq!(decode("2024-02-29T12:30:00.250Z").unwrap(), b"1709209800250");
    }

    #[test]
    fn test_decode_applies_offset() {
        assert_eq!(
            decode("2024-02-29T14:30:00.250+02:00").unwrap(),
            decode("2024-02-29T12:30:00.250Z").unwrap()
        );
    }

    #[test]
    fn test_decode_naive_forms_as_utc() {
        assert_eq!(decode("1970-01-02").unwrap(), b"86400000");
        assert_eq!(decode("1970-01-01T00:01:00").unwrap(), b"60000");
    }

    #[test]
    fn test_decode_before_epoch() {
        assert_eq!(decode("1969-12-31T23:59:59Z").unwrap(), b"-1000");
        assert_eq!(encode(b"-1000").unwrap(), "1969-12-31T23:59:59.000Z");
    }

    #[test]
    fn test_encode_canonical_form() {
        assert_eq!(encode(b"0").unwrap(), "1970-01-01T00:00:00.000Z");
        assert_eq!(encode(b"1709209800250").unwrap(), "2024-02-29T12:30:00.250Z");
    }

    #[test]
    fn test_encode_rejects_non_digits() {
        assert!(encode(b"12a").is_err());
        assert!(encode(b"").is_err());
        assert!(encode(b"-").is_err());
        assert!(encode(b"99999999999999999999").is_err());
    }

    #[test]
    fn test_unparseable_input() {
        assert!(!validate("yesterday"));
        assert!(decode("2024-13-01").is_err());
    }
}
