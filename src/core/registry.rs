use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::sync::OnceLock;

use crate::encoders::algorithms as codecs;
use crate::encoders::{ConfigurationDefect, ConversionError, FormatError, FormatRole};
use crate::features::crc32;
use crate::features::hashing::{self, HashAlgorithm, Pbkdf2Params};

/// Checks whether text is acceptable input for a format.
pub type ValidateFn = fn(&str) -> bool;
/// Turns format text into bytes.
pub type DecodeFn = fn(&str) -> Result<Vec<u8>, FormatError>;
/// Renders bytes as format text.
pub type EncodeFn = fn(&[u8]) -> Result<String, FormatError>;

/// A named textual format and the operations it supports.
#[derive(Clone, Copy)]
pub struct FormatDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub validate: Option<ValidateFn>,
    pub decode: Option<DecodeFn>,
    pub encode: Option<EncodeFn>,
}

impl FormatDescriptor {
    /// A format usable on both sides of a conversion.
    pub const fn codec(
        id: &'static str,
        name: &'static str,
        validate: ValidateFn,
        decode: DecodeFn,
        encode: EncodeFn,
    ) -> Self {
        Self {
            id,
            name,
            validate: Some(validate),
            decode: Some(decode),
            encode: Some(encode),
        }
    }

    /// A format that can only be produced, such as a digest.
    pub const fn output_only(id: &'static str, name: &'static str, encode: EncodeFn) -> Self {
        Self {
            id,
            name,
            validate: None,
            decode: None,
            encode: Some(encode),
        }
    }

    pub fn is_input(&self) -> bool {
        self.validate.is_some() || self.decode.is_some()
    }

    pub fn is_output(&self) -> bool {
        self.encode.is_some()
    }
}

impl fmt::Debug for FormatDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatDescriptor")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("validate", &self.validate.is_some())
            .field("decode", &self.decode.is_some())
            .field("encode", &self.encode.is_some())
            .finish()
    }
}

/// Listing entry for a registered format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormatInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub input: bool,
    pub output: bool,
}

macro_rules! digest_encoder {
    ($name:ident, $algorithm:expr) => {
        fn $name(data: &[u8]) -> Result<String, FormatError> {
            Ok(hashing::hash_hex(data, $algorithm))
        }
    };
}

digest_encoder!(encode_md5, HashAlgorithm::Md5);
digest_encoder!(encode_sha1, HashAlgorithm::Sha1);
digest_encoder!(encode_sha256, HashAlgorithm::Sha256);
digest_encoder!(encode_sha512, HashAlgorithm::Sha512);
digest_encoder!(encode_sha3, HashAlgorithm::Sha3);
digest_encoder!(encode_sha512_256, HashAlgorithm::Sha512_256);

fn encode_pbkdf2(data: &[u8]) -> Result<String, FormatError> {
    Ok(hashing::pbkdf2_sha256(data, &Pbkdf2Params::random()))
}

fn encode_crc32(data: &[u8]) -> Result<String, FormatError> {
    Ok(crc32::checksum_hex(data))
}

/// Every built-in format, in listing order.
pub static BUILTIN_FORMATS: &[FormatDescriptor] = &[
    FormatDescriptor::codec(
        "text",
        "Text",
        codecs::text::accept_any,
        codecs::text::decode_text,
        codecs::text::encode_text,
    ),
    FormatDescriptor::codec(
        "hex",
        "Hex",
        codecs::hex::validate,
        codecs::hex::decode,
        codecs::hex::encode,
    ),
    FormatDescriptor::codec(
        "octal",
        "Octal",
        codecs::octal::validate,
        codecs::octal::decode,
        codecs::octal::encode,
    ),
    FormatDescriptor::codec(
        "base32",
        "Base32",
        codecs::base32::validate,
        codecs::base32::decode,
        codecs::base32::encode,
    ),
    FormatDescriptor::codec(
        "base64",
        "Base64",
        codecs::text::validate_base64,
        codecs::text::decode_base64,
        codecs::text::encode_base64,
    ),
    FormatDescriptor::codec(
        "base64url",
        "Base64 URL",
        codecs::text::validate_base64url,
        codecs::text::decode_base64url,
        codecs::text::encode_base64url,
    ),
    FormatDescriptor::codec(
        "url",
        "URL Encoding",
        codecs::text::validate_url,
        codecs::text::decode_url,
        codecs::text::encode_url,
    ),
    FormatDescriptor::codec(
        "bytes",
        "Byte Array",
        codecs::byte_list::validate,
        codecs::byte_list::decode,
        codecs::byte_list::encode,
    ),
    FormatDescriptor::codec(
        "decimal",
        "Decimal",
        codecs::decimal::validate,
        codecs::decimal::decode,
        codecs::decimal::encode,
    ),
    FormatDescriptor::codec(
        "htmlentities",
        "HTML Entities",
        codecs::text::accept_any,
        codecs::html_entities::decode,
        codecs::html_entities::encode,
    ),
    FormatDescriptor::codec(
        "binary",
        "Binary",
        codecs::binary::validate,
        codecs::binary::decode,
        codecs::binary::encode,
    ),
    FormatDescriptor::codec(
        "ascii85",
        "Ascii85",
        codecs::ascii85::validate,
        codecs::ascii85::decode,
        codecs::ascii85::encode,
    ),
    FormatDescriptor::codec(
        "morse",
        "Morse Code",
        codecs::morse::validate,
        codecs::morse::decode,
        codecs::morse::encode,
    ),
    FormatDescriptor::codec(
        "uuid4",
        "UUIDv4",
        codecs::uuid::validate,
        codecs::uuid::decode,
        codecs::uuid::encode,
    ),
    FormatDescriptor::codec(
        "hexdump",
        "Hex Dump",
        codecs::hexdump::validate,
        codecs::hexdump::decode,
        codecs::hexdump::encode,
    ),
    FormatDescriptor::codec(
        "ipv4",
        "IPv4 Address",
        codecs::ipv4::validate,
        codecs::ipv4::decode,
        codecs::ipv4::encode,
    ),
    FormatDescriptor::codec(
        "ipv6",
        "IPv6 Address",
        codecs::ipv6::validate,
        codecs::ipv6::decode,
        codecs::ipv6::encode,
    ),
    FormatDescriptor::codec(
        "iso8601",
        "ISO 8601 Timestamp",
        codecs::timestamp::validate,
        codecs::timestamp::decode,
        codecs::timestamp::encode,
    ),
    FormatDescriptor::codec(
        "rot13",
        "ROT13",
        codecs::text::accept_any,
        codecs::rot13::decode,
        codecs::rot13::encode,
    ),
    FormatDescriptor::codec(
        "reverse",
        "Reverse Text",
        codecs::text::accept_any,
        codecs::text::decode_reverse,
        codecs::text::encode_reverse,
    ),
    FormatDescriptor::output_only("md5", "MD5 Hash", encode_md5),
    FormatDescriptor::output_only("sha1", "SHA1 Hash", encode_sha1),
    FormatDescriptor::output_only("sha256", "SHA256 Hash", encode_sha256),
    FormatDescriptor::output_only("sha512", "SHA512 Hash", encode_sha512),
    FormatDescriptor::output_only("sha3", "SHA3 Hash", encode_sha3),
    FormatDescriptor::output_only("sha512_256", "SHA512/256 Hash", encode_sha512_256),
    FormatDescriptor::output_only("pbkdf2", "PBKDF2 Hash", encode_pbkdf2),
    FormatDescriptor::output_only("crc32", "CRC32 Checksum", encode_crc32),
    FormatDescriptor::output_only("words", "Word Count", codecs::text::encode_word_count),
];

static BUILTIN: OnceLock<FormatRegistry> = OnceLock::new();

/// Ordered input and output format lists. Every conversion goes
/// input text → bytes → output text.
#[derive(Debug, Clone)]
pub struct FormatRegistry {
    inputs: Vec<FormatDescriptor>,
    outputs: Vec<FormatDescriptor>,
}

impl FormatRegistry {
    pub fn new(inputs: Vec<FormatDescriptor>, outputs: Vec<FormatDescriptor>) -> Self {
        Self { inputs, outputs }
    }

    /// Splits a descriptor list by capability, keeping its order.
    pub fn from_descriptors(formats: &[FormatDescriptor]) -> Self {
        Self::new(
            formats.iter().filter(|f| f.is_input()).copied().collect(),
            formats.iter().filter(|f| f.is_output()).copied().collect(),
        )
    }

    /// The registry of built-in formats, checked once on first use.
    pub fn builtin() -> &'static FormatRegistry {
        BUILTIN.get_or_init(|| {
            let registry = Self::from_descriptors(BUILTIN_FORMATS);
            for defect in registry.check() {
                log::error!("format registry: {}", defect);
            }
            registry
        })
    }

    /// Lists every way this registry cannot serve a declared conversion.
    pub fn check(&self) -> Vec<ConfigurationDefect> {
        let mut defects = Vec::new();

        for (role, formats) in [
            (FormatRole::Input, &self.inputs),
            (FormatRole::Output, &self.outputs),
        ] {
            let mut seen = HashSet::new();
            for format in formats {
                if !seen.insert(format.id) {
                    defects.push(ConfigurationDefect::DuplicateId {
                        id: format.id,
                        role,
                    });
                }
            }
        }

        for format in &self.inputs {
            if format.validate.is_none() {
                defects.push(ConfigurationDefect::MissingCapability {
                    id: format.id,
                    role: FormatRole::Input,
                    operation: "validate",
                });
            }
            if format.decode.is_none() {
                defects.push(ConfigurationDefect::MissingCapability {
                    id: format.id,
                    role: FormatRole::Input,
                    operation: "decode",
                });
            }
        }

        for format in &self.outputs {
            if format.encode.is_none() {
                defects.push(ConfigurationDefect::MissingCapability {
                    id: format.id,
                    role: FormatRole::Output,
                    operation: "encode",
                });
            }
        }

        for input in &self.inputs {
            for output in &self.outputs {
                if input.id != output.id
                    && (input.validate.is_none() || input.decode.is_none() || output.encode.is_none())
                {
                    defects.push(ConfigurationDefect::MissingPath {
                        from: input.id,
                        to: output.id,
                    });
                }
            }
        }

        defects
    }

    /// `(id, name)` of every input format, in registration order.
    pub fn inputs(&self) -> Vec<(&'static str, &'static str)> {
        self.inputs.iter().map(|f| (f.id, f.name)).collect()
    }

    /// `(id, name)` of every output format, in registration order.
    pub fn outputs(&self) -> Vec<(&'static str, &'static str)> {
        self.outputs.iter().map(|f| (f.id, f.name)).collect()
    }

    pub fn input(&self, id: &str) -> Option<&FormatDescriptor> {
        self.inputs.iter().find(|f| f.id == id)
    }

    pub fn output(&self, id: &str) -> Option<&FormatDescriptor> {
        self.outputs.iter().find(|f| f.id == id)
    }

    /// Every registered id with its roles: inputs first, then output-only
    /// formats.
    pub fn catalogue(&self) -> Vec<FormatInfo> {
        let mut infos: Vec<FormatInfo> = self
            .inputs
            .iter()
            .map(|f| FormatInfo {
                id: f.id,
                name: f.name,
                input: true,
                output: self.output(f.id).is_some(),
            })
            .collect();

        infos.extend(
            self.outputs
                .iter()
                .filter(|f| self.input(f.id).is_none())
                .map(|f| FormatInfo {
                    id: f.id,
                    name: f.name,
                    input: false,
                    output: true,
                }),
        );

        infos
    }

    fn input_ids(&self) -> Vec<&'static str> {
        self.inputs.iter().map(|f| f.id).collect()
    }

    fn output_ids(&self) -> Vec<&'static str> {
        self.outputs.iter().map(|f| f.id).collect()
    }

    /// Validates and decodes `text` with the input format `id`.
    pub fn decode(&self, id: &str, text: &str) -> Result<Vec<u8>, ConversionError> {
        let format = self.input(id).ok_or_else(|| {
            ConversionError::unknown_format(id, FormatRole::Input, &self.input_ids())
        })?;

        let (Some(validate), Some(decode)) = (format.validate, format.decode) else {
            return Err(ConversionError::InvalidInput { format: format.id });
        };

        if !validate(text) {
            log::debug!("input rejected by {} validation", format.id);
            return Err(ConversionError::InvalidInput { format: format.id });
        }

        decode(text).map_err(|e| ConversionError::decode(format.id, e))
    }

    /// Encodes bytes with the output format `id`.
    pub fn encode(&self, id: &str, data: &[u8]) -> Result<String, ConversionError> {
        let encode = self
            .output(id)
            .and_then(|f| f.encode.map(|encode| (f.id, encode)));
        let (format, encode) = encode.ok_or_else(|| {
            ConversionError::unknown_format(id, FormatRole::Output, &self.output_ids())
        })?;

        encode(data).map_err(|e| ConversionError::encode(format, e))
    }

    /// Converts `text` from one format to another. Both ids are resolved
    /// before anything is decoded.
    pub fn convert(&self, from: &str, to: &str, text: &str) -> Result<String, ConversionError> {
        if self.output(to).is_none() {
            if self.input(from).is_none() {
                return Err(ConversionError::unknown_format(
                    from,
                    FormatRole::Input,
                    &self.input_ids(),
                ));
            }
            return Err(ConversionError::unknown_format(
                to,
                FormatRole::Output,
                &self.output_ids(),
            ));
        }

        let bytes = self.decode(from, text)?;
        log::debug!(
            "converting {} -> {}: {} chars decoded to {} bytes",
            from,
            to,
            text.chars().count(),
            bytes.len()
        );
        self.encode(to, &bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "the little fox JUMPS!!";

    fn registry() -> &'static FormatRegistry {
        FormatRegistry::builtin()
    }

    #[test]
    fn test_builtin_has_no_defects() {
        let defects = FormatRegistry::from_descriptors(BUILTIN_FORMATS).check();
        assert!(defects.is_empty(), "{:?}", defects);
    }

    #[test]
    fn test_listing_order() {
        let inputs = registry().inputs();
        assert_eq!(inputs.first(), Some(&("text", "Text")));
        assert_eq!(inputs.len(), 20);

        let outputs = registry().outputs();
        assert_eq!(outputs.len(), 29);
        assert_eq!(outputs.last(), Some(&("words", "Word Count")));
        assert!(registry().input("md5").is_none());
        assert!(registry().output("md5").is_some());
    }

    #[test]
    fn test_text_to_hex() {
        assert_eq!(
            registry().convert("text", "hex", SAMPLE).unwrap(),
            "746865206c6974746c6520666f78204a554d50532121"
        );
    }

    #[test]
    fn test_text_to_md5() {
        assert_eq!(
            registry().convert("text", "md5", SAMPLE).unwrap(),
            "05095ee87414b4fef7ce0081d0bd486e"
        );
    }

    #[test]
    fn test_unknown_input_suggests_closest() {
        let err = registry().convert("hx", "text", "00").unwrap_err();
        assert_eq!(
            err,
            ConversionError::UnknownFormat {
                id: "hx".to_string(),
                role: FormatRole::Input,
                suggestion: Some("hex".to_string()),
            }
        );
    }

    #[test]
    fn test_unknown_output_checked_before_decoding() {
        let err = registry().convert("hex", "nope", "zz").unwrap_err();
        assert!(matches!(
            err,
            ConversionError::UnknownFormat {
                role: FormatRole::Output,
                ..
            }
        ));
    }

    #[test]
    fn test_output_only_format_is_not_an_input() {
        let err = registry().convert("sha256", "hex", "abc").unwrap_err();
        assert!(matches!(
            err,
            ConversionError::UnknownFormat {
                role: FormatRole::Input,
                ..
            }
        ));
    }

    #[test]
    fn test_invalid_input_skips_decode() {
        let err = registry().convert("binary", "hex", "0102").unwrap_err();
        assert_eq!(err, ConversionError::InvalidInput { format: "binary" });
    }

    #[test]
    fn test_decode_error_carries_fragment() {
        let err = registry().convert("ascii85", "hex", "uuuuu").unwrap_err();
        match err {
            ConversionError::DecodeError {
                format, fragment, ..
            } => {
                assert_eq!(format, "ascii85");
                assert_eq!(fragment.as_deref(), Some("uuuuu"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_encode_error() {
        let err = registry().convert("hex", "ipv4", "0102").unwrap_err();
        assert_eq!(
            err,
            ConversionError::EncodeError {
                format: "ipv4",
                source: FormatError::length_mismatch(4, 2),
            }
        );
    }

    #[test]
    fn test_check_reports_defects() {
        let broken = FormatDescriptor {
            id: "broken",
            name: "Broken",
            validate: None,
            decode: Some(codecs::hex::decode),
            encode: None,
        };
        let hex = BUILTIN_FORMATS[1];
        let registry = FormatRegistry::new(vec![hex, broken], vec![hex, hex, broken]);
        let defects = registry.check();

        assert!(defects.contains(&ConfigurationDefect::DuplicateId {
            id: "hex",
            role: FormatRole::Output,
        }));
        assert!(defects.contains(&ConfigurationDefect::MissingCapability {
            id: "broken",
            role: FormatRole::Input,
            operation: "validate",
        }));
        assert!(defects.contains(&ConfigurationDefect::MissingCapability {
            id: "broken",
            role: FormatRole::Output,
            operation: "encode",
        }));
        assert!(defects.contains(&ConfigurationDefect::MissingPath {
            from: "broken",
            to: "hex",
        }));
        assert!(defects.contains(&ConfigurationDefect::MissingPath {
            from: "hex",
            to: "broken",
        }));
    }

    #[test]
    fn test_catalogue() {
        let catalogue = registry().catalogue();
        assert_eq!(catalogue.len(), 29);
        let hex = catalogue.iter().find(|f| f.id == "hex").unwrap();
        assert!(hex.input && hex.output);
        let crc = catalogue.iter().find(|f| f.id == "crc32").unwrap();
        assert!(!crc.input && crc.output);
    }
}
