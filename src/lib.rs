//! Convert data between bytes and a catalogue of textual formats, and
//! compute checksums and digests over bytes.
//!
//! ```
//! let hex = convert_d::convert("text", "hex", "hi").unwrap();
//! assert_eq!(hex, "6869");
//! ```

mod core;
mod encoders;
mod features;

pub mod prelude;

pub use crate::core::config::{Casing, Settings, SettingsOverride};
pub use crate::core::registry::{
    BUILTIN_FORMATS, DecodeFn, EncodeFn, FormatDescriptor, FormatInfo, FormatRegistry, ValidateFn,
};
pub use crate::encoders::algorithms;
pub use crate::encoders::{
    ConfigurationDefect, ConversionError, FormatError, FormatRole, find_closest_format,
};
pub use crate::features::crc32;
pub use crate::features::hashing::{
    self, HashAlgorithm, PBKDF2_ITERATIONS, PBKDF2_KEY_LEN, PBKDF2_SALT_LEN, Pbkdf2Params, hash,
    hash_hex, pbkdf2_sha256,
};

/// Converts `text` from the input format `from` to the output format `to`
/// using the built-in registry.
pub fn convert(from: &str, to: &str, text: &str) -> Result<String, ConversionError> {
    FormatRegistry::builtin().convert(from, to, text)
}
