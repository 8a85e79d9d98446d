pub mod ascii85;
pub mod base32;
pub mod binary;
pub mod bits;
pub mod byte_list;
pub mod decimal;
pub mod errors;
pub mod hex;
pub mod hexdump;
pub mod html_entities;
pub mod ipv4;
pub mod ipv6;
pub mod morse;
pub mod octal;
pub mod rot13;
pub mod text;
pub mod timestamp;
pub mod uuid;

// Re-export error types for public API
pub use errors::{
    ConfigurationDefect, ConversionError, FormatError, FormatRole, find_closest_format,
};
