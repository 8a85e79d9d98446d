//! Checksums and digests.
//!
//! These produce output from bytes but cannot be decoded back, so the
//! registry offers them as output-only formats.

pub mod crc32;
pub mod hashing;

pub use hashing::{HashAlgorithm, Pbkdf2Params, hash, hash_hex, pbkdf2_sha256};
