//! Convenient re-exports for common usage.
//!
//! # Example
//!
//! ```
//! use convert_d::prelude::*;
//!
//! let registry = FormatRegistry::builtin();
//! let digest = registry.convert("text", "crc32", "123456789").unwrap();
//! assert_eq!(digest, "cbf43926");
//! ```

pub use crate::{
    // Errors
    ConfigurationDefect,
    ConversionError,
    FormatError,
    FormatRole,

    // Registry
    FormatDescriptor,
    FormatRegistry,

    // Digests
    HashAlgorithm,
    Pbkdf2Params,

    // Config
    Settings,

    convert,
    hash,
};
