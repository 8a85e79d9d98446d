pub mod algorithms;

pub use algorithms::errors::{
    ConfigurationDefect, ConversionError, FormatError, FormatRole, find_closest_format,
};
