use clap::{Args, ValueEnum};
use convert_d::Casing;
use std::path::PathBuf;

/// Arguments for converting between formats
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Input format id (default from settings)
    #[arg(short = 'f', long = "from", value_name = "ID")]
    pub from: Option<String>,

    /// Output format id (default from settings)
    #[arg(short = 't', long = "to", value_name = "ID")]
    pub to: Option<String>,

    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Remove line breaks from the input before converting
    #[arg(long)]
    pub ignore_line_breaks: bool,

    /// Change the case of the output
    #[arg(long, value_enum, value_name = "CASE")]
    pub case: Option<CaseArg>,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Output casing (CLI enum)
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum CaseArg {
    Keep,
    Upper,
    Lower,
}

impl From<CaseArg> for Casing {
    fn from(cli: CaseArg) -> Self {
        match cli {
            CaseArg::Keep => Casing::Keep,
            CaseArg::Upper => Casing::Upper,
            CaseArg::Lower => Casing::Lower,
        }
    }
}

/// Arguments for listing formats
#[derive(Args, Debug)]
pub struct FormatsArgs {
    /// Only list formats usable as input
    #[arg(long, conflicts_with = "output")]
    pub input: bool,

    /// Only list formats usable as output
    #[arg(long)]
    pub output: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for hashing data
#[derive(Args, Debug)]
pub struct HashArgs {
    /// Hash algorithm (md5, sha1, sha256, sha512, sha3, sha512_256, pbkdf2, crc32)
    pub algorithm: String,

    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// PBKDF2 salt as 32 hex digits (random if not provided)
    #[arg(long, value_name = "HEX")]
    pub salt: Option<String>,

    /// PBKDF2 iteration count
    #[arg(long, value_name = "N")]
    pub iterations: Option<u32>,
}
