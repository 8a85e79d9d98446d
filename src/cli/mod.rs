mod args;
mod config;
mod global;
mod handlers;

use clap::{Parser, Subcommand};
use convert_d::ConversionError;
use log::LevelFilter;
use std::io::IsTerminal;
use std::sync::OnceLock;

use args::{ConvertArgs, FormatsArgs, HashArgs};
use global::GlobalArgs;

static USE_COLOR: OnceLock<bool> = OnceLock::new();

#[derive(Parser)]
#[command(name = "convert-d")]
#[command(version)]
#[command(about = "Convert data between text encodings and compute checksums and digests", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert input from one format to another
    Convert(ConvertArgs),
    /// List available formats
    Formats(FormatsArgs),
    /// Compute a digest or checksum of raw input bytes
    Hash(HashArgs),
    /// Verify that every built-in conversion is available
    Check,
}

fn init_logging(global: &GlobalArgs) {
    let level = if global.quiet {
        LevelFilter::Error
    } else {
        match global.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    let style = if global.no_color {
        env_logger::WriteStyle::Never
    } else {
        env_logger::WriteStyle::Auto
    };

    // RUST_LOG takes precedence over the flags
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .write_style(style)
        .format_timestamp(None)
        .parse_default_env()
        .try_init();
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(&cli.global);
    USE_COLOR.get_or_init(|| use_color(cli.global.no_color));

    match cli.command {
        Commands::Convert(args) => {
            let settings = config::load_settings(&cli.global)?;
            handlers::convert::handle(args, &cli.global, &settings)
        }
        Commands::Formats(args) => handlers::formats::handle(args, &cli.global),
        Commands::Hash(args) => handlers::hash::handle(args, &cli.global),
        Commands::Check => handlers::check::handle(&cli.global),
    }
}

fn use_color(no_color_flag: bool) -> bool {
    !no_color_flag && std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal()
}

/// Prints an error to stderr with a `hint:` line when one is available.
pub fn report_error(error: &(dyn std::error::Error + 'static)) {
    let color = *USE_COLOR.get_or_init(|| use_color(false));
    let (red, yellow, reset) = if color {
        ("\x1b[1;31m", "\x1b[33m", "\x1b[0m")
    } else {
        ("", "", "")
    };

    eprintln!("{}error:{} {}", red, reset, error);

    if let Some(hint) = error.downcast_ref::<ConversionError>().and_then(|e| e.hint()) {
        eprintln!("{}hint:{} {}", yellow, reset, hint);
    }
}
