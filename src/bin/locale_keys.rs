//! locale-keys: check that two translation files define the same keys
//!
//! Usage:
//!   # Compare the default locales (locales/en-UK vs locales/es-ES)
//!   locale-keys
//!
//!   # Compare two explicit files
//!   locale-keys en.json fr.json
//!
//!   # Pick locales under another directory and fail CI on mismatch
//!   locale-keys --locales-dir app/locales --second-locale de-DE --strict

use anyhow::{Context, Result};
use clap::Parser;
use locale_keys::{compare_files, ComparePaths, ExtractConfig, ReportWriter};
use std::io::stdout;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::level_filters::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "locale-keys")]
#[command(about = "Report key paths present in one translation file but not the other", long_about = None)]
struct Args {
    /// First JSON file (defaults to <LOCALES_DIR>/<FIRST_LOCALE>/translations.json)
    #[arg(value_name = "FIRST", requires = "second")]
    first: Option<PathBuf>,

    /// Second JSON file (defaults to <LOCALES_DIR>/<SECOND_LOCALE>/translations.json)
    #[arg(value_name = "SECOND")]
    second: Option<PathBuf>,

    /// Directory holding one sub-directory per locale
    #[arg(long, default_value = "locales")]
    locales_dir: PathBuf,

    /// Locale of the first file when no paths are given
    #[arg(long, default_value = "en-UK")]
    first_locale: String,

    /// Locale of the second file when no paths are given
    #[arg(long, default_value = "es-ES")]
    second_locale: String,

    /// Separator between nested keys
    #[arg(long, default_value = ".")]
    separator: String,

    /// Exit with status 1 when the keys differ
    #[arg(long)]
    strict: bool,

    /// Increase log verbosity on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn paths(&self) -> ComparePaths {
        match (&self.first, &self.second) {
            (Some(first), Some(second)) => ComparePaths::new(first, second),
            _ => ComparePaths::from_locales(&self.locales_dir, &self.first_locale, &self.second_locale),
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    init_logging(args.verbose);

    let paths = args.paths();
    let config = ExtractConfig {
        separator: args.separator.clone(),
    };

    let diff = compare_files(&paths, &config, ReportWriter::new(stdout().lock())).with_context(|| {
        format!(
            "Failed to compare {} with {}",
            paths.first.display(),
            paths.second.display()
        )
    })?;

    if args.strict && !diff.is_match() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
