//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, ValueEnum};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// A competitor page given on the command line: `LABEL=path` or a bare path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompetitorSource {
    /// Caller-supplied label; `None` means "use the positional default"
    pub label: Option<String>,
    /// Path of the saved HTML file
    pub path: PathBuf,
}

impl FromStr for CompetitorSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("competitor path must not be empty".to_string());
        }

        match trimmed.split_once('=') {
            Some((label, path)) if !label.trim().is_empty() && !path.trim().is_empty() => Ok(Self {
                label: Some(label.trim().to_string()),
                path: PathBuf::from(path.trim()),
            }),
            Some((_, path)) if path.trim().is_empty() => {
                Err(format!("competitor '{trimmed}' has a label but no path"))
            }
            _ => Ok(Self {
                label: None,
                path: PathBuf::from(trimmed),
            }),
        }
    }
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use schema_gap::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     reference: PathBuf::from("my-page.html"),
///     output: Some(PathBuf::from("gaps.csv")),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Saved HTML of the page to audit
    pub reference: PathBuf,

    /// Saved HTML of the competitor pages, in report order
    pub competitors: Vec<CompetitorSource>,

    /// CSV output path (stdout if `None`)
    pub output: Option<PathBuf>,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Print the reference inventory as JSON before the report
    pub print_inventory: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reference: PathBuf::from("index.html"),
            competitors: Vec::new(),
            output: None,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            print_inventory: false,
        }
    }
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Compare a page against two saved competitor pages
/// schema_gap --reference mine.html --competitor Acme=acme.html --competitor other.html
///
/// # Write the report to a file and show the reference inventory
/// schema_gap --reference mine.html --competitor acme.html --output gaps.csv --print-inventory
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "schema_gap",
    about = "Reports the structured data your page is missing compared to competitor pages."
)]
pub struct Opt {
    /// Saved HTML of the page to audit
    #[arg(long, value_parser)]
    pub reference: PathBuf,

    /// Competitor page as `LABEL=path` or `path` (repeatable, report order)
    #[arg(long = "competitor", required = true, value_parser = CompetitorSource::from_str)]
    pub competitors: Vec<CompetitorSource>,

    /// CSV output path (defaults to stdout)
    #[arg(long, value_parser)]
    pub output: Option<PathBuf>,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Print the reference inventory as JSON to stderr
    #[arg(long)]
    pub print_inventory: bool,
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            reference: opt.reference,
            competitors: opt.competitors,
            output: opt.output,
            log_level: opt.log_level,
            log_format: opt.log_format,
            print_inventory: opt.print_inventory,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_competitor_source_with_label() {
        let source: CompetitorSource = "Acme=pages/acme.html".parse().unwrap();
        assert_eq!(source.label.as_deref(), Some("Acme"));
        assert_eq!(source.path, PathBuf::from("pages/acme.html"));
    }

    #[test]
    fn test_competitor_source_bare_path() {
        let source: CompetitorSource = "pages/acme.html".parse().unwrap();
        assert_eq!(source.label, None);
        assert_eq!(source.path, PathBuf::from("pages/acme.html"));
    }

    #[test]
    fn test_competitor_source_rejects_empty() {
        assert!("".parse::<CompetitorSource>().is_err());
        assert!("Acme=".parse::<CompetitorSource>().is_err());
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.competitors.is_empty());
        assert!(config.output.is_none());
        assert!(!config.print_inventory);
    }
}
