//! Logger initialization.
//!
//! Plain (colored) and JSON-lines output on top of `env_logger`.

use std::io::Write;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::*;
use log::LevelFilter;

/// Initializes the logger with the specified level and format.
///
/// Configures `env_logger` with custom formatting: plain text with colored
/// levels, or one JSON object per line for log collectors.
///
/// `RUST_LOG` is read first; the explicit `level` overrides it, so
/// `RUST_LOG=debug` works for quick debugging while `--log-level` stays in control.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// RUST_LOG=debug schema_gap --reference mine.html --competitor theirs.html
///
/// # Per-module filtering via RUST_LOG
/// RUST_LOG=schema_gap::parse=debug schema_gap --reference mine.html --competitor theirs.html
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    colored::control::set_override(true);

    // Read from RUST_LOG environment variable first, then override with CLI arg
    let mut builder = env_logger::Builder::from_default_env();

    // Override with CLI-provided level (takes precedence over RUST_LOG)
    builder.filter_level(level);
    builder.filter_module("html5ever", LevelFilter::Error);
    builder.filter_module("selectors", LevelFilter::Warn);
    builder.filter_module("schema_gap", level);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{{\"ts\":{},\"level\":\"{}\",\"target\":\"{}\",\"msg\":{}}}",
                    chrono::Utc::now().timestamp_millis(),
                    record.level(),
                    record.target(),
                    serde_json::to_string(&record.args().to_string())
                        .unwrap_or_else(|_| "\"\"".into())
                )
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                let level = record.level();
                let colored_level = match level {
                    log::Level::Error => level.to_string().red(),
                    log::Level::Warn => level.to_string().yellow(),
                    log::Level::Info => level.to_string().green(),
                    log::Level::Debug => level.to_string().blue(),
                    log::Level::Trace => level.to_string().purple(),
                };

                writeln!(
                    buf,
                    "{} [{}] {}",
                    record.target().cyan(),
                    colored_level,
                    record.args()
                )
            });
        }
    }

    // try_init so a second initialization (tests) reports an error instead of panicking
    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Only one logger can be installed per process, so these only check that
    // a second initialization is reported rather than panicking.

    #[test]
    fn test_init_logger_plain_format() {
        let first = init_logger_with(LevelFilter::Info, LogFormat::Plain);
        let second = init_logger_with(LevelFilter::Info, LogFormat::Plain);
        assert!(first.is_err() || second.is_err());
    }

    #[test]
    fn test_init_logger_json_format() {
        let _ = init_logger_with(LevelFilter::Debug, LogFormat::Json);
        let result = init_logger_with(LevelFilter::Debug, LogFormat::Json);
        assert!(matches!(result, Err(InitializationError::LoggerError(_))));
    }
}
