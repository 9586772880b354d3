//! Application configuration and constants.
//!
//! This module provides:
//! - Fixed strings (labels, prefixes, export headers)
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{CompetitorSource, Config, LogFormat, LogLevel, Opt};
