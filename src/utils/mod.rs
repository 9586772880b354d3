//! Shared helpers.
//!
//! - CSS selector parsing with a non-panicking fallback
//! - Label defaults for competitor documents

mod selector;

pub use selector::parse_selector_with_fallback;

use crate::config::DEFAULT_COMPETITOR_LABEL_PREFIX;

/// Default label of the competitor at 0-based `position`: `Competitor 1`, `Competitor 2`, ...
pub fn default_competitor_label(position: usize) -> String {
    format!("{} {}", DEFAULT_COMPETITOR_LABEL_PREFIX, position + 1)
}
