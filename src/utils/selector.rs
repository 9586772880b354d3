//! CSS selector parsing utilities.

use scraper::Selector;

/// Selector that never matches, used when a selector string fails to parse.
const MATCH_NOTHING_SELECTOR: &str = "*:not(*)";

/// Parses a CSS selector with a safe fallback.
///
/// If parsing fails, logs an error and returns a selector that matches nothing
/// (`*:not(*)`), so extraction of that format yields no records instead of
/// panicking.
///
/// # Arguments
///
/// * `selector_str` - The CSS selector string to parse
/// * `context` - Context description for error logging (e.g., "JSON-LD extraction")
pub fn parse_selector_with_fallback(selector_str: &str, context: &str) -> Selector {
    Selector::parse(selector_str).unwrap_or_else(|e| {
        log::error!(
            "Failed to parse CSS selector '{}' in {}: {}. Using fallback selector.",
            selector_str,
            context,
            e
        );
        Selector::parse(MATCH_NOTHING_SELECTOR).expect(
            "Fallback selector '*:not(*)' should always parse - this is a programming error",
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn test_valid_selector_matches() {
        let selector = parse_selector_with_fallback("meta[name='description']", "test");
        let document = Html::parse_document(r#"<meta name="description" content="x">"#);
        assert_eq!(document.select(&selector).count(), 1);
    }

    #[test]
    fn test_invalid_selector_falls_back_to_match_nothing() {
        let selector = parse_selector_with_fallback("[[[not a selector", "test");
        let document = Html::parse_document("<html><body><p>text</p></body></html>");
        assert_eq!(document.select(&selector).count(), 0);
    }
}
