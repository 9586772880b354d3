//! Meta-tag based formats: OpenGraph, Twitter Card and basic meta tags.
//!
//! Each format collapses into at most one record per page.

use scraper::{Html, Selector};
use std::sync::LazyLock;

use crate::config::{OPEN_GRAPH_PREFIX, TWITTER_CARD_PREFIX};
use crate::models::{EntityRecord, PropertyValue, SourceFormat};
use crate::utils::parse_selector_with_fallback;

// CSS selector strings
const OPEN_GRAPH_SELECTOR_STR: &str = r#"meta[property^="og:"]"#;
const TWITTER_CARD_SELECTOR_STR: &str = r#"meta[name^="twitter:"]"#;
const META_DESCRIPTION_SELECTOR_STR: &str = "meta[name='description']";
const META_KEYWORDS_SELECTOR_STR: &str = "meta[name='keywords']";
const TITLE_SELECTOR_STR: &str = "title";

static OPEN_GRAPH_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_with_fallback(OPEN_GRAPH_SELECTOR_STR, "OpenGraph tags"));

static TWITTER_CARD_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_with_fallback(TWITTER_CARD_SELECTOR_STR, "Twitter Card tags"));

static META_DESCRIPTION_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_with_fallback(META_DESCRIPTION_SELECTOR_STR, "meta description")
});

static META_KEYWORDS_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_with_fallback(META_KEYWORDS_SELECTOR_STR, "meta keywords"));

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_with_fallback(TITLE_SELECTOR_STR, "page title"));

/// Collapses all `og:*` meta properties into one `OpenGraph` record.
pub(crate) fn extract_open_graph(document: &Html) -> Option<EntityRecord> {
    prefixed_meta_record(
        document,
        &OPEN_GRAPH_SELECTOR,
        "property",
        OPEN_GRAPH_PREFIX,
        SourceFormat::OpenGraph,
    )
}

/// Collapses all `twitter:*` meta names into one `TwitterCard` record.
pub(crate) fn extract_twitter_card(document: &Html) -> Option<EntityRecord> {
    prefixed_meta_record(
        document,
        &TWITTER_CARD_SELECTOR,
        "name",
        TWITTER_CARD_PREFIX,
        SourceFormat::TwitterCard,
    )
}

/// Builds the `MetaTags` record from the first description, keywords and title.
///
/// A tag that is present contributes its field even when its content is empty.
pub(crate) fn extract_meta_tags(document: &Html) -> Option<EntityRecord> {
    let mut record = EntityRecord::with_type(SourceFormat::MetaTags, SourceFormat::MetaTags.as_str());

    if let Some(description) = document.select(&META_DESCRIPTION_SELECTOR).next() {
        let content = description.value().attr("content").unwrap_or("");
        record
            .properties
            .insert("description".to_string(), content.into());
    }

    if let Some(keywords) = document.select(&META_KEYWORDS_SELECTOR).next() {
        let content = keywords.value().attr("content").unwrap_or("");
        record.properties.insert("keywords".to_string(), content.into());
    }

    if let Some(title) = document.select(&TITLE_SELECTOR).next() {
        let text = title.text().collect::<String>().trim().to_string();
        record
            .properties
            .insert("title".to_string(), PropertyValue::Text(text));
    }

    record.has_properties().then_some(record)
}

fn prefixed_meta_record(
    document: &Html,
    selector: &Selector,
    attribute: &str,
    prefix: &str,
    format: SourceFormat,
) -> Option<EntityRecord> {
    let mut record = EntityRecord::with_type(format, format.as_str());

    for element in document.select(selector) {
        let key = element
            .value()
            .attr(attribute)
            .and_then(|name| name.strip_prefix(prefix))
            .unwrap_or("");
        let content = element.value().attr("content").unwrap_or("");
        if key.is_empty() || content.is_empty() {
            continue;
        }
        record.properties.insert(key.to_string(), content.into());
    }

    if record.has_properties() {
        Some(record)
    } else {
        None
    }
}
