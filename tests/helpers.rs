//! Shared HTML fixtures for integration tests.

#![allow(dead_code)]

/// Wraps JSON-LD blocks and extra head markup in a minimal page.
pub fn page_with_json_ld(blocks: &[&str], head_extra: &str) -> String {
    let scripts: String = blocks
        .iter()
        .map(|block| format!(r#"<script type="application/ld+json">{}</script>"#, block))
        .collect();
    format!(
        "<!DOCTYPE html><html><head>{}{}</head><body><p>content</p></body></html>",
        scripts, head_extra
    )
}

/// A reference page with an Article lacking `publisher`.
pub fn article_reference() -> String {
    page_with_json_ld(
        &[r#"{"@context": "https://schema.org", "@type": "Article", "headline": "Our story"}"#],
        "",
    )
}

/// A competitor page with a richer Article, an FAQPage and social meta tags.
pub fn rich_competitor() -> String {
    page_with_json_ld(
        &[
            r#"{"@context": "https://schema.org", "@type": "Article", "headline": "Their story",
                "publisher": {"@type": "Organization", "name": "Acme"}}"#,
            r#"{"@context": "https://schema.org", "@type": "FAQPage",
                "mainEntity": [{"@type": "Question", "name": "Why?"}]}"#,
        ],
        r#"<meta property="og:title" content="Their story"><title>Acme</title>"#,
    )
}
