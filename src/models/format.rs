//! Structured-data source formats.

use serde::{Serialize, Serializer};
use strum_macros::EnumIter as EnumIterMacro;

/// The embedding syntax a structured-data record was extracted from.
///
/// The declaration order is the bucket order of an inventory: JSON-LD first,
/// meta tags last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIterMacro)]
pub enum SourceFormat {
    /// `<script type="application/ld+json">` blocks
    JsonLd,
    /// `itemscope` / `itemtype` / `itemprop` attributes
    Microdata,
    /// `<meta property="og:*">` tags
    OpenGraph,
    /// `<meta name="twitter:*">` tags
    TwitterCard,
    /// `<meta name="description">`, `<meta name="keywords">` and `<title>`
    MetaTags,
}

impl SourceFormat {
    /// Display name, also used as the synthetic type of untyped records.
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceFormat::JsonLd => "JSON-LD",
            SourceFormat::Microdata => "Microdata",
            SourceFormat::OpenGraph => "OpenGraph",
            SourceFormat::TwitterCard => "TwitterCard",
            SourceFormat::MetaTags => "MetaTags",
        }
    }
}

impl std::fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SourceFormat {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
