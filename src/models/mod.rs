//! Structured-data data model.
//!
//! - `SourceFormat`: the embedding syntax a record came from
//! - `EntityRecord`: one structured-data item (type tags + ordered properties)
//! - `PropertyValue`: scalar, nested object or list

mod format;
mod record;
mod value;

// Re-export public API
pub use format::SourceFormat;
pub use record::{EntityRecord, TYPE_KEY};
pub use value::{PropertyMap, PropertyValue};
