//! Core types: sources, filters, normalized events, catalog persistence

pub mod catalog;
pub mod event;
pub mod source;

pub use catalog::{Catalog, CatalogError, merge_and_write};
pub use event::{NormalizedEvent, STATIC_EVENT_TYPE, sanitize_source_name};
pub use source::{EventFilter, Source};
