//! Per-event XML exports
//!
//! Both exporters are pure renderers: they take an event that has already
//! been looked up and never touch storage.

mod atom;
mod premis;

pub use atom::render_atom_item;
pub use premis::{render_premis_item, PREMIS_EVENT_TYPE, PREMIS_NS};

/// Declared content type of both per-event exports
pub const EXPORT_CONTENT_TYPE: &str = "text/xml; charset=utf-8";
