//! Utility functions and helpers
//!
//! Timestamp formatting and markup escaping shared by the exporters, the
//! feed and the HTML pages.

pub mod markup;
pub mod time;

pub use markup::{escape_attr, escape_text};
pub use time::{
    format_display, format_rfc3339, format_storage_timestamp, parse_storage_timestamp,
    parse_submitted_date,
};
