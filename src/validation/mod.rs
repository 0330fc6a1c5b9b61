//! Input validation
//!
//! Identifier syntax checks for URL input and field rules for event
//! submissions. Both run before storage is touched.

mod fields;
mod identifier;

pub use fields::{
    validate_email, validate_new_event, ValidationError, EMAIL_MAX_LEN, SHORT_TEXT_MAX_LEN,
};
pub use identifier::{is_canonical_uuid, parse_event_id};
