//! Event identifier syntax check
//!
//! Identifiers arrive from URL paths. Only the canonical hyphenated form
//! (`8-4-4-4-12` hex digits) is accepted; `Uuid::parse_str` alone would also
//! take the simple, braced and URN forms, which never appear in our URLs.

use uuid::Uuid;

use crate::error::EventLogError;
use crate::types::EventId;

const HYPHEN_POSITIONS: [usize; 4] = [8, 13, 18, 23];
const CANONICAL_LEN: usize = 36;

/// Parse an externally supplied event identifier.
///
/// Runs before any storage lookup, so malformed input never reaches the
/// database.
pub fn parse_event_id(raw: &str) -> Result<EventId, EventLogError> {
    if !is_canonical_uuid(raw) {
        return Err(EventLogError::InvalidIdentifier(raw.to_string()));
    }
    Uuid::parse_str(raw).map_err(|_| EventLogError::InvalidIdentifier(raw.to_string()))
}

/// Whether `raw` is a hyphenated hex UUID string
pub fn is_canonical_uuid(raw: &str) -> bool {
    if raw.len() != CANONICAL_LEN {
        return false;
    }
    raw.char_indices().all(|(i, c)| {
        if HYPHEN_POSITIONS.contains(&i) {
            c == '-'
        } else {
            c.is_ascii_hexdigit()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_canonical_form() {
        let id = parse_event_id("88888888-4444-4444-a444-121212121212").unwrap();
        assert_eq!(id.to_string(), "88888888-4444-4444-a444-121212121212");

        // Upper-case hex is still canonical text
        assert!(parse_event_id("D7768443-04E2-45D2-B71F-2B716BF13F13").is_ok());
    }

    #[test]
    fn test_rejects_short_id() {
        assert!(matches!(
            parse_event_id("abcd-1234"),
            Err(EventLogError::InvalidIdentifier(_))
        ));
    }

    #[test]
    fn test_rejects_non_hex() {
        assert!(parse_event_id("z7768443-04z2-45q2-y71m-2w716px13uzz").is_err());
    }

    #[test]
    fn test_rejects_other_uuid_spellings() {
        assert!(parse_event_id("d776844304e245d2b71f2b716bf13f13").is_err());
        assert!(parse_event_id("{d7768443-04e2-45d2-b71f-2b716bf13f13}").is_err());
        assert!(parse_event_id("urn:uuid:d7768443-04e2-45d2-b71f-2b716bf13f13").is_err());
        assert!(parse_event_id("d7768443_04e2_45d2_b71f_2b716bf13f13").is_err());
        assert!(parse_event_id("").is_err());
    }
}
