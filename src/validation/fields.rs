//! Submission field rules for events

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::NewEvent;

/// Maximum length of `title` and `contact_name`, in characters
pub const SHORT_TEXT_MAX_LEN: usize = 100;

/// Maximum length of `contact_email`, in characters
pub const EMAIL_MAX_LEN: usize = 254;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)+$")
        .expect("email pattern is valid")
});

/// A submitted field failed validation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    Required { field: &'static str },

    #[error("{field} must be at most {max} characters (got {actual})")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    #[error("invalid email address: {0}")]
    InvalidEmail(String),
}

/// Check every field of a submission, reporting the first failure
pub fn validate_new_event(fields: &NewEvent) -> Result<(), ValidationError> {
    require("title", &fields.title)?;
    max_len("title", &fields.title, SHORT_TEXT_MAX_LEN)?;
    require("detail", &fields.detail)?;
    require("outcome_detail", &fields.outcome_detail)?;
    require("contact_name", &fields.contact_name)?;
    max_len("contact_name", &fields.contact_name, SHORT_TEXT_MAX_LEN)?;
    require("contact_email", &fields.contact_email)?;
    max_len("contact_email", &fields.contact_email, EMAIL_MAX_LEN)?;
    validate_email(&fields.contact_email)
}

/// Check that an address has the `local@domain.tld` shape
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail(email.to_string()))
    }
}

fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::Required { field })
    } else {
        Ok(())
    }
}

fn max_len(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    let actual = value.chars().count();
    if actual > max {
        Err(ValidationError::TooLong { field, max, actual })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Outcome;
    use chrono::Utc;

    fn valid() -> NewEvent {
        NewEvent {
            title: "test".to_string(),
            detail: "none".to_string(),
            outcome: Outcome::Success,
            outcome_detail: "none".to_string(),
            date: Utc::now(),
            contact_name: "John Doe".to_string(),
            contact_email: "admin@email.com".to_string(),
        }
    }

    #[test]
    fn test_valid_submission() {
        assert_eq!(validate_new_event(&valid()), Ok(()));
    }

    #[test]
    fn test_required_fields() {
        let err = validate_new_event(&NewEvent {
            detail: "   ".to_string(),
            ..valid()
        })
        .unwrap_err();
        assert_eq!(err, ValidationError::Required { field: "detail" });

        let err = validate_new_event(&NewEvent {
            contact_name: String::new(),
            ..valid()
        })
        .unwrap_err();
        assert_eq!(err, ValidationError::Required { field: "contact_name" });
    }

    #[test]
    fn test_title_length_counts_characters() {
        let at_limit = "é".repeat(SHORT_TEXT_MAX_LEN);
        assert!(validate_new_event(&NewEvent {
            title: at_limit,
            ..valid()
        })
        .is_ok());

        let err = validate_new_event(&NewEvent {
            title: "x".repeat(SHORT_TEXT_MAX_LEN + 1),
            ..valid()
        })
        .unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { field: "title", actual: 101, .. }));
    }

    #[test]
    fn test_email_shapes() {
        assert!(validate_email("mark.phillips@unt.edu").is_ok());
        assert!(validate_email("a+b@sub.example.org").is_ok());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("user@localhost").is_err());
        assert!(validate_email("user@@example.com").is_err());
        assert!(validate_email("user name@example.com").is_err());
    }
}
