//! Event outcome vocabulary

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Outcome URI for a successful event
pub const SUCCESS_URI: &str = "http://purl.org/NET/UNTL/vocabularies/eventOutcomes/#success";

/// Outcome URI for a failed event
pub const FAILURE_URI: &str = "http://purl.org/NET/UNTL/vocabularies/eventOutcomes/#failure";

/// Longest outcome value the storage column accepts
const OUTCOME_MAX_LEN: usize = 80;

const _: () = assert!(
    SUCCESS_URI.len() <= OUTCOME_MAX_LEN && FAILURE_URI.len() <= OUTCOME_MAX_LEN,
    "outcome URIs must fit the storage column"
);

/// Outcome of a major event.
///
/// Held as a short enum internally and exchanged as its vocabulary URI at
/// every external boundary (storage, JSON, XML).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Outcome {
    Success,
    Failure,
}

/// Raised when a value is not one of the outcome vocabulary terms
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown event outcome: {0}")]
pub struct UnknownOutcome(pub String);

impl Outcome {
    pub const ALL: [Outcome; 2] = [Outcome::Success, Outcome::Failure];

    /// Vocabulary URI for this outcome
    pub fn uri(self) -> &'static str {
        match self {
            Outcome::Success => SUCCESS_URI,
            Outcome::Failure => FAILURE_URI,
        }
    }

    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            Outcome::Success => "Success",
            Outcome::Failure => "Failure",
        }
    }

    /// Strict parse from the vocabulary URI
    pub fn from_uri(uri: &str) -> Result<Self, UnknownOutcome> {
        Self::ALL
            .into_iter()
            .find(|outcome| outcome.uri() == uri)
            .ok_or_else(|| UnknownOutcome(uri.to_string()))
    }

    pub fn is_success(self) -> bool {
        matches!(self, Outcome::Success)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepts the vocabulary URI or the label, case-insensitively.
impl FromStr for Outcome {
    type Err = UnknownOutcome;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(outcome) = Self::from_uri(trimmed) {
            return Ok(outcome);
        }
        Self::ALL
            .into_iter()
            .find(|outcome| outcome.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownOutcome(s.to_string()))
    }
}

impl TryFrom<String> for Outcome {
    type Error = UnknownOutcome;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_uri(&value)
    }
}

impl From<Outcome> for &'static str {
    fn from(outcome: Outcome) -> Self {
        outcome.uri()
    }
}
