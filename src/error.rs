//! Crate-wide error type.
//!
//! The hot path (morpheme → accent) never fails: every malformed field is
//! handled inline by falling back and recording a breakdown/warning
//! string (§7). The only place an actual `Result` is warranted is loading
//! the rule table at startup, which is genuine I/O plus JSON parsing.

use std::fmt;

#[derive(Debug)]
pub enum AccentError {
    RuleTableRead(std::io::Error),
    RuleTableParse(serde_json::Error),
}

impl fmt::Display for AccentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccentError::RuleTableRead(e) => write!(f, "failed to read rule table: {e}"),
            AccentError::RuleTableParse(e) => write!(f, "failed to parse rule table: {e}"),
        }
    }
}

impl std::error::Error for AccentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AccentError::RuleTableRead(e) => Some(e),
            AccentError::RuleTableParse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for AccentError {
    fn from(e: std::io::Error) -> Self {
        AccentError::RuleTableRead(e)
    }
}

impl From<serde_json::Error> for AccentError {
    fn from(e: serde_json::Error) -> Self {
        AccentError::RuleTableParse(e)
    }
}
