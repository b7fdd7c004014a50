//! # Field Validators
//!
//! Pure rules that classify a candidate field value. They know nothing about
//! fields, forms or terminals, so they can be tested on plain strings.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Why a field value was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid IP address: {0}")]
    InvalidIp(String),
    #[error("your host can't be an URL: {0}")]
    InvalidHost(String),
}

/// A validation rule: text in, accept or reject out.
pub type Validator = fn(&str) -> Result<(), ValidationError>;

// Four groups of 1-3 digits anywhere in the text. No octet range check.
// Word boundaries are ASCII-only: `é1.2.3.4` still matches.
static IP_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u:\b)[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}(?-u:\b)")
        .expect("IP pattern is a valid regex")
});

// Any character that is not an ASCII word character, ASCII whitespace
// (`\t \n \f \r` and space) or a dot. NBSP and VT count as forbidden.
static HOST_FORBIDDEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^A-Za-z0-9_\t\n\x0C\r .]").expect("host pattern is a valid regex")
});

/// Accepts text containing a dotted quad of 1-3 digit groups.
///
/// `999.1.1.1` passes: octets are matched by shape only.
pub fn ip_rule(candidate: &str) -> Result<(), ValidationError> {
    if IP_PATTERN.is_match(candidate) {
        Ok(())
    } else {
        Err(ValidationError::InvalidIp(candidate.to_string()))
    }
}

/// Accepts text only when it contains a character outside `[A-Za-z0-9_\s.]`.
///
/// This is the inverse of what the error message suggests: a plain
/// `local.dev` is rejected while `my-host` is accepted.
// TODO: confirm whether plain names like `local.dev` should be accepted, and
// flip the match if so.
pub fn host_rule(candidate: &str) -> Result<(), ValidationError> {
    if HOST_FORBIDDEN.is_match(candidate) {
        Ok(())
    } else {
        Err(ValidationError::InvalidHost(candidate.to_string()))
    }
}
