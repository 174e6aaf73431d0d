// crates/wayfarer-core/src/validate.rs

//! # Input Validation
//!
//! Pure gate in front of every name lookup. Nothing in here performs I/O;
//! a query that fails validation never reaches the network.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use thiserror::Error;

pub const MIN_QUERY_CHARS: usize = 2;
pub const MAX_QUERY_CHARS: usize = 100;

// Letters from any script (Latin-1 accented letters included), whitespace,
// hyphens and apostrophes. Full-string match.
static ALLOWED_QUERY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{L}\s\-']+$").expect("query pattern is a valid regex"));

/// Why a query was rejected. Rules are checked in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a country name")]
    Empty,
    #[error("Search term must be at least 2 characters")]
    TooShort,
    #[error("Search term must be at most 100 characters")]
    TooLong,
    #[error("Search term may only contain letters, spaces, hyphens and apostrophes")]
    InvalidCharacters,
}

/// A query that passed [`validate`].
///
/// Keeps the user's raw text for display, but only the normalized (trimmed)
/// form is ever sent to the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    raw: String,
    normalized: String,
}

impl SearchQuery {
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn as_str(&self) -> &str {
        &self.normalized
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalized)
    }
}

/// Validate raw user input.
///
/// Lengths are counted in characters of the trimmed input, so `"  é "` has
/// length 1.
///
/// ```rust
/// use wayfarer_core::validate::{validate, ValidationError};
///
/// assert_eq!(validate("  Japan ").unwrap().as_str(), "Japan");
/// assert_eq!(validate("a"), Err(ValidationError::TooShort));
/// assert_eq!(validate("R2-D2"), Err(ValidationError::InvalidCharacters));
/// ```
pub fn validate(raw: &str) -> Result<SearchQuery, ValidationError> {
    let trimmed = raw.trim();
    let len = trimmed.chars().count();

    if len == 0 {
        return Err(ValidationError::Empty);
    }
    if len < MIN_QUERY_CHARS {
        return Err(ValidationError::TooShort);
    }
    if len > MAX_QUERY_CHARS {
        return Err(ValidationError::TooLong);
    }
    if !ALLOWED_QUERY.is_match(trimmed) {
        return Err(ValidationError::InvalidCharacters);
    }

    Ok(SearchQuery {
        raw: raw.to_owned(),
        normalized: trimmed.to_owned(),
    })
}
