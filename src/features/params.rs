use lazy_static::lazy_static;
use regex::Regex;

use crate::data::models::ApiError;

lazy_static! {
    static ref WHITESPACE_RE: Regex = Regex::new(r"\s+").unwrap();
}

/// Default and ceiling for a `limit` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimitPolicy {
    pub default: i64,
    pub max: i64,
}

pub const LIST_LIMIT: LimitPolicy = LimitPolicy {
    default: 100,
    max: 1000,
};

pub const RANDOM_LIMIT: LimitPolicy = LimitPolicy {
    default: 1000,
    max: 1000,
};

impl LimitPolicy {
    /// Absent or empty means the default; positive values above `max` are clamped.
    pub fn resolve(&self, raw: Option<&str>) -> Result<i64, ApiError> {
        let raw = match raw {
            None | Some("") => return Ok(self.default),
            Some(raw) => raw,
        };

        match raw.parse::<i64>() {
            Ok(limit) if limit > 0 => Ok(limit.min(self.max)),
            _ => Err(ApiError::InvalidParameter("limit")),
        }
    }
}

/// Trims the search term and collapses inner whitespace.
pub fn normalize_word(raw: Option<&str>) -> Result<String, ApiError> {
    let word = WHITESPACE_RE.replace_all(raw.unwrap_or_default().trim(), " ");
    if word.is_empty() {
        return Err(ApiError::MissingParameter("word"));
    }
    Ok(word.into_owned())
}
