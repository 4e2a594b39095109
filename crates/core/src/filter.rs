//! Structured filter engine.
//!
//! A [`FilterSet`] is a sparse set of predicates applied conjunctively to the
//! record collection: every specified predicate must hold, absent predicates
//! impose no constraint. The same type backs both the structured query path
//! and the natural-language path.

use crate::error::{Error, Result};
use crate::record::StringRecord;
use serde::{Deserialize, Serialize};

/// Raw, unparsed filter parameters as they arrive on the query string.
///
/// All values are kept as strings so that malformed input is reported as a
/// distinct parameter error instead of silently dropping the constraint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawFilterParams {
    pub is_palindrome: Option<String>,
    pub min_length: Option<String>,
    pub max_length: Option<String>,
    pub word_count: Option<String>,
    pub contains_character: Option<String>,
}

/// A set of typed filter predicates.
///
/// Serialization skips absent keys, so the echoed `filters_applied` /
/// `parsed_filters` documents list exactly the constraints in effect.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_palindrome: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains_character: Option<char>,
}

impl FilterSet {
    /// Parse raw query-parameter strings into a typed filter set.
    ///
    /// Fails on the first malformed value; an invalid value is never treated
    /// as "no constraint".
    pub fn from_raw(raw: &RawFilterParams) -> Result<Self> {
        let mut filters = Self::default();

        if let Some(v) = &raw.is_palindrome {
            filters.is_palindrome = Some(parse_bool("is_palindrome", v)?);
        }
        if let Some(v) = &raw.min_length {
            filters.min_length = Some(parse_integer("min_length", v)?);
        }
        if let Some(v) = &raw.max_length {
            filters.max_length = Some(parse_integer("max_length", v)?);
        }
        if let Some(v) = &raw.word_count {
            filters.word_count = Some(parse_integer("word_count", v)?);
        }
        if let Some(v) = &raw.contains_character {
            filters.contains_character = Some(parse_character(v)?);
        }

        Ok(filters)
    }

    /// True when no predicate is specified.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Reject bound combinations that cannot match anything.
    ///
    /// Applied uniformly to both query paths, so `min_length > max_length` is
    /// reported as a conflicting-filters error regardless of how the bounds
    /// were supplied.
    pub fn validate(&self) -> Result<()> {
        if let (Some(min), Some(max)) = (self.min_length, self.max_length) {
            if min > max {
                return Err(Error::ConflictingFilters { min, max });
            }
        }
        Ok(())
    }

    /// Whether a single record satisfies every specified predicate.
    pub fn matches(&self, record: &StringRecord) -> bool {
        if let Some(want) = self.is_palindrome {
            if record.properties.is_palindrome != want {
                return false;
            }
        }
        if let Some(min) = self.min_length {
            if record.properties.length < min {
                return false;
            }
        }
        if let Some(max) = self.max_length {
            if record.properties.length > max {
                return false;
            }
        }
        if let Some(count) = self.word_count {
            if record.properties.word_count != count {
                return false;
            }
        }
        if let Some(c) = self.contains_character {
            // Exact, case-sensitive character match against the raw value.
            if !record.value.contains(c) {
                return false;
            }
        }
        true
    }

    /// Keep the subsequence of records satisfying all predicates, preserving
    /// relative order. An empty filter set is the identity.
    pub fn apply(&self, mut records: Vec<StringRecord>) -> Vec<StringRecord> {
        records.retain(|record| self.matches(record));
        records
    }
}

/// Parse a boolean filter value.
///
/// Accepts `true/1/yes/y` and `false/0/no/n`, case-insensitive. Anything else
/// is a parameter error.
pub fn parse_bool(param: &'static str, value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => Ok(true),
        "false" | "0" | "no" | "n" => Ok(false),
        _ => Err(Error::InvalidBool {
            param,
            value: value.to_string(),
        }),
    }
}

/// Parse an unsigned integer filter value.
pub fn parse_integer(param: &'static str, value: &str) -> Result<u64> {
    value.parse().map_err(|_| Error::InvalidInteger {
        param,
        value: value.to_string(),
    })
}

/// Parse a `contains_character` value, which must be exactly one character.
pub fn parse_character(value: &str) -> Result<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(Error::InvalidCharacter(value.to_string())),
    }
}
