//! Property derivation for analyzed strings.

use crate::hash::ContentHash;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Properties derived from a string value.
///
/// Computed once when a record is created and persisted alongside it as an
/// opaque JSON document; never recomputed afterwards. All character-level
/// fields operate on Unicode scalar values (`char`), so multi-byte characters
/// count as one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StringProperties {
    /// Number of characters (code points).
    pub length: u64,
    /// Whether the case-folded value equals its own character reverse.
    ///
    /// This is a literal check: whitespace and punctuation are not stripped,
    /// so `"race car"` is not a palindrome while `"Racecar"` is.
    pub is_palindrome: bool,
    /// Number of distinct characters.
    pub unique_characters: u64,
    /// Number of maximal whitespace-delimited tokens.
    pub word_count: u64,
    /// SHA-256 digest of the UTF-8 encoding; equal to the record id.
    pub hash: ContentHash,
    /// Occurrence count per character, whitespace and punctuation included.
    pub character_frequency: HashMap<char, u64>,
}

/// Analyze a string value and derive its properties.
///
/// Total and deterministic: every string, including the empty string, is
/// valid input and the same input always yields the same output.
pub fn analyze(value: &str) -> StringProperties {
    let length = value.chars().count() as u64;

    // Case-fold once, then compare the folded character sequence against its
    // reverse. No diacritic normalization.
    let folded: Vec<char> = value.to_lowercase().chars().collect();
    let is_palindrome = folded.iter().eq(folded.iter().rev());

    let unique_characters = value.chars().collect::<HashSet<_>>().len() as u64;
    let word_count = value.split_whitespace().count() as u64;
    let hash = ContentHash::of_str(value);

    let mut character_frequency: HashMap<char, u64> = HashMap::new();
    for c in value.chars() {
        *character_frequency.entry(c).or_insert(0) += 1;
    }

    StringProperties {
        length,
        is_palindrome,
        unique_characters,
        word_count,
        hash,
        character_frequency,
    }
}
