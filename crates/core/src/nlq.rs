//! Heuristic natural-language filter translator.
//!
//! Maps a free-text phrase onto the same [`FilterSet`] consumed by the
//! structured query path. This is a fixed pattern matcher, not a learned
//! model: each rule below independently inspects the case-folded query and
//! sets at most one filter key. Rules run in a fixed scan order, so when two
//! phrases target the same key the later rule wins. That overwrite behavior
//! is documented ambiguity, kept as-is.

use crate::error::{Error, Result};
use crate::filter::FilterSet;
use once_cell::sync::Lazy;
use regex::Regex;

static SINGLE_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bsingle word\b|\bone word\b").expect("hard-coded pattern"));
static LONGER_THAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"longer than (\d+)").expect("hard-coded pattern"));
static AT_LEAST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"at least (\d+)").expect("hard-coded pattern"));
static CONTAINS_LETTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"contain(?:ing|s)? the letter ([a-z])").expect("hard-coded pattern"));
static STRINGS_CONTAINING_LETTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"strings containing the letter (\w)").expect("hard-coded pattern"));
static SHORTER_THAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"shorter than (\d+)").expect("hard-coded pattern"));

/// One translation rule: a trigger name (for tracing) and the effect applied
/// to the filter set when the trigger matches.
type Rule = (&'static str, fn(&str, &mut FilterSet));

/// The rule table, in scan order. Order matters: later rules overwrite
/// earlier ones when both set the same key.
static RULES: &[Rule] = &[
    ("single word", rule_single_word),
    ("palindrome", rule_palindrome),
    ("longer than", rule_longer_than),
    ("at least", rule_at_least),
    ("contains the letter", rule_contains_letter),
    ("strings containing the letter", rule_strings_containing_letter),
    ("first vowel", rule_first_vowel),
    ("shorter than", rule_shorter_than),
];

/// Translate a free-text query into a filter set.
///
/// Fails with [`Error::UnparseableQuery`] when no rule extracts anything and
/// with [`Error::ConflictingFilters`] when the extracted length bounds cannot
/// match any string. Translation is lossy: phrases outside the rule table are
/// ignored.
pub fn translate(query: &str) -> Result<FilterSet> {
    let text = query.to_lowercase();
    let mut filters = FilterSet::default();

    for (name, rule) in RULES {
        let before = filters.clone();
        rule(&text, &mut filters);
        if filters != before {
            tracing::debug!(rule = %name, "natural-language rule matched");
        }
    }

    if filters.is_empty() {
        return Err(Error::UnparseableQuery(query.to_string()));
    }
    filters.validate()?;

    Ok(filters)
}

fn rule_single_word(text: &str, filters: &mut FilterSet) {
    if SINGLE_WORD.is_match(text) {
        filters.word_count = Some(1);
    }
}

fn rule_palindrome(text: &str, filters: &mut FilterSet) {
    // Covers "palindrome", "palindromic", "palindromes".
    if text.contains("palindrom") {
        filters.is_palindrome = Some(true);
    }
}

fn rule_longer_than(text: &str, filters: &mut FilterSet) {
    if let Some(n) = captured_integer(&LONGER_THAN, text) {
        // "longer than N" is exclusive, min_length is inclusive.
        filters.min_length = Some(n.saturating_add(1));
    }
}

fn rule_at_least(text: &str, filters: &mut FilterSet) {
    if let Some(n) = captured_integer(&AT_LEAST, text) {
        filters.min_length = Some(n);
    }
}

fn rule_contains_letter(text: &str, filters: &mut FilterSet) {
    if let Some(c) = captured_char(&CONTAINS_LETTER, text) {
        filters.contains_character = Some(c);
    }
}

fn rule_strings_containing_letter(text: &str, filters: &mut FilterSet) {
    if let Some(c) = captured_char(&STRINGS_CONTAINING_LETTER, text) {
        filters.contains_character = Some(c);
    }
}

fn rule_first_vowel(text: &str, filters: &mut FilterSet) {
    // Fixed heuristic substitution: "first vowel" means the letter 'a', not a
    // search over the vowel set.
    if text.contains("first vowel") {
        filters.contains_character = Some('a');
    }
}

fn rule_shorter_than(text: &str, filters: &mut FilterSet) {
    if let Some(n) = captured_integer(&SHORTER_THAN, text) {
        // "shorter than N" is exclusive, max_length is inclusive.
        filters.max_length = Some(n.saturating_sub(1));
    }
}

fn captured_integer(pattern: &Regex, text: &str) -> Option<u64> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

fn captured_char(pattern: &Regex, text: &str) -> Option<char> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().chars().next())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translates_single_word() {
        let filters = translate("all single word strings").unwrap();
        assert_eq!(filters.word_count, Some(1));
    }

    #[test]
    fn translates_one_word() {
        let filters = translate("one word entries").unwrap();
        assert_eq!(filters.word_count, Some(1));
    }

    #[test]
    fn translates_palindromic_variants() {
        assert_eq!(
            translate("palindromic strings").unwrap().is_palindrome,
            Some(true)
        );
        assert_eq!(
            translate("every palindrome").unwrap().is_palindrome,
            Some(true)
        );
    }

    #[test]
    fn longer_than_is_exclusive() {
        let filters = translate("strings longer than 5").unwrap();
        assert_eq!(filters.min_length, Some(6));
    }

    #[test]
    fn at_least_is_inclusive_and_wins_over_longer_than() {
        let filters = translate("longer than 5 but at least 3").unwrap();
        // "at least" is scanned after "longer than", so it overwrites.
        assert_eq!(filters.min_length, Some(3));
    }

    #[test]
    fn shorter_than_is_exclusive() {
        let filters = translate("strings shorter than 8").unwrap();
        assert_eq!(filters.max_length, Some(7));
    }

    #[test]
    fn extracts_contained_letter() {
        let filters = translate("strings that contain the letter z").unwrap();
        assert_eq!(filters.contains_character, Some('z'));
        let filters = translate("containing the letter q please").unwrap();
        assert_eq!(filters.contains_character, Some('q'));
    }

    #[test]
    fn first_vowel_is_a_fixed_substitution() {
        let filters = translate("strings with the first vowel").unwrap();
        assert_eq!(filters.contains_character, Some('a'));
    }

    #[test]
    fn query_is_case_folded() {
        let filters = translate("Single Word PALINDROMIC strings").unwrap();
        assert_eq!(filters.word_count, Some(1));
        assert_eq!(filters.is_palindrome, Some(true));
    }

    #[test]
    fn combined_phrases_set_independent_keys() {
        let filters = translate("single word palindromic strings longer than 2").unwrap();
        assert_eq!(filters.word_count, Some(1));
        assert_eq!(filters.is_palindrome, Some(true));
        assert_eq!(filters.min_length, Some(3));
    }

    #[test]
    fn conflicting_bounds_are_rejected() {
        let err = translate("strings longer than 10 and shorter than 3").unwrap_err();
        assert!(matches!(
            err,
            Error::ConflictingFilters { min: 11, max: 2 }
        ));
    }

    #[test]
    fn unintelligible_query_is_rejected() {
        let err = translate("show me the money").unwrap_err();
        assert!(matches!(err, Error::UnparseableQuery(_)));
    }

    #[test]
    fn translation_is_deterministic() {
        let a = translate("single word strings longer than 4").unwrap();
        let b = translate("single word strings longer than 4").unwrap();
        assert_eq!(a, b);
    }
}
