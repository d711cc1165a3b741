//! Locale-aware string comparison
//!
//! Approximates root-locale collation with three strength levels:
//!
//! 1. Primary: base letters, ignoring accents and case (`"e" == "É"`)
//! 2. Secondary: accents (`"e" < "é"`)
//! 3. Tertiary: case, lowercase first (`"a" < "A"`)
//!
//! Strings that are equal at all three levels fall back to code-point order,
//! so the result is a total order.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Compare two strings the way a user would expect them sorted
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(&primary_key(b))
        .then_with(|| secondary_key(a).cmp(&secondary_key(b)))
        .then_with(|| tertiary_key(a).cmp(&tertiary_key(b)))
        .then_with(|| a.cmp(b))
}

fn primary_key(s: &str) -> Vec<char> {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

fn secondary_key(s: &str) -> Vec<char> {
    s.nfd().flat_map(char::to_lowercase).collect()
}

// `false` sorts before `true`, so lowercase wins ties.
fn tertiary_key(s: &str) -> Vec<bool> {
    s.nfd().map(char::is_uppercase).collect()
}
