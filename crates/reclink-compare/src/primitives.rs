//! Scalar and collection similarity primitives.

use rapidfuzz::distance::jaro;

use reclink_model::Value;

/// Overlap of two collections treated as sets:
/// `|intersection| / min(|A|, |B|)`.
///
/// Duplicates within an input are ignored. Returns `NaN` when either set
/// is empty — a deliberate fix of the original behavior, which divided by
/// zero; an empty collection carries no evidence either way.
pub fn set_overlap(a: &[Value], b: &[Value]) -> f64 {
    let set_a = dedupe(a);
    let set_b = dedupe(b);
    if set_a.is_empty() || set_b.is_empty() {
        return f64::NAN;
    }
    let shared = set_a.iter().filter(|v| set_b.contains(v)).count();
    shared as f64 / set_a.len().min(set_b.len()) as f64
}

fn dedupe(values: &[Value]) -> Vec<&Value> {
    let mut unique: Vec<&Value> = Vec::with_capacity(values.len());
    for value in values {
        if !unique.contains(&value) {
            unique.push(value);
        }
    }
    unique
}

/// Score for the longest prefix of `needle` that appears as a substring
/// of `haystack`: `1 - dropped / |needle|`, or `0.0` once the needle is
/// exhausted (including an empty needle).
///
/// The trim loop is iterative; the original recursed once per dropped
/// character.
pub fn contains_prefix_score(needle: &str, haystack: &str) -> f64 {
    let chars: Vec<char> = needle.chars().collect();
    let total = chars.len();
    for dropped in 0..total {
        let prefix: String = chars[..total - dropped].iter().collect();
        if haystack.contains(&prefix) {
            return 1.0 - dropped as f64 / total as f64;
        }
    }
    0.0
}

/// Jaro similarity between `a` and `b` after removing every occurrence
/// of each excluded substring from `a`.
///
/// Exclusions apply in caller order; when terms overlap, a different
/// order can clean `a` differently, and that order-dependence is part of
/// the contract.
pub fn distance_excluding<S: AsRef<str>>(a: &str, b: &str, excluded: &[S]) -> f64 {
    let mut cleaned = a.to_string();
    for term in excluded {
        cleaned = cleaned.replace(term.as_ref(), "");
    }
    jaro::similarity(cleaned.chars(), b.chars())
}
