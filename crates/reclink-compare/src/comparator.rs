//! Comparator plug-in interface and ready-made comparators.
//!
//! A comparator is any `Fn(&Value, &Value) -> Result<f64>`. A `NaN`
//! result means "incomparable" (a missing operand); a returned error
//! means the data violated the comparator's contract, which aborts the
//! whole comparison rather than being smoothed over.

use reclink_model::{LinkageError, Result, Value};

use crate::align::{
    AlignWeights, fuzzy_align, longest_common_substring, normed_fuzzy_align,
    normed_longest_common_substring,
};
use crate::primitives::{contains_prefix_score, distance_excluding, set_overlap};

/// Lifts a string scorer into a comparator.
///
/// `Missing` on either side yields `NaN`; any other non-text operand is
/// an [`LinkageError::InvalidArgument`].
pub fn text_comparator<F>(score: F) -> impl Fn(&Value, &Value) -> Result<f64>
where
    F: Fn(&str, &str) -> f64,
{
    move |a, b| match (a, b) {
        (Value::Missing, _) | (_, Value::Missing) => Ok(f64::NAN),
        (Value::Text(x), Value::Text(y)) => Ok(score(x, y)),
        _ => Err(LinkageError::InvalidArgument(format!(
            "expected text values, got {} and {}",
            a.kind(),
            b.kind()
        ))),
    }
}

/// Lifts a collection scorer into a comparator, with the same
/// missing-to-`NaN` rule as [`text_comparator`].
pub fn collection_comparator<F>(score: F) -> impl Fn(&Value, &Value) -> Result<f64>
where
    F: Fn(&[Value], &[Value]) -> f64,
{
    move |a, b| match (a, b) {
        (Value::Missing, _) | (_, Value::Missing) => Ok(f64::NAN),
        (Value::List(x), Value::List(y)) => Ok(score(x, y)),
        _ => Err(LinkageError::InvalidArgument(format!(
            "expected list values, got {} and {}",
            a.kind(),
            b.kind()
        ))),
    }
}

/// Raw Smith–Waterman local-alignment comparator.
pub fn fuzzy_align_comparator(weights: AlignWeights) -> impl Fn(&Value, &Value) -> Result<f64> {
    text_comparator(move |a, b| fuzzy_align(a, b, &weights))
}

/// Normalized (`[0, 1]`) Smith–Waterman comparator.
pub fn normed_fuzzy_align_comparator(
    weights: AlignWeights,
) -> impl Fn(&Value, &Value) -> Result<f64> {
    text_comparator(move |a, b| normed_fuzzy_align(a, b, &weights))
}

/// Raw longest-common-substring length comparator.
pub fn lcs_comparator() -> impl Fn(&Value, &Value) -> Result<f64> {
    text_comparator(|a, b| longest_common_substring(a, b) as f64)
}

/// Normalized (`[0, 1]`) longest-common-substring comparator.
pub fn normed_lcs_comparator() -> impl Fn(&Value, &Value) -> Result<f64> {
    text_comparator(normed_longest_common_substring)
}

/// Set-overlap comparator over list values.
pub fn set_overlap_comparator() -> impl Fn(&Value, &Value) -> Result<f64> {
    collection_comparator(set_overlap)
}

/// Prefix-containment comparator; the left value is the needle.
pub fn contains_prefix_comparator() -> impl Fn(&Value, &Value) -> Result<f64> {
    text_comparator(contains_prefix_score)
}

/// Jaro comparator that strips `excluded` substrings from the left value
/// first, in the given order.
pub fn distance_excluding_comparator(
    excluded: Vec<String>,
) -> impl Fn(&Value, &Value) -> Result<f64> {
    text_comparator(move |a, b| distance_excluding(a, b, &excluded))
}
