#![deny(unsafe_code)]

//! Similarity primitives and the pairwise comparison engine.
//!
//! The primitives are pure functions over strings and collections; the
//! engine applies them (or any caller-supplied comparator) across a
//! candidate-pair table, producing one score column per comparison.

pub mod align;
pub mod comparator;
pub mod engine;
pub mod primitives;

pub use align::{
    AlignWeights, fuzzy_align, longest_common_substring, normed_fuzzy_align,
    normed_longest_common_substring,
};
pub use comparator::{
    collection_comparator, contains_prefix_comparator, distance_excluding_comparator,
    fuzzy_align_comparator, lcs_comparator, normed_fuzzy_align_comparator, normed_lcs_comparator,
    set_overlap_comparator, text_comparator,
};
pub use engine::{Comparison, compare};
pub use primitives::{contains_prefix_score, distance_excluding, set_overlap};
