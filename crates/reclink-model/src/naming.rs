//! Collision-avoiding identifier naming.
//!
//! Every synthetic column name in the toolkit (ranking's temporary
//! aggregate column, fusion's suffixed source columns) goes through this
//! one rule so collision semantics stay identical everywhere.

use std::collections::BTreeSet;

/// Returns `base` if unused, otherwise the first free of `base_2`,
/// `base_3`, and so on.
pub fn unused_name(base: &str, used: &BTreeSet<String>) -> String {
    unused_name_with_sep(base, used, "_")
}

/// Like [`unused_name`] with a custom separator between base and counter.
pub fn unused_name_with_sep(base: &str, used: &BTreeSet<String>, sep: &str) -> String {
    if !used.contains(base) {
        return base.to_string();
    }
    let mut counter = 2usize;
    loop {
        let candidate = format!("{base}{sep}{counter}");
        if !used.contains(&candidate) {
            return candidate;
        }
        counter += 1;
    }
}
