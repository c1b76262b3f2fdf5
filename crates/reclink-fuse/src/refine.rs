//! Uniqueness-constrained refinement of a candidate-pair mapping.

use std::collections::BTreeSet;

use tracing::debug;

use reclink_model::PairTable;

/// Filters `table` so retained rows satisfy the requested uniqueness
/// constraints, keeping the first-seen row per index.
///
/// One greedy streaming pass in table order. Every examined row records
/// its indices in the seen-sets whether it is kept or discarded, so a
/// later row is rejected even when its duplicate index belongs to a row
/// that was itself discarded: first occurrence wins per index, not per
/// kept row. Rank the table first to get best-match semantics — this is
/// not a global assignment solver.
pub fn refine(table: &PairTable, left_unique: bool, right_unique: bool) -> PairTable {
    let mut seen_left = BTreeSet::new();
    let mut seen_right = BTreeSet::new();

    let refined = table.filter_rows(|row| {
        let mut keep = true;
        if left_unique && !seen_left.insert(row.index.left) {
            keep = false;
        }
        if right_unique && !seen_right.insert(row.index.right) {
            keep = false;
        }
        keep
    });

    debug!(
        kept = refined.len(),
        discarded = table.len() - refined.len(),
        left_unique,
        right_unique,
        "refined candidate mapping"
    );

    refined
}

/// True when no two rows share a left index.
pub fn is_left_unique(table: &PairTable) -> bool {
    let mut seen = BTreeSet::new();
    table.rows().iter().all(|row| seen.insert(row.index.left))
}

/// True when no two rows share a right index.
pub fn is_right_unique(table: &PairTable) -> bool {
    let mut seen = BTreeSet::new();
    table.rows().iter().all(|row| seen.insert(row.index.right))
}

#[cfg(test)]
mod tests {
    use reclink_model::PairIndex;

    use super::*;

    fn table(indices: &[(usize, usize)], scores: &[f64]) -> PairTable {
        PairTable::new(indices.iter().map(|&(l, r)| PairIndex::new(l, r)))
            .with_column("score", scores.to_vec())
            .expect("score column")
    }

    fn indices(table: &PairTable) -> Vec<(usize, usize)> {
        table
            .rows()
            .iter()
            .map(|row| (row.index.left, row.index.right))
            .collect()
    }

    #[test]
    fn discarded_rows_still_block_their_indices() {
        // (0,1) falls to left-uniqueness, but its right index 1 still
        // blocks (1,1).
        let input = table(&[(0, 0), (0, 1), (1, 1)], &[0.9, 0.99, 0.5]);
        let refined = refine(&input, true, true);
        assert_eq!(indices(&refined), vec![(0, 0)]);
        assert_eq!(refined.column("score").expect("scores"), vec![0.9]);
    }

    #[test]
    fn one_to_many_keeps_repeated_left_indices() {
        let input = table(&[(0, 0), (0, 1), (1, 1)], &[0.9, 0.8, 0.7]);
        let refined = refine(&input, false, true);
        assert_eq!(indices(&refined), vec![(0, 0), (0, 1)]);
    }

    #[test]
    fn many_to_one_keeps_repeated_right_indices() {
        let input = table(&[(0, 0), (0, 1), (1, 1)], &[0.9, 0.8, 0.7]);
        let refined = refine(&input, true, false);
        assert_eq!(indices(&refined), vec![(0, 0)]);
    }

    #[test]
    fn no_constraints_keeps_everything() {
        let input = table(&[(0, 0), (0, 0), (0, 0)], &[0.1, 0.2, 0.3]);
        let refined = refine(&input, false, false);
        assert_eq!(refined.len(), 3);
    }

    #[test]
    fn output_satisfies_both_constraints() {
        let input = table(
            &[(0, 0), (1, 0), (1, 1), (2, 1), (2, 2), (0, 2)],
            &[0.6, 0.5, 0.4, 0.3, 0.2, 0.1],
        );
        let refined = refine(&input, true, true);
        assert!(is_left_unique(&refined));
        assert!(is_right_unique(&refined));
        assert_eq!(indices(&refined), vec![(0, 0), (1, 1), (2, 2)]);
    }

    #[test]
    fn order_of_kept_rows_is_preserved() {
        let input = table(&[(2, 2), (0, 0), (1, 1)], &[0.1, 0.2, 0.3]);
        let refined = refine(&input, true, true);
        assert_eq!(indices(&refined), vec![(2, 2), (0, 0), (1, 1)]);
    }
}
