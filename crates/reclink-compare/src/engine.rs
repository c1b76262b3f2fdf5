//! Pairwise comparison engine.

use std::collections::BTreeSet;

use tracing::debug;

use reclink_model::{
    LinkageError, PairIndex, PairTable, RecordSet, Result, Side, Value, unused_name,
};

/// Applies `comparator` element-wise over two aligned value sequences.
///
/// # Errors
///
/// Returns [`LinkageError::LengthMismatch`] when the sequences differ in
/// length. A comparator error propagates immediately; missing values do
/// not error, they score `NaN`.
pub fn compare<C>(left: &[Value], right: &[Value], comparator: C) -> Result<Vec<f64>>
where
    C: Fn(&Value, &Value) -> Result<f64>,
{
    if left.len() != right.len() {
        return Err(LinkageError::LengthMismatch {
            left: left.len(),
            right: right.len(),
        });
    }
    left.iter()
        .zip(right)
        .map(|(a, b)| comparator(a, b))
        .collect()
}

/// Builds a scored [`PairTable`] from two record sets and their candidate
/// pairs.
///
/// Each [`Comparison::score`] call appends one score column; the column
/// name is derived from the caller's label through the shared naming
/// rule, so repeated labels never collide. The builder owns its table —
/// nothing handed out earlier is ever mutated.
#[derive(Debug, Clone)]
pub struct Comparison {
    left: RecordSet,
    right: RecordSet,
    table: PairTable,
}

impl Comparison {
    /// Creates a comparison over `pairs` of `left` × `right` records.
    ///
    /// # Errors
    ///
    /// Returns [`LinkageError::RecordIndexOutOfBounds`] when a pair
    /// index points outside its record set.
    pub fn new(left: RecordSet, right: RecordSet, pairs: Vec<PairIndex>) -> Result<Self> {
        for pair in &pairs {
            if pair.left >= left.len() {
                return Err(LinkageError::RecordIndexOutOfBounds {
                    side: Side::Left,
                    index: pair.left,
                    len: left.len(),
                });
            }
            if pair.right >= right.len() {
                return Err(LinkageError::RecordIndexOutOfBounds {
                    side: Side::Right,
                    index: pair.right,
                    len: right.len(),
                });
            }
        }
        Ok(Self {
            left,
            right,
            table: PairTable::new(pairs),
        })
    }

    /// Scores every candidate pair by comparing `left_column` of the left
    /// record against `right_column` of the right record, appending the
    /// result as a new score column. Returns the column name actually
    /// used.
    ///
    /// A record without a cell in the named column scores `NaN` for its
    /// pairs, per the missing-value rule.
    ///
    /// # Errors
    ///
    /// Returns [`LinkageError::MissingColumn`] when a named column is not
    /// declared by its record set; comparator errors propagate.
    pub fn score<C>(
        &mut self,
        left_column: &str,
        right_column: &str,
        label: &str,
        comparator: C,
    ) -> Result<String>
    where
        C: Fn(&Value, &Value) -> Result<f64>,
    {
        if !self.left.has_column(left_column) {
            return Err(LinkageError::MissingColumn(left_column.to_string()));
        }
        if !self.right.has_column(right_column) {
            return Err(LinkageError::MissingColumn(right_column.to_string()));
        }

        let mut scores = Vec::with_capacity(self.table.len());
        for row in self.table.rows() {
            let left_record = self.left.record(row.index.left).ok_or(
                LinkageError::RecordIndexOutOfBounds {
                    side: Side::Left,
                    index: row.index.left,
                    len: self.left.len(),
                },
            )?;
            let right_record = self.right.record(row.index.right).ok_or(
                LinkageError::RecordIndexOutOfBounds {
                    side: Side::Right,
                    index: row.index.right,
                    len: self.right.len(),
                },
            )?;
            scores.push(comparator(
                left_record.cell(left_column),
                right_record.cell(right_column),
            )?);
        }

        let used: BTreeSet<String> = self.table.score_columns().iter().cloned().collect();
        let name = unused_name(label, &used);
        debug!(column = %name, pairs = scores.len(), "scored candidate pairs");
        self.table.push_column(name.clone(), scores)?;
        Ok(name)
    }

    pub fn table(&self) -> &PairTable {
        &self.table
    }

    pub fn left(&self) -> &RecordSet {
        &self.left
    }

    pub fn right(&self) -> &RecordSet {
        &self.right
    }

    /// Consumes the builder, yielding the scored table and both source
    /// record sets for fusion.
    pub fn into_parts(self) -> (PairTable, RecordSet, RecordSet) {
        (self.table, self.left, self.right)
    }
}

#[cfg(test)]
mod tests {
    use reclink_model::Record;

    use super::*;
    use crate::align::AlignWeights;
    use crate::comparator::{normed_fuzzy_align_comparator, normed_lcs_comparator};

    fn name_set(names: &[&str]) -> RecordSet {
        let mut set = RecordSet::new(vec!["name".to_string()]).expect("record set");
        for name in names {
            set.push_record(Record::from_iter([("name", Value::from(*name))]));
        }
        set
    }

    fn candidate_pairs(indices: &[(usize, usize)]) -> Vec<PairIndex> {
        indices.iter().map(|&(l, r)| PairIndex::new(l, r)).collect()
    }

    #[test]
    fn compare_rejects_length_mismatch() {
        let left = vec![Value::from("a")];
        let right = vec![Value::from("a"), Value::from("b")];
        let err = compare(&left, &right, normed_lcs_comparator())
            .expect_err("mismatched lengths");
        assert_eq!(err, LinkageError::LengthMismatch { left: 1, right: 2 });
    }

    #[test]
    fn compare_preserves_order_and_propagates_nan() {
        let left = vec![Value::from("Jon"), Value::Missing];
        let right = vec![Value::from("Jon"), Value::from("Jane")];
        let scores =
            compare(&left, &right, normed_lcs_comparator()).expect("comparison succeeds");
        assert_eq!(scores[0], 1.0);
        assert!(scores[1].is_nan());
    }

    #[test]
    fn out_of_range_pairs_are_rejected_up_front() {
        let err = Comparison::new(
            name_set(&["Jon Smith"]),
            name_set(&["John Smith"]),
            candidate_pairs(&[(1, 0)]),
        )
        .expect_err("left index past the end");
        assert_eq!(
            err,
            LinkageError::RecordIndexOutOfBounds {
                side: Side::Left,
                index: 1,
                len: 1,
            }
        );
    }

    #[test]
    fn scoring_appends_columns_without_label_collisions() {
        let mut comparison = Comparison::new(
            name_set(&["Jon Smith"]),
            name_set(&["John Smith", "Jane Doe"]),
            candidate_pairs(&[(0, 0), (0, 1)]),
        )
        .expect("valid pairs");

        let weights = AlignWeights::default();
        let first = comparison
            .score("name", "name", "name", normed_fuzzy_align_comparator(weights))
            .expect("first column");
        let second = comparison
            .score("name", "name", "name", normed_lcs_comparator())
            .expect("second column");

        assert_eq!(first, "name");
        assert_eq!(second, "name_2");
        assert_eq!(comparison.table().score_columns().len(), 2);

        let scores = comparison.table().column("name").expect("first scores");
        assert!(scores[0] > scores[1], "Jon/John should outscore Jon/Jane");
    }

    #[test]
    fn unknown_columns_error_before_any_scoring() {
        let mut comparison = Comparison::new(
            name_set(&["Jon Smith"]),
            name_set(&["John Smith"]),
            candidate_pairs(&[(0, 0)]),
        )
        .expect("valid pairs");
        let err = comparison
            .score("email", "name", "email", normed_lcs_comparator())
            .expect_err("left set has no email column");
        assert_eq!(err, LinkageError::MissingColumn("email".to_string()));
        assert!(comparison.table().score_columns().is_empty());
    }

    #[test]
    fn missing_cell_scores_nan_even_when_column_is_declared() {
        let mut left = RecordSet::new(vec!["name".to_string()]).expect("record set");
        left.push_record(Record::new());
        let mut comparison = Comparison::new(
            left,
            name_set(&["John Smith"]),
            candidate_pairs(&[(0, 0)]),
        )
        .expect("valid pairs");
        comparison
            .score("name", "name", "name", normed_lcs_comparator())
            .expect("score column");
        let scores = comparison.table().column("name").expect("scores");
        assert!(scores[0].is_nan());
    }
}
