//! Ranking of scored candidate pairs.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use reclink_model::{LinkageError, PairTable, Result, unused_name};

/// How the sort key is derived from the named score columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RankMethod {
    /// Sort by a single column; `by` must name exactly one.
    Single,
    /// Sort by the row-wise sum of the named columns.
    Sum,
    /// Sort by the row-wise mean of the named columns.
    Avg,
}

/// Sort direction for [`rank`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Reorders a table by the chosen key.
///
/// The sort is stable, so ties keep their original relative order and
/// re-ranking by the same key is a no-op. `NaN` keys sort after every
/// comparable key in either direction — incomparable pairs never outrank
/// scored ones. For `Sum`/`Avg` the aggregate lives in a temporary
/// column named through the shared naming rule and is dropped from the
/// output.
///
/// # Errors
///
/// Returns [`LinkageError::InvalidArgument`] when `by` is empty or has
/// the wrong arity for `method`, and [`LinkageError::MissingColumn`]
/// when a named column does not exist.
pub fn rank(
    table: &PairTable,
    by: &[String],
    method: RankMethod,
    direction: SortDirection,
) -> Result<PairTable> {
    if by.is_empty() {
        return Err(LinkageError::InvalidArgument(
            "'by' must name at least one score column".to_string(),
        ));
    }

    match method {
        RankMethod::Single => {
            if by.len() != 1 {
                return Err(LinkageError::InvalidArgument(format!(
                    "method 'single' takes exactly one column, got {}",
                    by.len()
                )));
            }
            let keys = table.column(&by[0])?;
            sorted_by_keys(table, &keys, direction)
        }
        RankMethod::Sum | RankMethod::Avg => {
            let mut keys = vec![0.0_f64; table.len()];
            for column in by {
                for (key, score) in keys.iter_mut().zip(table.column(column)?) {
                    *key += score;
                }
            }
            if method == RankMethod::Avg {
                let count = by.len() as f64;
                for key in &mut keys {
                    *key /= count;
                }
            }

            let used: BTreeSet<String> = table.score_columns().iter().cloned().collect();
            let base = if method == RankMethod::Sum { "sum" } else { "avg" };
            let temp = unused_name(base, &used);
            debug!(column = %temp, rows = table.len(), "ranking by temporary aggregate");

            let working = table.clone().with_column(temp.clone(), keys)?;
            let ordered_keys = working.column(&temp)?;
            let mut ranked = sorted_by_keys(&working, &ordered_keys, direction)?;
            ranked.drop_column(&temp)?;
            Ok(ranked)
        }
    }
}

/// [`rank`] with the descending direction ranking workflows almost
/// always want (best matches first).
pub fn rank_pairs(table: &PairTable, by: &[String], method: RankMethod) -> Result<PairTable> {
    rank(table, by, method, SortDirection::Descending)
}

fn sorted_by_keys(table: &PairTable, keys: &[f64], direction: SortDirection) -> Result<PairTable> {
    let mut order: Vec<usize> = (0..table.len()).collect();
    order.sort_by(|&a, &b| compare_keys(keys[a], keys[b], direction));
    let rows = order.iter().map(|&i| table.rows()[i].clone()).collect();
    PairTable::from_parts(table.score_columns().to_vec(), rows)
}

fn compare_keys(a: f64, b: f64, direction: SortDirection) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => {
            let ordering = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        }
    }
}
