//! Fusion of retained pairs with their source records.

use std::collections::BTreeSet;

use tracing::debug;

use reclink_model::{
    LinkageError, PairTable, Record, RecordSet, Result, Side, Value, unused_name,
};

/// Column-suffix configuration for [`fuse`].
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FuseOptions {
    /// Appended to every left-record column name.
    pub left_suffix: String,
    /// Appended to every right-record column name.
    pub right_suffix: String,
}

impl Default for FuseOptions {
    fn default() -> Self {
        Self {
            left_suffix: "_l".to_string(),
            right_suffix: "_r".to_string(),
        }
    }
}

/// Joins every pair row back to its left and right source records,
/// producing one fused record per row.
///
/// Left and right columns are renamed with their suffix and
/// disambiguated against the score columns and all earlier-renamed
/// columns through the shared naming rule. Output column order is score
/// columns, then left-derived, then right-derived. Score cells become
/// [`Value::Number`]; `NaN` scores survive as numbers.
///
/// # Errors
///
/// Returns [`LinkageError::RecordIndexOutOfBounds`] when a pair index
/// points outside its record set.
pub fn fuse(
    table: &PairTable,
    left: &RecordSet,
    right: &RecordSet,
    options: &FuseOptions,
) -> Result<RecordSet> {
    let mut used: BTreeSet<String> = table.score_columns().iter().cloned().collect();
    let left_names = rename_columns(left.columns(), &options.left_suffix, &mut used);
    let right_names = rename_columns(right.columns(), &options.right_suffix, &mut used);

    let mut columns: Vec<String> = table.score_columns().to_vec();
    columns.extend(left_names.iter().cloned());
    columns.extend(right_names.iter().cloned());

    // The naming rule checked every name against all earlier ones, so a
    // collision here is a bug in the rule itself.
    let mut fused = RecordSet::new(columns).map_err(|_| {
        LinkageError::Internal("fused column names collide after renaming".to_string())
    })?;

    for row in table.rows() {
        let left_record =
            left.record(row.index.left)
                .ok_or(LinkageError::RecordIndexOutOfBounds {
                    side: Side::Left,
                    index: row.index.left,
                    len: left.len(),
                })?;
        let right_record =
            right
                .record(row.index.right)
                .ok_or(LinkageError::RecordIndexOutOfBounds {
                    side: Side::Right,
                    index: row.index.right,
                    len: right.len(),
                })?;

        let mut record = Record::new();
        for (name, score) in table.score_columns().iter().zip(&row.scores) {
            record.set(name.clone(), Value::Number(*score));
        }
        for (original, renamed) in left.columns().iter().zip(&left_names) {
            record.set(renamed.clone(), left_record.cell(original).clone());
        }
        for (original, renamed) in right.columns().iter().zip(&right_names) {
            record.set(renamed.clone(), right_record.cell(original).clone());
        }
        fused.push_record(record);
    }

    debug!(
        rows = fused.len(),
        columns = fused.columns().len(),
        "fused matched pairs with source records"
    );
    Ok(fused)
}

fn rename_columns(columns: &[String], suffix: &str, used: &mut BTreeSet<String>) -> Vec<String> {
    columns
        .iter()
        .map(|column| {
            let name = unused_name(&format!("{column}{suffix}"), used);
            used.insert(name.clone());
            name
        })
        .collect()
}
