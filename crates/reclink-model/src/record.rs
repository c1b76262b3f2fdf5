//! Records and record sets.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{LinkageError, Result};
use crate::value::Value;

static MISSING: Value = Value::Missing;

/// One record: cells keyed by column name.
///
/// A cell that was never set reads as [`Value::Missing`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub cells: BTreeMap<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// The value stored under `column`, or the null sentinel when absent.
    pub fn cell(&self, column: &str) -> &Value {
        self.cells.get(column).unwrap_or(&MISSING)
    }

    /// Sets a cell, replacing any previous value.
    pub fn set(&mut self, column: impl Into<String>, value: Value) {
        self.cells.insert(column.into(), value);
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let mut record = Self::new();
        for (column, value) in iter {
            record.set(column, value);
        }
        record
    }
}

/// An ordered collection of records with a declared column order.
///
/// Column order is explicit because cells live in a `BTreeMap`; fusion
/// re-emits columns in this declared order, not in map order. The set is
/// never mutated by any linkage stage; every stage derives a fresh
/// structure from its inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordSet {
    columns: Vec<String>,
    records: Vec<Record>,
}

impl RecordSet {
    /// Creates an empty record set with the given column order.
    ///
    /// # Errors
    ///
    /// Returns [`LinkageError::InvalidArgument`] when a column name repeats.
    pub fn new(columns: Vec<String>) -> Result<Self> {
        let mut seen = std::collections::BTreeSet::new();
        for column in &columns {
            if !seen.insert(column.as_str()) {
                return Err(LinkageError::InvalidArgument(format!(
                    "duplicate column name '{column}' in record set"
                )));
            }
        }
        Ok(Self {
            columns,
            records: Vec::new(),
        })
    }

    pub fn push_record(&mut self, record: Record) {
        self.records.push(record);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// True when `name` is one of the declared columns.
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn record(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_cell_reads_as_missing() {
        let record = Record::from_iter([("name", Value::from("Jon Smith"))]);
        assert_eq!(record.cell("name").as_text(), Some("Jon Smith"));
        assert!(record.cell("email").is_missing());
    }

    #[test]
    fn duplicate_columns_rejected() {
        let err = RecordSet::new(vec!["name".to_string(), "name".to_string()])
            .expect_err("duplicate columns should be rejected");
        assert!(matches!(err, LinkageError::InvalidArgument(_)));
    }

    #[test]
    fn record_lookup_by_position() {
        let mut set = RecordSet::new(vec!["name".to_string()]).expect("build record set");
        set.push_record(Record::from_iter([("name", Value::from("Jane Doe"))]));

        assert_eq!(set.len(), 1);
        assert!(set.has_column("name"));
        assert!(!set.has_column("email"));
        let record = set.record(0).expect("first record");
        assert_eq!(record.cell("name").as_text(), Some("Jane Doe"));
        assert!(set.record(1).is_none());
    }
}
