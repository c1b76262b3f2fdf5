//! The candidate-pair table: pair indices plus named score columns.

use serde::{Deserialize, Serialize};

use crate::error::{LinkageError, Result};

/// Positional indices of one candidate pair into the left and right
/// record sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PairIndex {
    pub left: usize,
    pub right: usize,
}

impl PairIndex {
    pub fn new(left: usize, right: usize) -> Self {
        Self { left, right }
    }
}

/// One row of a [`PairTable`]: a pair index plus its score cells, aligned
/// positionally to the table's score columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairRow {
    pub index: PairIndex,
    pub scores: Vec<f64>,
}

impl PairRow {
    pub fn new(index: PairIndex) -> Self {
        Self {
            index,
            scores: Vec::new(),
        }
    }
}

/// An ordered table of candidate pairs with zero or more score columns.
///
/// Score column names are unique and keep insertion order. Scores are
/// `f64`; `NaN` marks an incomparable pair (one side missing) and flows
/// through ranking, refinement, and fusion untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PairTable {
    score_columns: Vec<String>,
    rows: Vec<PairRow>,
}

impl PairTable {
    /// Builds a table with no score columns from candidate pair indices.
    pub fn new(pairs: impl IntoIterator<Item = PairIndex>) -> Self {
        Self {
            score_columns: Vec::new(),
            rows: pairs.into_iter().map(PairRow::new).collect(),
        }
    }

    /// Rebuilds a table from columns and rows.
    ///
    /// # Errors
    ///
    /// Returns [`LinkageError::InvalidArgument`] on a duplicate column
    /// name and [`LinkageError::LengthMismatch`] when a row's score count
    /// differs from the column count.
    pub fn from_parts(score_columns: Vec<String>, rows: Vec<PairRow>) -> Result<Self> {
        let mut seen = std::collections::BTreeSet::new();
        for column in &score_columns {
            if !seen.insert(column.as_str()) {
                return Err(LinkageError::InvalidArgument(format!(
                    "duplicate score column '{column}'"
                )));
            }
        }
        for row in &rows {
            if row.scores.len() != score_columns.len() {
                return Err(LinkageError::LengthMismatch {
                    left: score_columns.len(),
                    right: row.scores.len(),
                });
            }
        }
        Ok(Self {
            score_columns,
            rows,
        })
    }

    pub fn score_columns(&self) -> &[String] {
        &self.score_columns
    }

    pub fn rows(&self) -> &[PairRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a score column, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.score_columns.iter().position(|c| c == name)
    }

    /// All values of a score column, in row order.
    ///
    /// # Errors
    ///
    /// Returns [`LinkageError::MissingColumn`] when the column does not
    /// exist.
    pub fn column(&self, name: &str) -> Result<Vec<f64>> {
        let idx = self
            .column_index(name)
            .ok_or_else(|| LinkageError::MissingColumn(name.to_string()))?;
        Ok(self.rows.iter().map(|row| row.scores[idx]).collect())
    }

    /// Appends a score column.
    ///
    /// # Errors
    ///
    /// Returns [`LinkageError::InvalidArgument`] when the name is taken
    /// and [`LinkageError::LengthMismatch`] when `scores` does not have
    /// one value per row.
    pub fn push_column(&mut self, name: impl Into<String>, scores: Vec<f64>) -> Result<()> {
        let name = name.into();
        if self.column_index(&name).is_some() {
            return Err(LinkageError::InvalidArgument(format!(
                "score column '{name}' already exists"
            )));
        }
        if scores.len() != self.rows.len() {
            return Err(LinkageError::LengthMismatch {
                left: self.rows.len(),
                right: scores.len(),
            });
        }
        self.score_columns.push(name);
        for (row, score) in self.rows.iter_mut().zip(scores) {
            row.scores.push(score);
        }
        Ok(())
    }

    /// Consuming variant of [`PairTable::push_column`].
    pub fn with_column(mut self, name: impl Into<String>, scores: Vec<f64>) -> Result<Self> {
        self.push_column(name, scores)?;
        Ok(self)
    }

    /// Returns a copy keeping only the rows the predicate accepts, in
    /// their original order, with the score columns unchanged.
    pub fn filter_rows(&self, mut keep: impl FnMut(&PairRow) -> bool) -> Self {
        Self {
            score_columns: self.score_columns.clone(),
            rows: self.rows.iter().filter(|row| keep(row)).cloned().collect(),
        }
    }

    /// Removes a score column and its cells from every row.
    ///
    /// # Errors
    ///
    /// Returns [`LinkageError::MissingColumn`] when the column does not
    /// exist.
    pub fn drop_column(&mut self, name: &str) -> Result<()> {
        let idx = self
            .column_index(name)
            .ok_or_else(|| LinkageError::MissingColumn(name.to_string()))?;
        self.score_columns.remove(idx);
        for row in &mut self.rows {
            row.scores.remove(idx);
        }
        Ok(())
    }
}
