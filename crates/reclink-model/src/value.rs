//! The cell value model shared by record sets and fused output.
//!
//! Dispatch on value shape happens here, once, instead of scattering
//! runtime type checks through the comparison algorithms. `Missing` is
//! the designated null sentinel; comparators translate it to a `NaN`
//! score rather than an error.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single cell value in a record or fused row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum Value {
    /// A string scalar.
    Text(String),
    /// A numeric scalar. Fused score cells land here, `NaN` included.
    Number(f64),
    /// An ordered collection, compared with set semantics.
    List(Vec<Value>),
    /// A nested mapping from names to values.
    Map(BTreeMap<String, Value>),
    /// The null sentinel.
    Missing,
}

impl Value {
    /// True for the null sentinel.
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// The string contents, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The number, if this is a numeric value.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The items, if this is a list value.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Variant name for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Number(_) => "number",
            Self::List(_) => "list",
            Self::Map(_) => "map",
            Self::Missing => "missing",
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}
