#![deny(unsafe_code)]

//! Data model for the record-linkage toolkit.
//!
//! Holds the value/record/table shapes shared by the comparison engine
//! and the fusion pipeline, the toolkit error type, and the single
//! collision-avoiding naming rule used wherever a synthetic column name
//! is generated.

pub mod error;
pub mod naming;
pub mod record;
pub mod table;
pub mod value;

pub use error::{LinkageError, Result, Side};
pub use naming::{unused_name, unused_name_with_sep};
pub use record::{Record, RecordSet};
pub use table::{PairIndex, PairRow, PairTable};
pub use value::Value;
