#![deny(unsafe_code)]

//! Ranking, mapping refinement, and fusion for scored candidate pairs.
//!
//! The intended flow is rank first (best matches to the top), then
//! refine under uniqueness constraints (first row wins per index), then
//! fuse the survivors with their source records.

pub mod fuse;
pub mod rank;
pub mod refine;

pub use fuse::{FuseOptions, fuse};
pub use rank::{RankMethod, SortDirection, rank, rank_pairs};
pub use refine::{is_left_unique, is_right_unique, refine};
