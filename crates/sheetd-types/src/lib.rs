//! Foundation types for sheetd.
//!
//! This crate provides the dataset aggregate shared by every other sheetd
//! crate, together with the pure mutation operations the HTTP layer applies:
//!
//! - [`Dataset`] — ordered column names plus ordered row records
//! - [`Record`] — one row, an ordered string-keyed map of column name to value
//!
//! The operations here never touch I/O; persistence lives in `sheetd-store`
//! and request handling in `sheetd-server`.

pub mod dataset;

pub use dataset::{Dataset, Record};
