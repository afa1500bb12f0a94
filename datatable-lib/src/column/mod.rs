//! Column model - descriptors, normalization and per-row value resolution.
//!
//! Callers describe columns with [`ColumnDef`]; [`normalize`] turns them into
//! [`Column`]s with stable ids, which is the form every pipeline stage works
//! with.
//!
//! # Example
//!
//! ```
//! use datatable_lib::column::{normalize, ColumnDef};
//! use datatable_lib::model::Record;
//!
//! let columns = normalize(vec![
//!     ColumnDef::<Record>::accessor("user.name", "Name"),
//!     ColumnDef::accessor("email", "Email")
//!         .cell(|value, _row| format!("mailto:{}", value)),
//!     ColumnDef::accessor("role", "Role").width(12),
//! ])
//! .unwrap();
//!
//! assert_eq!(columns[0].id(), "user.name");
//! ```

mod item;
mod normalize;

pub use item::{CellRenderer, ColumnDef, DEFAULT_MAX_WIDTH, DEFAULT_MIN_WIDTH, DEFAULT_WIDTH};
pub use normalize::{normalize, Column};
