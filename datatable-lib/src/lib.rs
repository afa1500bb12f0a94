//! Client-side data table engine
//!
//! Filtering, sorting, pagination, row selection, column visibility and
//! column resizing over an in-memory dataset, with a read model for whatever
//! renders the table.

pub mod column;
pub mod config;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod selection;
pub mod table;

pub use column::ColumnDef;
pub use config::{TableConfig, TableVariant};
pub use error::{Result, TableError};
pub use model::{Record, TableRow, Value};
pub use pipeline::{Direction, SortState};
pub use selection::SelectionMode;
pub use table::{DataTable, TableView};
