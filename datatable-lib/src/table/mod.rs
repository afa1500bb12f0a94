//! Table engine - owns rows, columns and view state, and keeps the derived
//! pipeline output consistent with them.
//!
//! The [`DataTable`] provides:
//! - Free-text filtering over filterable columns
//! - Single-column stable sorting (header-click cycling)
//! - Pagination with index clamping
//! - Row selection by identifier that survives filter, sort and paging
//! - Column visibility and resizing
//! - Cursor navigation over the current page
//!
//! # Example
//!
//! ```
//! use datatable_lib::column::ColumnDef;
//! use datatable_lib::config::TableConfig;
//! use datatable_lib::table::DataTable;
//!
//! let rows = vec![
//!     serde_json::json!({ "id": 1, "name": "John Doe", "role": "Developer" }),
//!     serde_json::json!({ "id": 2, "name": "Jane Smith", "role": "Designer" }),
//!     serde_json::json!({ "id": 3, "name": "Bob Johnson", "role": "Manager" }),
//! ];
//! let columns = vec![
//!     ColumnDef::accessor("name", "Name"),
//!     ColumnDef::accessor("role", "Role"),
//! ];
//!
//! let mut table = DataTable::new(columns, TableConfig::default().with_page_size(2))
//!     .unwrap()
//!     .with_data(rows);
//!
//! table.set_filter_query("john");
//! table.toggle_all();
//!
//! let view = table.view();
//! assert_eq!(view.page_count, 1);
//! assert_eq!(view.selected_ids, vec!["1".to_string(), "3".to_string()]);
//! ```

mod events;
mod state;
mod view;

pub use events::{EventResult, TableKey};
pub use state::{DataTable, SelectionListener};
pub use view::{classify, Classifier, HeaderCell, RenderedRow, TableStatus, TableView};
