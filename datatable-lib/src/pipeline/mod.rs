//! The filter → sort → paginate pipeline.
//!
//! Each stage is a pure function over row positions, so stages compose
//! without cloning rows:
//!
//! ```
//! use datatable_lib::column::{normalize, ColumnDef};
//! use datatable_lib::pipeline::{filter, paginate, sort, SortState};
//!
//! let rows = vec![
//!     serde_json::json!({ "id": 1, "name": "John" }),
//!     serde_json::json!({ "id": 2, "name": "jane" }),
//!     serde_json::json!({ "id": 3, "name": "Bob" }),
//! ];
//! let columns = normalize(vec![ColumnDef::accessor("name", "Name")]).unwrap();
//!
//! let mut positions = filter(&rows, &columns, "j");
//! sort(&rows, &mut positions, &columns, Some(&SortState::asc("name")));
//! let page = paginate(&positions, 0, 10);
//!
//! assert_eq!(page.items, &[1, 0]);
//! ```

mod filter;
mod page;
mod sort;

pub use filter::{filter, matches};
pub use page::{page_count, paginate, PageSlice};
pub use sort::{compare_values, sort, Direction, SortState};
