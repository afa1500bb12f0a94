//! Free-text filter stage.

use crate::column::Column;
use crate::model::TableRow;

/// Filter rows by a free-text query.
///
/// Returns the positions of matching rows in their original order. An empty
/// query keeps every row. Matching is a case-insensitive substring test
/// against the space-joined string values of all filterable columns, hidden
/// ones included.
pub fn filter<T: TableRow>(rows: &[T], columns: &[Column<T>], query: &str) -> Vec<usize> {
    if query.is_empty() {
        return (0..rows.len()).collect();
    }
    let needle = query.to_lowercase();
    rows.iter()
        .enumerate()
        .filter(|(_, row)| matches(*row, columns, &needle))
        .map(|(position, _)| position)
        .collect()
}

/// Check one row against an already lower-cased needle.
pub fn matches<T: TableRow>(row: &T, columns: &[Column<T>], needle: &str) -> bool {
    let haystack = columns
        .iter()
        .filter(|column| column.is_filterable())
        .map(|column| column.value(row).to_string())
        .collect::<Vec<_>>()
        .join(" ");
    haystack.to_lowercase().contains(needle)
}
