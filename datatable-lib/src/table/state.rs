//! Table engine state.

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::column::{normalize, Column, ColumnDef};
use crate::config::TableConfig;
use crate::error::Result;
use crate::model::{resolve_path, TableRow, Value};
use crate::pipeline::{filter, paginate, sort, Direction, SortState};
use crate::selection::{Selection, SelectionMode};

use super::view::{classify, Classifier};

/// Callback invoked with the full, sorted list of selected ids after every
/// selection change.
pub type SelectionListener = Box<dyn FnMut(&[String]) + Send>;

/// A client-side data table.
///
/// `DataTable<T>` owns a snapshot of rows plus all view state (filter query,
/// sort, page, selection, column visibility and widths). Every mutator applies
/// its change synchronously and recomputes the filter → sort → paginate
/// pipeline when one of its inputs changed, so reads always see consistent
/// derived state.
pub struct DataTable<T> {
    pub(super) config: TableConfig,
    pub(super) columns: Vec<Column<T>>,
    pub(super) rows: Vec<T>,
    /// Identifier of each row, parallel to `rows`.
    pub(super) ids: Vec<String>,
    /// First position of each identifier.
    pub(super) id_index: HashMap<String, usize>,
    pub(super) filter_query: String,
    pub(super) sort: Option<SortState>,
    pub(super) page_index: usize,
    pub(super) page_size: usize,
    pub(super) selection: Selection,
    /// Cursor position within the current page.
    pub(super) cursor: Option<usize>,
    pub(super) loading: bool,
    pub(super) error: Option<String>,
    /// Row positions after filter and sort.
    pub(super) processed: Vec<usize>,
    pub(super) page_count: usize,
    pub(super) dirty: bool,
    pub(super) classifier: Classifier,
    pub(super) listener: Option<SelectionListener>,
}

impl<T: TableRow> DataTable<T> {
    /// Create an empty table from column definitions.
    ///
    /// Fails if the configuration is invalid or the columns do not normalize
    /// (duplicate or missing ids, inverted width bounds).
    pub fn new(columns: Vec<ColumnDef<T>>, config: TableConfig) -> Result<Self> {
        config.validate()?;
        let columns = normalize(columns)?;
        let page_size = config.page_size;
        Ok(Self {
            config,
            columns,
            rows: Vec::new(),
            ids: Vec::new(),
            id_index: HashMap::new(),
            filter_query: String::new(),
            sort: None,
            page_index: 0,
            page_size,
            selection: Selection::new(),
            cursor: None,
            loading: false,
            error: None,
            processed: Vec::new(),
            page_count: 1,
            dirty: true,
            classifier: classify,
            listener: None,
        })
    }

    /// Set the initial rows (builder pattern).
    pub fn with_data(mut self, rows: Vec<T>) -> Self {
        self.set_data(rows);
        self
    }

    /// Replace the class-name composition function used by the render model.
    pub fn with_classifier(mut self, classifier: Classifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// Register a selection-change listener.
    pub fn on_selection_change(&mut self, listener: impl FnMut(&[String]) + Send + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Get the configuration.
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    // -------------------------------------------------------------------------
    // Row access
    // -------------------------------------------------------------------------

    /// Replace the dataset.
    ///
    /// Recomputes the pipeline and prunes selected ids that no longer exist.
    pub fn set_data(&mut self, rows: Vec<T>) {
        self.ids = rows
            .iter()
            .enumerate()
            .map(|(position, row)| self.row_id(row, position))
            .collect();

        self.id_index.clear();
        for (position, id) in self.ids.iter().enumerate() {
            if self.id_index.contains_key(id) {
                log::warn!("Duplicate row id '{}' at position {}", id, position);
            } else {
                self.id_index.insert(id.clone(), position);
            }
        }

        self.rows = rows;
        self.recompute();
    }

    /// Derive a row's identifier from the configured key path.
    ///
    /// Rows without a key fall back to their position.
    fn row_id(&self, row: &T, position: usize) -> String {
        match resolve_path(row, &self.config.row_key) {
            Value::Null => position.to_string(),
            value => value.to_string(),
        }
    }

    /// Get all rows in dataset order.
    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    /// Get the number of rows in the dataset.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Find a row by id.
    pub fn find_row(&self, id: &str) -> Option<&T> {
        self.id_index.get(id).map(|&position| &self.rows[position])
    }

    /// Number of rows left after filtering.
    pub fn filtered_count(&self) -> usize {
        self.processed.len()
    }

    /// Ids of every row that passed the filter, in sorted order.
    ///
    /// This is the visible set that select-all operates on.
    pub fn visible_ids(&self) -> Vec<String> {
        self.processed
            .iter()
            .map(|&position| self.ids[position].clone())
            .collect()
    }

    /// Positions of the rows on the current page.
    pub(super) fn page_positions(&self) -> &[usize] {
        paginate(&self.processed, self.page_index, self.effective_page_size()).items
    }

    /// Rows on the current page.
    pub fn page_rows(&self) -> Vec<&T> {
        self.page_positions()
            .iter()
            .map(|&position| &self.rows[position])
            .collect()
    }

    /// Ids of the rows on the current page.
    pub fn page_ids(&self) -> Vec<String> {
        self.page_positions()
            .iter()
            .map(|&position| self.ids[position].clone())
            .collect()
    }

    // -------------------------------------------------------------------------
    // Columns
    // -------------------------------------------------------------------------

    /// Replace the column definitions.
    ///
    /// On error the previous columns stay in place. A sort on a column that no
    /// longer exists is dropped.
    pub fn set_columns(&mut self, columns: Vec<ColumnDef<T>>) -> Result<()> {
        self.columns = normalize(columns)?;
        if let Some(state) = &self.sort
            && !self.columns.iter().any(|c| c.id() == state.column_id)
        {
            self.sort = None;
        }
        self.recompute();
        Ok(())
    }

    /// Get all columns, hidden ones included.
    pub fn columns(&self) -> &[Column<T>] {
        &self.columns
    }

    /// Get the columns that are currently shown.
    pub fn visible_columns(&self) -> impl Iterator<Item = &Column<T>> {
        self.columns.iter().filter(|c| c.is_visible())
    }

    /// Find a column by id.
    pub fn column(&self, id: &str) -> Option<&Column<T>> {
        self.columns.iter().find(|c| c.id() == id)
    }

    fn column_mut(&mut self, id: &str) -> Option<&mut Column<T>> {
        self.columns.iter_mut().find(|c| c.id() == id)
    }

    /// Show or hide a column. Returns true if visibility changed.
    pub fn set_column_visibility(&mut self, id: &str, visible: bool) -> bool {
        let changed = self
            .column_mut(id)
            .is_some_and(|column| column.set_visible(visible));
        if changed {
            self.dirty = true;
        }
        changed
    }

    /// Flip a column's visibility. Returns true if the column exists.
    pub fn toggle_column_visibility(&mut self, id: &str) -> bool {
        match self.column(id).map(|c| c.is_visible()) {
            Some(visible) => self.set_column_visibility(id, !visible),
            None => false,
        }
    }

    /// Resize a column within its bounds. Returns true if the width changed.
    ///
    /// Unknown and non-resizable columns are left alone.
    pub fn resize_column(&mut self, id: &str, width: u16) -> bool {
        let changed = self
            .column_mut(id)
            .is_some_and(|column| column.resize(width));
        if changed {
            self.dirty = true;
        }
        changed
    }

    /// Restore every column to its initial width.
    pub fn reset_column_sizes(&mut self) {
        let mut changed = false;
        for column in &mut self.columns {
            changed |= column.reset_width();
        }
        if changed {
            self.dirty = true;
        }
    }

    /// Total width of the visible columns.
    pub fn total_width(&self) -> u16 {
        self.visible_columns().map(|c| c.width()).sum()
    }

    // -------------------------------------------------------------------------
    // Filtering
    // -------------------------------------------------------------------------

    /// Get the current filter query.
    pub fn filter_query(&self) -> &str {
        &self.filter_query
    }

    /// Set the free-text filter query.
    ///
    /// The page index is kept and clamped if the result set shrank.
    pub fn set_filter_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if query != self.filter_query {
            self.filter_query = query;
            self.recompute();
        }
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    /// Get current sort state.
    pub fn sort(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    /// Set or clear the sort.
    ///
    /// Ignored when sorting is disabled or the column is unknown or not
    /// sortable. Returns true if the sort was applied.
    pub fn set_sort(&mut self, sort: Option<SortState>) -> bool {
        if let Some(state) = &sort
            && !self.can_sort(&state.column_id)
        {
            return false;
        }
        if sort != self.sort {
            self.sort = sort;
            self.recompute();
        }
        true
    }

    /// Cycle the sort for a column: unsorted → ascending → descending →
    /// unsorted. Switching to a different column starts at ascending.
    ///
    /// Returns the new sort state, or `None` once sorting is cleared or when
    /// the column cannot be sorted.
    pub fn toggle_sort(&mut self, column_id: &str) -> Option<SortState> {
        if !self.can_sort(column_id) {
            return None;
        }
        let next = match &self.sort {
            Some(state) if state.column_id == column_id => match state.direction {
                Direction::Asc => Some(SortState::desc(column_id)),
                Direction::Desc => None,
            },
            _ => Some(SortState::asc(column_id)),
        };
        self.sort = next.clone();
        self.recompute();
        next
    }

    /// Clear sort state.
    pub fn clear_sort(&mut self) {
        if self.sort.take().is_some() {
            self.recompute();
        }
    }

    fn can_sort(&self, column_id: &str) -> bool {
        self.config.enable_sorting && self.column(column_id).is_some_and(|c| c.is_sortable())
    }

    // -------------------------------------------------------------------------
    // Pagination
    // -------------------------------------------------------------------------

    /// Get the current (clamped) page index.
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// Get the page size.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Get the number of pages, never less than 1.
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Page size actually applied: everything on one page when pagination is
    /// disabled.
    pub(super) fn effective_page_size(&self) -> usize {
        if self.config.enable_pagination {
            self.page_size
        } else {
            self.processed.len().max(1)
        }
    }

    /// Go to a page. Out-of-range indices are clamped to the last page.
    pub fn set_page_index(&mut self, index: usize) {
        if index != self.page_index {
            self.page_index = index;
            self.recompute();
        }
    }

    /// Change the page size. Zero falls back to the configured default.
    pub fn set_page_size(&mut self, size: usize) {
        let size = if size == 0 { self.config.page_size } else { size };
        if size != self.page_size {
            self.page_size = size;
            self.recompute();
        }
    }

    /// Check if there is a page after the current one.
    pub fn can_next_page(&self) -> bool {
        self.page_index + 1 < self.page_count
    }

    /// Check if there is a page before the current one.
    pub fn can_previous_page(&self) -> bool {
        self.page_index > 0
    }

    /// Advance one page. Returns true if the page changed.
    pub fn next_page(&mut self) -> bool {
        if !self.can_next_page() {
            return false;
        }
        self.set_page_index(self.page_index + 1);
        true
    }

    /// Go back one page. Returns true if the page changed.
    pub fn previous_page(&mut self) -> bool {
        if !self.can_previous_page() {
            return false;
        }
        self.set_page_index(self.page_index - 1);
        true
    }

    /// Jump to the first page.
    pub fn first_page(&mut self) {
        self.set_page_index(0);
    }

    /// Jump to the last page.
    pub fn last_page(&mut self) {
        self.set_page_index(self.page_count - 1);
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Get the selection mode.
    pub fn selection_mode(&self) -> SelectionMode {
        self.config.selection_mode
    }

    /// Get all selected IDs (sorted).
    pub fn selected_ids(&self) -> Vec<String> {
        self.selection.selected()
    }

    /// Get all selected rows in dataset order.
    pub fn selected_rows(&self) -> Vec<&T> {
        self.rows
            .iter()
            .zip(&self.ids)
            .filter(|(_, id)| self.selection.is_selected(id))
            .map(|(row, _)| row)
            .collect()
    }

    /// Check if a row is selected by ID.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.is_selected(id)
    }

    /// Toggle selection of a row by ID.
    ///
    /// In single mode selecting a row replaces the previous selection. Ids
    /// that are not in the dataset are ignored. Returns true if the selection
    /// changed.
    pub fn toggle_row(&mut self, id: &str) -> bool {
        if !self.id_index.contains_key(id) {
            return false;
        }
        match self.config.selection_mode {
            SelectionMode::None => return false,
            SelectionMode::Single if !self.selection.is_selected(id) => {
                self.selection.select(id);
            }
            SelectionMode::Single | SelectionMode::Multiple => {
                self.selection.toggle(id);
            }
        }
        self.selection_changed();
        true
    }

    /// Select-all over the visible set (every row that passed the filter, on
    /// all pages).
    ///
    /// Deselects the visible rows if all of them are selected, selects them
    /// otherwise. Only available in multiple-selection mode. Returns true if
    /// the selection changed.
    pub fn toggle_all(&mut self) -> bool {
        let visible = self.visible_ids();
        self.toggle_ids(&visible)
    }

    /// Like [`toggle_all`](Self::toggle_all), limited to the current page.
    pub fn toggle_page(&mut self) -> bool {
        let page = self.page_ids();
        self.toggle_ids(&page)
    }

    fn toggle_ids(&mut self, ids: &[String]) -> bool {
        if self.config.selection_mode != SelectionMode::Multiple {
            return false;
        }
        let (added, removed) = self.selection.toggle_all(ids);
        if added.is_empty() && removed.is_empty() {
            return false;
        }
        self.selection_changed();
        true
    }

    /// Check if every visible row is selected.
    pub fn all_selected(&self) -> bool {
        self.selection.all_selected(&self.visible_ids())
    }

    /// Check if some, but not all, visible rows are selected.
    pub fn some_selected(&self) -> bool {
        self.selection.some_selected(&self.visible_ids())
    }

    /// Clear the selection. Returns the ids that were deselected.
    pub fn reset_selection(&mut self) -> Vec<String> {
        let removed = self.selection.clear();
        if !removed.is_empty() {
            self.selection_changed();
        }
        removed
    }

    fn selection_changed(&mut self) {
        self.dirty = true;
        if let Some(listener) = self.listener.as_mut() {
            let selected = self.selection.selected();
            listener(&selected);
        }
    }

    // -------------------------------------------------------------------------
    // Status
    // -------------------------------------------------------------------------

    /// Mark the table as loading (data still being fetched).
    pub fn set_loading(&mut self, loading: bool) {
        if loading != self.loading {
            self.loading = loading;
            self.dirty = true;
        }
    }

    /// Set or clear a load error message.
    pub fn set_error(&mut self, error: Option<String>) {
        if error != self.error {
            self.error = error;
            self.dirty = true;
        }
    }

    // -------------------------------------------------------------------------
    // Pipeline
    // -------------------------------------------------------------------------

    /// Recompute filter → sort → paginate, then clamp the page index and
    /// cursor and prune stale selection.
    pub(super) fn recompute(&mut self) {
        let query = if self.config.enable_filtering {
            self.filter_query.as_str()
        } else {
            ""
        };
        let sort_state = if self.config.enable_sorting {
            self.sort.as_ref()
        } else {
            None
        };

        let mut positions = filter(&self.rows, &self.columns, query);
        sort(&self.rows, &mut positions, &self.columns, sort_state);
        self.processed = positions;

        let page = paginate(&self.processed, self.page_index, self.effective_page_size());
        let page_len = page.items.len();
        self.page_count = page.page_count;
        self.page_index = page.clamped_index;

        if let Some(cursor) = self.cursor
            && cursor >= page_len
        {
            self.cursor = page_len.checked_sub(1);
        }

        self.prune_selection();
        self.dirty = true;

        log::debug!(
            "Recomputed table: {} rows, {} after filter, page {}/{}",
            self.rows.len(),
            self.processed.len(),
            self.page_index + 1,
            self.page_count
        );
    }

    /// Drop selected ids that are no longer in the dataset.
    fn prune_selection(&mut self) {
        if self.selection.is_empty() {
            return;
        }
        let present: HashSet<&str> = self.ids.iter().map(String::as_str).collect();
        let removed = self.selection.retain(|id| present.contains(id));
        if !removed.is_empty() {
            log::debug!("Pruned {} stale selected ids", removed.len());
            self.selection_changed();
        }
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the read model changed since the last [`clear_dirty`](Self::clear_dirty).
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }
}

impl<T> fmt::Debug for DataTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataTable")
            .field("columns", &self.columns)
            .field("rows", &self.rows.len())
            .field("filter_query", &self.filter_query)
            .field("sort", &self.sort)
            .field("page_index", &self.page_index)
            .field("page_size", &self.page_size)
            .field("page_count", &self.page_count)
            .field("selection", &self.selection)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;
    use std::sync::{Arc, Mutex};

    fn table() -> DataTable<Record> {
        let rows = vec![
            Record::new().set("id", 1i64).set("name", "John Doe"),
            Record::new().set("id", 2i64).set("name", "Jane Smith"),
            Record::new().set("id", 3i64).set("name", "Bob Johnson"),
        ];
        DataTable::new(
            vec![ColumnDef::accessor("name", "Name")],
            TableConfig::default().with_page_size(2),
        )
        .unwrap()
        .with_data(rows)
    }

    #[test]
    fn test_row_ids_from_key() {
        let table = table();
        assert_eq!(table.visible_ids(), vec!["1", "2", "3"]);
        assert!(table.find_row("2").is_some());
        assert!(table.find_row("9").is_none());
    }

    #[test]
    fn test_row_id_falls_back_to_position() {
        let table = DataTable::new(
            vec![ColumnDef::<Record>::accessor("name", "Name")],
            TableConfig::default(),
        )
        .unwrap()
        .with_data(vec![Record::new().set("name", "a"), Record::new().set("name", "b")]);
        assert_eq!(table.visible_ids(), vec!["0", "1"]);
    }

    #[test]
    fn test_toggle_sort_cycles() {
        let mut table = table();
        assert_eq!(table.toggle_sort("name"), Some(SortState::asc("name")));
        assert_eq!(table.toggle_sort("name"), Some(SortState::desc("name")));
        assert_eq!(table.toggle_sort("name"), None);
        assert!(table.sort().is_none());
        assert_eq!(table.toggle_sort("missing"), None);
    }

    #[test]
    fn test_sort_disabled() {
        let mut table = DataTable::new(
            vec![ColumnDef::<Record>::accessor("name", "Name")],
            TableConfig::default().with_sorting(false),
        )
        .unwrap();
        assert!(!table.set_sort(Some(SortState::asc("name"))));
        assert_eq!(table.toggle_sort("name"), None);
    }

    #[test]
    fn test_unsortable_column_rejected() {
        let mut table = DataTable::new(
            vec![ColumnDef::<Record>::accessor("name", "Name").sortable(false)],
            TableConfig::default(),
        )
        .unwrap();
        assert!(!table.set_sort(Some(SortState::asc("name"))));
        assert!(table.sort().is_none());
    }

    #[test]
    fn test_page_size_zero_uses_default() {
        let mut table = table();
        table.set_page_size(0);
        assert_eq!(table.page_size(), 2);
        table.set_page_size(1);
        assert_eq!(table.page_count(), 3);
    }

    #[test]
    fn test_pagination_disabled_single_page() {
        let table = DataTable::new(
            vec![ColumnDef::<Record>::accessor("name", "Name")],
            TableConfig::default().with_page_size(1).with_pagination(false),
        )
        .unwrap()
        .with_data(table().rows().to_vec());
        assert_eq!(table.page_count(), 1);
        assert_eq!(table.page_rows().len(), 3);
    }

    #[test]
    fn test_filtering_disabled_ignores_query() {
        let mut table = DataTable::new(
            vec![ColumnDef::<Record>::accessor("name", "Name")],
            TableConfig::default().with_filtering(false),
        )
        .unwrap()
        .with_data(table().rows().to_vec());
        table.set_filter_query("jane");
        assert_eq!(table.filtered_count(), 3);
        assert_eq!(table.filter_query(), "jane");
    }

    #[test]
    fn test_next_previous_page() {
        let mut table = table();
        assert!(!table.can_previous_page());
        assert!(table.next_page());
        assert_eq!(table.page_index(), 1);
        assert!(!table.next_page());
        assert!(table.previous_page());
        table.last_page();
        assert_eq!(table.page_index(), 1);
        table.first_page();
        assert_eq!(table.page_index(), 0);
    }

    #[test]
    fn test_single_mode_replaces() {
        let mut table = DataTable::new(
            vec![ColumnDef::<Record>::accessor("name", "Name")],
            TableConfig::default().with_selection_mode(SelectionMode::Single),
        )
        .unwrap()
        .with_data(table().rows().to_vec());
        assert!(table.toggle_row("1"));
        assert!(table.toggle_row("2"));
        assert_eq!(table.selected_ids(), vec!["2"]);
        assert!(!table.toggle_all());
        assert!(table.toggle_row("2"));
        assert!(table.selected_ids().is_empty());
    }

    #[test]
    fn test_selection_none_mode_ignores() {
        let mut table = DataTable::new(
            vec![ColumnDef::<Record>::accessor("name", "Name")],
            TableConfig::default().with_selection_mode(SelectionMode::None),
        )
        .unwrap()
        .with_data(table().rows().to_vec());
        assert!(!table.toggle_row("1"));
        assert!(!table.toggle_all());
        assert!(table.selected_ids().is_empty());
    }

    #[test]
    fn test_unknown_id_ignored() {
        let mut table = table();
        assert!(!table.toggle_row("42"));
        assert!(table.selected_ids().is_empty());
    }

    #[test]
    fn test_listener_sees_changes_and_pruning() {
        let seen: Arc<Mutex<Vec<Vec<String>>>> = Arc::default();
        let mut table = table();
        let sink = Arc::clone(&seen);
        table.on_selection_change(move |ids| sink.lock().unwrap().push(ids.to_vec()));

        table.toggle_all();
        table.set_data(vec![Record::new().set("id", 2i64).set("name", "Jane Smith")]);

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], vec!["1", "2", "3"]);
        assert_eq!(seen[1], vec!["2"]);
    }

    #[test]
    fn test_selected_rows_in_dataset_order() {
        let mut table = table();
        table.toggle_row("3");
        table.toggle_row("1");
        let names: Vec<_> = table
            .selected_rows()
            .iter()
            .map(|r| r.get_string("name").unwrap().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["John Doe", "Bob Johnson"]);
    }

    #[test]
    fn test_set_columns_drops_missing_sort() {
        let mut table = table();
        table.toggle_sort("name");
        table
            .set_columns(vec![ColumnDef::accessor("id", "Id")])
            .unwrap();
        assert!(table.sort().is_none());
    }

    #[test]
    fn test_set_columns_error_keeps_previous() {
        let mut table = table();
        let err = table.set_columns(vec![
            ColumnDef::accessor("id", "Id"),
            ColumnDef::accessor("id", "Id again"),
        ]);
        assert!(err.is_err());
        assert_eq!(table.columns().len(), 1);
        assert_eq!(table.columns()[0].id(), "name");
    }

    #[test]
    fn test_dirty_tracking() {
        let mut table = table();
        assert!(table.is_dirty());
        table.clear_dirty();
        table.set_filter_query("");
        assert!(!table.is_dirty());
        table.set_filter_query("jane");
        assert!(table.is_dirty());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = DataTable::new(
            vec![ColumnDef::<Record>::accessor("name", "Name")],
            TableConfig::default().with_page_size(0),
        );
        assert!(result.is_err());
    }
}
