//! Read model handed to the rendering layer.

use crate::config::TableVariant;
use crate::model::TableRow;
use crate::pipeline::SortState;

use super::state::DataTable;

/// Class-name composition function: joins the active tokens into one string.
pub type Classifier = fn(&[&str]) -> String;

/// Default class-name composition.
///
/// Joins non-empty tokens with single spaces, dropping duplicates while
/// keeping first-seen order.
pub fn classify(tokens: &[&str]) -> String {
    let mut out: Vec<&str> = Vec::with_capacity(tokens.len());
    for token in tokens.iter().map(|t| t.trim()) {
        if !token.is_empty() && !out.contains(&token) {
            out.push(token);
        }
    }
    out.join(" ")
}

/// What the table body should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableStatus {
    /// Data is still being fetched.
    Loading,
    /// Fetching failed with this message.
    Error(String),
    /// There are no rows to show (empty dataset or nothing matched the filter).
    Empty(String),
    /// Rows are available.
    Ready,
}

/// A visible column header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub id: String,
    pub header: String,
    pub width: u16,
    pub sortable: bool,
    pub resizable: bool,
    /// `"ascending"`, `"descending"` or `"none"`.
    pub aria_sort: &'static str,
}

/// One row on the current page, ready for display.
#[derive(Debug, Clone)]
pub struct RenderedRow<'a, T> {
    pub id: &'a str,
    pub row: &'a T,
    /// Display strings, one per visible column.
    pub cells: Vec<String>,
    pub selected: bool,
    /// Whether the cursor is on this row.
    pub focused: bool,
    pub class: String,
}

/// Snapshot of everything the rendering layer needs.
#[derive(Debug, Clone)]
pub struct TableView<'a, T> {
    /// Classes of the table element.
    pub class: String,
    /// Classes of the header row.
    pub header_class: String,
    pub aria_label: Option<&'a str>,
    pub aria_describedby: Option<&'a str>,
    pub headers: Vec<HeaderCell>,
    pub page_rows: Vec<RenderedRow<'a, T>>,
    pub page_count: usize,
    pub current_page_index: usize,
    pub page_size: usize,
    pub sort: Option<SortState>,
    pub filter_query: &'a str,
    pub selected_ids: Vec<String>,
    /// Select-all checkbox: every visible row selected.
    pub all_selected: bool,
    /// Select-all checkbox: indeterminate.
    pub some_selected: bool,
    pub status: TableStatus,
    pub total_rows: usize,
    pub filtered_rows: usize,
}

impl<T: TableRow> DataTable<T> {
    /// Current body status. Loading wins over error, error over empty.
    pub fn status(&self) -> TableStatus {
        if self.loading {
            TableStatus::Loading
        } else if let Some(error) = &self.error {
            TableStatus::Error(error.clone())
        } else if self.processed.is_empty() {
            TableStatus::Empty(self.config.empty_message.clone())
        } else {
            TableStatus::Ready
        }
    }

    /// Classes of the table element: `table`, `table-dense` for the dense
    /// variant, then the configured class name.
    pub fn table_class(&self) -> String {
        let mut tokens = vec!["table"];
        if self.config.variant == TableVariant::Dense {
            tokens.push("table-dense");
        }
        if let Some(class_name) = &self.config.class_name {
            tokens.push(class_name.as_str());
        }
        (self.classifier)(&tokens)
    }

    /// Classes of the header row: `header`, plus `sticky` when enabled.
    pub fn header_class(&self) -> String {
        let mut tokens = vec!["header"];
        if self.config.sticky_header {
            tokens.push("sticky");
        }
        (self.classifier)(&tokens)
    }

    /// Headers of the visible columns.
    pub fn headers(&self) -> Vec<HeaderCell> {
        self.visible_columns()
            .map(|column| {
                let aria_sort = match &self.sort {
                    Some(state) if state.column_id == column.id() => state.direction.aria_sort(),
                    _ => "none",
                };
                HeaderCell {
                    id: column.id().to_string(),
                    header: column.header().to_string(),
                    width: column.width(),
                    sortable: self.config.enable_sorting && column.is_sortable(),
                    resizable: column.is_resizable(),
                    aria_sort,
                }
            })
            .collect()
    }

    /// Rows on the current page with resolved cells and selection flags.
    pub fn rendered_rows(&self) -> Vec<RenderedRow<'_, T>> {
        self.page_positions()
            .iter()
            .enumerate()
            .map(|(index, &position)| {
                let row = &self.rows[position];
                let id = self.ids[position].as_str();
                let selected = self.selection.is_selected(id);
                let focused = self.cursor == Some(index);
                let mut tokens = vec!["row"];
                if selected {
                    tokens.push("row-selected");
                }
                if focused {
                    tokens.push("row-focused");
                }
                RenderedRow {
                    id,
                    row,
                    cells: self.visible_columns().map(|c| c.render(row)).collect(),
                    selected,
                    focused,
                    class: (self.classifier)(&tokens),
                }
            })
            .collect()
    }

    /// Build the read model.
    pub fn view(&self) -> TableView<'_, T> {
        let visible = self.visible_ids();
        TableView {
            class: self.table_class(),
            header_class: self.header_class(),
            aria_label: self.config.aria_label.as_deref(),
            aria_describedby: self.config.aria_describedby.as_deref(),
            headers: self.headers(),
            page_rows: self.rendered_rows(),
            page_count: self.page_count,
            current_page_index: self.page_index,
            page_size: self.page_size,
            sort: self.sort.clone(),
            filter_query: &self.filter_query,
            selected_ids: self.selection.selected(),
            all_selected: self.selection.all_selected(&visible),
            some_selected: self.selection.some_selected(&visible),
            status: self.status(),
            total_rows: self.rows.len(),
            filtered_rows: self.processed.len(),
        }
    }
}
