//! Column descriptors as supplied by callers.

use std::fmt;
use std::sync::Arc;

use crate::model::Value;

/// Default column width in terminal columns.
pub const DEFAULT_WIDTH: u16 = 20;
/// Default lower bound for column resizing.
pub const DEFAULT_MIN_WIDTH: u16 = 4;
/// Default upper bound for column resizing.
pub const DEFAULT_MAX_WIDTH: u16 = 200;

/// Custom cell renderer: receives the resolved raw value and the row.
pub type CellRenderer<T> = Arc<dyn Fn(&Value, &T) -> String + Send + Sync>;

/// Column configuration.
///
/// A column reads its value through a dotted accessor path and is identified
/// by an explicit id or, failing that, by the accessor path itself. Columns
/// are sortable, filterable, resizable and visible unless told otherwise.
///
/// # Examples
///
/// ```
/// use datatable_lib::column::ColumnDef;
/// use datatable_lib::model::Record;
///
/// let columns: Vec<ColumnDef<Record>> = vec![
///     ColumnDef::accessor("name", "Name").width(30),
///     ColumnDef::accessor("contact.email", "Email").id("email"),
///     ColumnDef::accessor("notes", "Notes").sortable(false).hidden(),
/// ];
/// ```
pub struct ColumnDef<T> {
    /// Explicit column identifier.
    pub id: Option<String>,
    /// Dotted path to the value inside a row.
    pub accessor: Option<String>,
    /// Header text.
    pub header: String,
    /// Display-only renderer; sorting and filtering still use the raw value.
    pub cell: Option<CellRenderer<T>>,
    /// Whether header clicks sort by this column.
    pub sortable: bool,
    /// Whether this column takes part in the free-text filter.
    pub filterable: bool,
    /// Whether this column can be resized.
    pub resizable: bool,
    /// Whether this column is initially shown.
    pub visible: bool,
    /// Initial width in terminal columns.
    pub width: u16,
    /// Minimum width when resizing.
    pub min_width: u16,
    /// Maximum width when resizing.
    pub max_width: u16,
}

impl<T> ColumnDef<T> {
    /// Create a column that reads its value from `path`.
    pub fn accessor(path: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            accessor: Some(path.into()),
            ..Self::blank(header.into())
        }
    }

    /// Create a display-only column with no accessor.
    ///
    /// Such a column needs a [`cell`](Self::cell) renderer to show anything;
    /// its raw value is always null.
    pub fn display(id: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::blank(header.into())
        }
    }

    fn blank(header: String) -> Self {
        Self {
            id: None,
            accessor: None,
            header,
            cell: None,
            sortable: true,
            filterable: true,
            resizable: true,
            visible: true,
            width: DEFAULT_WIDTH,
            min_width: DEFAULT_MIN_WIDTH,
            max_width: DEFAULT_MAX_WIDTH,
        }
    }

    /// Set an explicit column id.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set a custom cell renderer.
    pub fn cell<F>(mut self, render: F) -> Self
    where
        F: Fn(&Value, &T) -> String + Send + Sync + 'static,
    {
        self.cell = Some(Arc::new(render));
        self
    }

    /// Set whether the column is sortable.
    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    /// Set whether the column takes part in filtering.
    pub fn filterable(mut self, filterable: bool) -> Self {
        self.filterable = filterable;
        self
    }

    /// Set whether the column can be resized.
    pub fn resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }

    /// Start with the column hidden.
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Set the initial width.
    pub fn width(mut self, width: u16) -> Self {
        self.width = width;
        self
    }

    /// Set the minimum width.
    pub fn min_width(mut self, min_width: u16) -> Self {
        self.min_width = min_width;
        self
    }

    /// Set the maximum width.
    pub fn max_width(mut self, max_width: u16) -> Self {
        self.max_width = max_width;
        self
    }
}

impl<T> Clone for ColumnDef<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            accessor: self.accessor.clone(),
            header: self.header.clone(),
            cell: self.cell.clone(),
            sortable: self.sortable,
            filterable: self.filterable,
            resizable: self.resizable,
            visible: self.visible,
            width: self.width,
            min_width: self.min_width,
            max_width: self.max_width,
        }
    }
}

impl<T> fmt::Debug for ColumnDef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDef")
            .field("id", &self.id)
            .field("accessor", &self.accessor)
            .field("header", &self.header)
            .field("cell", &self.cell.as_ref().map(|_| "<fn>"))
            .field("sortable", &self.sortable)
            .field("filterable", &self.filterable)
            .field("resizable", &self.resizable)
            .field("visible", &self.visible)
            .field("width", &self.width)
            .finish()
    }
}
