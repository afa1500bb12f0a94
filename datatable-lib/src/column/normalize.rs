//! Normalized columns.

use std::collections::HashMap;
use std::fmt;

use super::item::{CellRenderer, ColumnDef};
use crate::error::{Result, TableError};
use crate::model::{resolve_path, TableRow, Value};

/// A normalized column with a stable id.
///
/// Everything except visibility and width is fixed once normalized; those two
/// are the only per-column state the table mutates.
pub struct Column<T> {
    id: String,
    accessor: Option<String>,
    header: String,
    cell: Option<CellRenderer<T>>,
    sortable: bool,
    filterable: bool,
    resizable: bool,
    visible: bool,
    width: u16,
    initial_width: u16,
    min_width: u16,
    max_width: u16,
}

impl<T> Column<T> {
    /// Stable identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Accessor path, if the column reads a value.
    pub fn accessor(&self) -> Option<&str> {
        self.accessor.as_deref()
    }

    /// Header text.
    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn is_sortable(&self) -> bool {
        self.sortable
    }

    pub fn is_filterable(&self) -> bool {
        self.filterable
    }

    pub fn is_resizable(&self) -> bool {
        self.resizable
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Current width.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Resize bounds as `(min, max)`.
    pub fn width_bounds(&self) -> (u16, u16) {
        (self.min_width, self.max_width)
    }

    /// Returns `true` if a custom cell renderer is attached.
    pub fn has_custom_cell(&self) -> bool {
        self.cell.is_some()
    }

    /// Set visibility. Returns true if it changed.
    pub(crate) fn set_visible(&mut self, visible: bool) -> bool {
        let changed = self.visible != visible;
        self.visible = visible;
        changed
    }

    /// Resize within bounds. Returns true if the width changed.
    ///
    /// Non-resizable columns keep their width.
    pub(crate) fn resize(&mut self, width: u16) -> bool {
        if !self.resizable {
            return false;
        }
        let clamped = width.clamp(self.min_width, self.max_width);
        let changed = self.width != clamped;
        self.width = clamped;
        changed
    }

    /// Restore the initial width. Returns true if the width changed.
    pub(crate) fn reset_width(&mut self) -> bool {
        let changed = self.width != self.initial_width;
        self.width = self.initial_width;
        changed
    }
}

impl<T: TableRow> Column<T> {
    /// Resolve the raw value of this column for a row.
    ///
    /// Missing path segments and accessor-less columns yield [`Value::Null`].
    pub fn value(&self, row: &T) -> Value {
        match &self.accessor {
            Some(path) => resolve_path(row, path),
            None => Value::Null,
        }
    }

    /// Render the display string of this column for a row.
    pub fn render(&self, row: &T) -> String {
        let value = self.value(row);
        match &self.cell {
            Some(render) => render(&value, row),
            None => value.to_string(),
        }
    }
}

impl<T> Clone for Column<T> {
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
            initial_width: self.initial_width,
            min_width: self.min_width,
            max_width: self.max_width,
        }
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("id", &self.id)
            .field("accessor", &self.accessor)
            .field("header", &self.header)
            .field("visible", &self.visible)
            .field("width", &self.width)
            .finish_non_exhaustive()
    }
}

/// Normalize column descriptors.
///
/// Assigns each column its id (explicit id, else accessor path) and clamps the
/// initial width into its bounds. Fails on duplicate ids, on columns with
/// neither id nor accessor, and on inverted width bounds.
pub fn normalize<T>(defs: Vec<ColumnDef<T>>) -> Result<Vec<Column<T>>> {
    let mut seen: HashMap<String, usize> = HashMap::with_capacity(defs.len());
    let mut columns = Vec::with_capacity(defs.len());

    for (index, def) in defs.into_iter().enumerate() {
        let id = match def.id.clone().or_else(|| def.accessor.clone()) {
            Some(id) if !id.is_empty() => id,
            _ => {
                return Err(TableError::MissingColumnId {
                    index,
                    header: def.header,
                });
            }
        };

        if let Some(&first) = seen.get(&id) {
            return Err(TableError::duplicate_column(id, first, index));
        }

        if def.min_width > def.max_width {
            return Err(TableError::InvalidWidth {
                id,
                min: def.min_width,
                max: def.max_width,
            });
        }

        seen.insert(id.clone(), index);
        let width = def.width.clamp(def.min_width, def.max_width);
        columns.push(Column {
            id,
            accessor: def.accessor,
            header: def.header,
            cell: def.cell,
            sortable: def.sortable,
            filterable: def.filterable,
            resizable: def.resizable,
            visible: def.visible,
            width,
            initial_width: width,
            min_width: def.min_width,
            max_width: def.max_width,
        });
    }

    Ok(columns)
}
