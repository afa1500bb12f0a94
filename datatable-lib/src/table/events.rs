//! Interaction handling: header clicks, row clicks and keyboard navigation.

use crate::model::TableRow;

use super::state::DataTable;

/// Result of handling an interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// The table handled the event.
    Consumed,
    /// The event did not apply.
    Ignored,
}

impl EventResult {
    fn from_changed(changed: bool) -> Self {
        if changed {
            Self::Consumed
        } else {
            Self::Ignored
        }
    }
}

/// Keys the table responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKey {
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
    /// Toggle selection of the row under the cursor.
    Space,
}

impl<T: TableRow> DataTable<T> {
    // -------------------------------------------------------------------------
    // Cursor
    // -------------------------------------------------------------------------

    /// Get the cursor position within the current page.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Get the ID of the row at the cursor.
    pub fn cursor_id(&self) -> Option<String> {
        self.cursor
            .and_then(|c| self.page_positions().get(c).copied())
            .map(|position| self.ids[position].clone())
    }

    /// Set the cursor position. Returns the previous position.
    pub fn set_cursor(&mut self, index: usize) -> Option<usize> {
        let previous = self.cursor;
        if index < self.page_positions().len() && previous != Some(index) {
            self.cursor = Some(index);
            self.dirty = true;
        }
        previous
    }

    /// Move cursor up.
    pub fn cursor_up(&mut self) -> Option<(Option<usize>, usize)> {
        let previous = self.cursor;
        let next = match previous {
            Some(cursor) if cursor > 0 => cursor - 1,
            Some(_) => return None,
            None if !self.page_positions().is_empty() => 0,
            None => return None,
        };
        self.cursor = Some(next);
        self.dirty = true;
        Some((previous, next))
    }

    /// Move cursor down.
    pub fn cursor_down(&mut self) -> Option<(Option<usize>, usize)> {
        let previous = self.cursor;
        let len = self.page_positions().len();
        let next = match previous {
            Some(cursor) if cursor + 1 < len => cursor + 1,
            Some(_) => return None,
            None if len > 0 => 0,
            None => return None,
        };
        self.cursor = Some(next);
        self.dirty = true;
        Some((previous, next))
    }

    /// Move cursor to first row.
    pub fn cursor_first(&mut self) -> Option<(Option<usize>, usize)> {
        if self.page_positions().is_empty() {
            return None;
        }
        let previous = self.cursor;
        self.cursor = Some(0);
        self.dirty = true;
        Some((previous, 0))
    }

    /// Move cursor to last row.
    pub fn cursor_last(&mut self) -> Option<(Option<usize>, usize)> {
        let last = self.page_positions().len().checked_sub(1)?;
        let previous = self.cursor;
        self.cursor = Some(last);
        self.dirty = true;
        Some((previous, last))
    }

    /// Toggle selection of the row at the cursor.
    pub fn toggle_select_at_cursor(&mut self) -> bool {
        match self.cursor_id() {
            Some(id) => self.toggle_row(&id),
            None => false,
        }
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    /// Handle a click on a column header: cycles that column's sort.
    pub fn on_header_click(&mut self, column_id: &str) -> EventResult {
        let before = self.sort.clone();
        self.toggle_sort(column_id);
        EventResult::from_changed(before != self.sort)
    }

    /// Handle a click on a row's checkbox: moves the cursor there and
    /// toggles its selection.
    pub fn on_row_click(&mut self, id: &str) -> EventResult {
        if let Some(index) = self.page_ids().iter().position(|page_id| page_id == id) {
            self.set_cursor(index);
        }
        EventResult::from_changed(self.toggle_row(id))
    }

    /// Handle a click on the select-all checkbox.
    pub fn on_select_all_click(&mut self) -> EventResult {
        EventResult::from_changed(self.toggle_all())
    }

    /// Handle a navigation key.
    ///
    /// Page keys move between pages and put the cursor on the first row.
    pub fn on_key(&mut self, key: TableKey) -> EventResult {
        let handled = match key {
            TableKey::Up => self.cursor_up().is_some(),
            TableKey::Down => self.cursor_down().is_some(),
            TableKey::Home => self.cursor_first().is_some(),
            TableKey::End => self.cursor_last().is_some(),
            TableKey::PageUp => self.previous_page() && self.cursor_first().is_some(),
            TableKey::PageDown => self.next_page() && self.cursor_first().is_some(),
            TableKey::Space => self.toggle_select_at_cursor(),
        };
        log::trace!("Table key {:?} handled: {}", key, handled);
        EventResult::from_changed(handled)
    }
}
