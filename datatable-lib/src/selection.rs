//! Row selection tracking.
//!
//! Selection is keyed by row identifier, never by position, so it stays
//! stable when rows are filtered, re-sorted or paged.

use std::collections::HashSet;

use serde::Deserialize;
use serde::Serialize;

/// Selection mode for a table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// No selection allowed
    None,
    /// At most one row selected
    Single,
    /// Any number of rows selected
    #[default]
    Multiple,
}

/// ID-based selection state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    selected: HashSet<String>,
}

impl Selection {
    /// Create a new empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all selected IDs (sorted for deterministic ordering).
    pub fn selected(&self) -> Vec<String> {
        let mut ids: Vec<_> = self.selected.iter().cloned().collect();
        ids.sort();
        ids
    }

    /// Check if an ID is selected.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// Get the number of selected items.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Clear all selection.
    /// Returns the IDs that were deselected.
    pub fn clear(&mut self) -> Vec<String> {
        self.selected.drain().collect()
    }

    /// Select a single ID (clears others).
    /// Returns (added, removed) IDs.
    pub fn select(&mut self, id: &str) -> (Vec<String>, Vec<String>) {
        let removed: Vec<_> = self.selected.iter().filter(|&i| i != id).cloned().collect();
        let was_selected = self.selected.contains(id);
        self.selected.clear();
        self.selected.insert(id.to_string());
        let added = if was_selected {
            vec![]
        } else {
            vec![id.to_string()]
        };
        (added, removed)
    }

    /// Toggle selection of an ID.
    /// Returns (added, removed) IDs.
    pub fn toggle(&mut self, id: &str) -> (Vec<String>, Vec<String>) {
        if self.selected.remove(id) {
            (vec![], vec![id.to_string()])
        } else {
            self.selected.insert(id.to_string());
            (vec![id.to_string()], vec![])
        }
    }

    /// Select all items from the provided list of IDs.
    /// Returns the IDs that were newly selected.
    pub fn select_all(&mut self, ids: &[String]) -> Vec<String> {
        let mut added = Vec::new();
        for id in ids {
            if self.selected.insert(id.clone()) {
                added.push(id.clone());
            }
        }
        added
    }

    /// Deselect every ID in the provided list.
    /// Returns the IDs that were deselected.
    pub fn deselect_all(&mut self, ids: &[String]) -> Vec<String> {
        ids.iter()
            .filter(|id| self.selected.remove(id.as_str()))
            .cloned()
            .collect()
    }

    /// Check whether every ID in the list is selected.
    ///
    /// An empty list is never "all selected".
    pub fn all_selected(&self, ids: &[String]) -> bool {
        !ids.is_empty() && ids.iter().all(|id| self.selected.contains(id))
    }

    /// Check whether some, but not all, of the IDs are selected.
    pub fn some_selected(&self, ids: &[String]) -> bool {
        ids.iter().any(|id| self.selected.contains(id)) && !self.all_selected(ids)
    }

    /// Select-all checkbox behavior over a visible set.
    ///
    /// If every visible ID is selected, deselects exactly those IDs;
    /// otherwise selects all of them. IDs outside the visible set are left
    /// untouched. Returns (added, removed) IDs.
    pub fn toggle_all(&mut self, visible: &[String]) -> (Vec<String>, Vec<String>) {
        if self.all_selected(visible) {
            (vec![], self.deselect_all(visible))
        } else {
            (self.select_all(visible), vec![])
        }
    }

    /// Drop every selected ID for which `keep` returns false.
    /// Returns the pruned IDs.
    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) -> Vec<String> {
        let removed: Vec<_> = self
            .selected
            .iter()
            .filter(|id| !keep(id))
            .cloned()
            .collect();
        for id in &removed {
            self.selected.remove(id);
        }
        removed
    }
}
