//! Playlist state coordination.
//!
//! The [`PlaylistCoordinator`] owns the entry list, the active tag selection,
//! and the playback cursor. Every operation that changes the selection or the
//! entry list reconciles the cursor against the freshly filtered view before
//! returning, so callers never observe a cursor that points outside a
//! non-empty filtered list. Explicit selections skip reconciliation.

use tracing::debug;

use crate::entry::Entry;
use crate::error::{Error, Result};
use crate::filter::{TagSelection, collect_tags};
use crate::storage::ViewSnapshot;

/// Outcome of reconciling the cursor with the filtered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconciliation {
    /// The cursor was already valid.
    Unchanged,
    /// The cursor moved to the first filtered entry.
    ResetToFirst,
    /// The filtered view is empty; the cursor was cleared.
    Cleared,
}

/// Owner of the playlist, the tag selection, and the playback cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaylistCoordinator {
    entries: Vec<Entry>,
    selection: TagSelection,
    cursor: Option<String>,
}

impl PlaylistCoordinator {
    /// Create a coordinator over `entries` with the cursor on the first entry.
    #[must_use]
    pub fn new(entries: Vec<Entry>) -> Self {
        let cursor = entries.first().map(|e| e.id.clone());
        Self {
            entries,
            selection: TagSelection::new(),
            cursor,
        }
    }

    /// All entries in source order.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// The active tag selection.
    #[must_use]
    pub const fn selection(&self) -> &TagSelection {
        &self.selection
    }

    /// Id of the current entry, if any.
    #[must_use]
    pub fn cursor(&self) -> Option<&str> {
        self.cursor.as_deref()
    }

    /// The current entry, if the cursor points at a known entry.
    #[must_use]
    pub fn current_entry(&self) -> Option<&Entry> {
        let id = self.cursor.as_deref()?;
        self.find(id)
    }

    /// Look up an entry by id in the unfiltered list.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Sorted union of every entry's tags.
    #[must_use]
    pub fn all_tags(&self) -> Vec<String> {
        collect_tags(&self.entries)
    }

    /// Entries carrying every selected tag, in source order.
    ///
    /// With no tag selected this is the full list.
    #[must_use]
    pub fn filtered(&self) -> Vec<&Entry> {
        self.entries
            .iter()
            .filter(|e| self.selection.matches(e))
            .collect()
    }

    /// Toggle `tag` in the selection and reconcile the cursor.
    pub fn toggle_tag(&mut self, tag: &str) -> Reconciliation {
        let selected = self.selection.toggle(tag);
        debug!(tag, selected, "Toggled tag filter");
        self.reconcile()
    }

    /// Point the cursor at `id`.
    ///
    /// No membership check is made: an explicit choice always wins, and the
    /// cursor is not reconciled afterwards.
    pub fn select(&mut self, id: impl Into<String>) {
        let id = id.into();
        debug!(id = %id, "Selected entry");
        self.cursor = Some(id);
    }

    /// Move the cursor to the next filtered entry, wrapping to the first.
    ///
    /// If the cursor is not in the filtered list the first filtered entry is
    /// chosen. Does nothing when the filtered list is empty.
    ///
    /// Returns the new cursor.
    pub fn advance(&mut self) -> Option<&str> {
        let next = {
            let filtered = self.filtered();
            if filtered.is_empty() {
                None
            } else {
                let next_index = self
                    .cursor
                    .as_deref()
                    .and_then(|current| filtered.iter().position(|e| e.id == current))
                    .map_or(0, |i| (i + 1) % filtered.len());
                Some(filtered[next_index].id.clone())
            }
        };

        if let Some(id) = next {
            debug!(id = %id, "Advanced to next entry");
            self.cursor = Some(id);
        }
        self.cursor.as_deref()
    }

    /// Append an entry to the playlist and reconcile the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateEntry`] if an entry with the same id exists.
    pub fn add_entry(&mut self, entry: Entry) -> Result<Reconciliation> {
        if self.find(&entry.id).is_some() {
            return Err(Error::DuplicateEntry(entry.id));
        }
        debug!(id = %entry.id, tags = ?entry.tags, "Added entry");
        self.entries.push(entry);
        Ok(self.reconcile())
    }

    /// Restore the cursor from an address-bar id.
    ///
    /// Applies only when `id` names an entry of the unfiltered list, in which
    /// case it behaves like [`Self::select`]. Returns whether the cursor was
    /// set.
    pub fn restore_from_address(&mut self, id: &str) -> bool {
        if self.find(id).is_none() {
            debug!(id, "Ignoring unknown id from address bar");
            return false;
        }
        self.select(id);
        true
    }

    /// Restore the tag selection and cursor from a persisted snapshot.
    ///
    /// The cursor is taken from `order[current_index]` when that id still
    /// exists. The result is reconciled against the restored filter.
    pub fn apply_snapshot(&mut self, snapshot: &ViewSnapshot) -> Reconciliation {
        self.selection = TagSelection::from_tags(snapshot.selected_tags.iter().cloned());

        if let Some(id) = snapshot
            .current_index
            .and_then(|i| snapshot.order.get(i))
            .filter(|id| self.find(id).is_some())
        {
            self.cursor = Some(id.clone());
        }

        self.reconcile()
    }

    /// Capture the current view for persistence.
    #[must_use]
    pub fn snapshot(&self, current_time: f64) -> ViewSnapshot {
        let order: Vec<String> = self.filtered().iter().map(|e| e.id.clone()).collect();
        let current_index = self
            .cursor
            .as_deref()
            .and_then(|current| order.iter().position(|id| id == current));

        ViewSnapshot {
            selected_tags: self.selection.as_slice().to_vec(),
            order,
            current_index,
            current_time,
        }
    }

    /// Restore cursor validity after the filtered view changed.
    fn reconcile(&mut self) -> Reconciliation {
        let (first, still_visible) = {
            let filtered = self.filtered();
            let first = filtered.first().map(|e| e.id.clone());
            let still_visible = self
                .cursor
                .as_deref()
                .is_some_and(|current| filtered.iter().any(|e| e.id == current));
            (first, still_visible)
        };

        match first {
            None => {
                if self.cursor.take().is_some() {
                    debug!("Filtered list is empty, clearing cursor");
                    Reconciliation::Cleared
                } else {
                    Reconciliation::Unchanged
                }
            }
            Some(_) if still_visible => Reconciliation::Unchanged,
            Some(first) => {
                debug!(id = %first, "Cursor left the filtered list, resetting to first entry");
                self.cursor = Some(first);
                Reconciliation::ResetToFirst
            }
        }
    }
}
