//! Tag selection used to narrow the playlist.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::entry::Entry;

/// Ordered set of active filter tags (AND semantics).
///
/// Insertion order is kept so the persisted selection round-trips in the
/// order the user picked the tags. Serialized as a plain list; repeats in a
/// stored list are dropped on the way in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct TagSelection {
    tags: Vec<String>,
}

impl TagSelection {
    /// Create an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self { tags: Vec::new() }
    }

    /// Build a selection from tags, dropping repeats.
    pub fn from_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut selection = Self::new();
        for tag in tags {
            let tag = tag.into();
            if !selection.contains(&tag) {
                selection.tags.push(tag);
            }
        }
        selection
    }

    /// Add `tag` if absent, remove it if present.
    ///
    /// Returns `true` if the tag is selected afterwards.
    pub fn toggle(&mut self, tag: &str) -> bool {
        if let Some(pos) = self.tags.iter().position(|t| t == tag) {
            self.tags.remove(pos);
            false
        } else {
            self.tags.push(tag.to_string());
            true
        }
    }

    /// Whether `tag` is selected.
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Whether no tag is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Number of selected tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Selected tags in selection order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.tags
    }

    /// Whether `entry` carries every selected tag.
    ///
    /// An empty selection matches everything.
    #[must_use]
    pub fn matches(&self, entry: &Entry) -> bool {
        entry.has_all_tags(&self.tags)
    }
}

impl From<Vec<String>> for TagSelection {
    fn from(tags: Vec<String>) -> Self {
        Self::from_tags(tags)
    }
}

impl From<TagSelection> for Vec<String> {
    fn from(selection: TagSelection) -> Self {
        selection.tags
    }
}

/// Sorted, de-duplicated union of the tags of `entries`.
#[must_use]
pub fn collect_tags<'a>(entries: impl IntoIterator<Item = &'a Entry>) -> Vec<String> {
    entries
        .into_iter()
        .flat_map(|e| e.tags.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
