//! Playlist entries.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::video_id::{extract_video_id, thumbnail_url};

/// One playable item in the playlist.
///
/// Entries are immutable once created; the playlist only ever appends them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Canonical video id. Unique within a playlist.
    pub id: String,
    /// The URL (or bare id) the entry was created from.
    #[serde(rename = "url")]
    pub source_url: String,
    /// Display title, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Tags used for filtering.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Entry {
    /// Create an untitled, untagged entry.
    pub fn new(id: impl Into<String>, source_url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source_url: source_url.into(),
            title: None,
            tags: Vec::new(),
        }
    }

    /// Set the display title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the tags. Blank and repeated tags are dropped.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = dedup_tags(tags.into_iter().map(Into::into));
        self
    }

    /// Build an entry from form input: a video URL or id plus a
    /// comma-separated tag list.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidVideoReference`] if no video id can be
    /// extracted from `url_or_id`.
    pub fn from_submission(url_or_id: &str, tag_input: &str) -> Result<Self> {
        let id = extract_video_id(url_or_id)?;
        Ok(Self {
            id,
            source_url: url_or_id.trim().to_string(),
            title: None,
            tags: parse_tag_list(tag_input),
        })
    }

    /// Title to show in lists: the title when present, otherwise the id.
    #[must_use]
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(&self.id)
    }

    /// Whether the entry carries the given tag.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Whether the entry carries every one of `tags`.
    #[must_use]
    pub fn has_all_tags<S: AsRef<str>>(&self, tags: &[S]) -> bool {
        tags.iter().all(|t| self.has_tag(t.as_ref()))
    }

    /// Thumbnail image URL for this entry.
    #[must_use]
    pub fn thumbnail_url(&self) -> String {
        thumbnail_url(&self.id)
    }
}

/// Split a comma-separated tag list, trimming whitespace and dropping blank
/// and repeated tags.
///
/// ```rust
/// use tagdeck_core::entry::parse_tag_list;
///
/// assert_eq!(parse_tag_list(" jpop, ,pop,jpop "), vec!["jpop", "pop"]);
/// ```
#[must_use]
pub fn parse_tag_list(input: &str) -> Vec<String> {
    dedup_tags(input.split(',').map(str::to_string))
}

fn dedup_tags(tags: impl Iterator<Item = String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for tag in tags {
        let tag = tag.trim();
        if !tag.is_empty() && !out.iter().any(|t| t == tag) {
            out.push(tag.to_string());
        }
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_from_submission() {
        let entry = Entry::from_submission(
            " https://www.youtube.com/watch?v=dQw4w9WgXcQ ",
            "pop, 80s ,",
        )
        .expect("valid submission");

        assert_eq!(entry.id, "dQw4w9WgXcQ");
        assert_eq!(entry.source_url, "https://www.youtube.com/watch?v=dQw4w9WgXcQ");
        assert_eq!(entry.title, None);
        assert_eq!(entry.tags, vec!["pop", "80s"]);
    }

    #[test]
    fn test_from_submission_rejects_invalid_reference() {
        let result = Entry::from_submission("not a url", "pop");
        assert!(matches!(result, Err(Error::InvalidVideoReference(_))));
    }

    #[test]
    fn test_display_title_falls_back_to_id() {
        let entry = Entry::new("dQw4w9WgXcQ", "dQw4w9WgXcQ");
        assert_eq!(entry.display_title(), "dQw4w9WgXcQ");

        let entry = entry.with_title("Never Gonna Give You Up");
        assert_eq!(entry.display_title(), "Never Gonna Give You Up");

        let blank = Entry::new("dQw4w9WgXcQ", "dQw4w9WgXcQ").with_title("");
        assert_eq!(blank.display_title(), "dQw4w9WgXcQ");
    }

    #[test]
    fn test_has_all_tags() {
        let entry = Entry::new("AfxsFsLhL04", "").with_tags(["pop", "hiphop", "upbeat"]);

        assert!(entry.has_all_tags::<&str>(&[]));
        assert!(entry.has_all_tags(&["pop"]));
        assert!(entry.has_all_tags(&["upbeat", "pop"]));
        assert!(!entry.has_all_tags(&["pop", "jpop"]));
    }

    #[test]
    fn test_with_tags_dedups() {
        let entry = Entry::new("AfxsFsLhL04", "").with_tags(["pop", " pop", "", "jpop"]);
        assert_eq!(entry.tags, vec!["pop", "jpop"]);
    }

    #[test]
    fn test_parse_tag_list_empty() {
        assert!(parse_tag_list("").is_empty());
        assert!(parse_tag_list(" , ,").is_empty());
    }

    #[test]
    fn test_serde_wire_names() {
        let entry = Entry::new("dQw4w9WgXcQ", "https://youtu.be/dQw4w9WgXcQ").with_tags(["pop"]);
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["url"], "https://youtu.be/dQw4w9WgXcQ");
        assert!(json.get("title").is_none());

        let back: Entry = serde_json::from_value(json).unwrap();
        assert_eq!(back, entry);
    }
}
