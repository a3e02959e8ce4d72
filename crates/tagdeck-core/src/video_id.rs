//! Video identifier extraction.
//!
//! Users may paste either a bare 11 character video id or one of the common
//! `YouTube` URL shapes. Everything downstream (thumbnails, the player, the
//! address bar) works with the bare id only.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

/// Length of a canonical video id.
pub const VIDEO_ID_LEN: usize = 11;

/// The URL shape a video id was extracted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceShape {
    /// The input was the bare id itself.
    Bare,
    /// Watch URL with a `v=` query parameter (youtube.com/watch?v=...)
    WatchQuery,
    /// Short link (youtu.be/...)
    ShortLink,
    /// Embed path (youtube.com/embed/...)
    Embed,
    /// Legacy path (youtube.com/v/...)
    LegacyPath,
}

/// A video id together with the shape it was found in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoReference {
    /// The canonical video id.
    pub id: String,
    /// Where the id was found.
    pub shape: ReferenceShape,
}

/// Capturing patterns, tried in order. The first match wins.
const URL_PATTERNS: [(ReferenceShape, &str); 4] = [
    (ReferenceShape::WatchQuery, r"v=([a-zA-Z0-9_-]{11})"),
    (ReferenceShape::ShortLink, r"youtu\.be/([a-zA-Z0-9_-]{11})"),
    (ReferenceShape::Embed, r"embed/([a-zA-Z0-9_-]{11})"),
    (ReferenceShape::LegacyPath, r"/v/([a-zA-Z0-9_-]{11})"),
];

static COMPILED_PATTERNS: LazyLock<Vec<(ReferenceShape, Regex)>> = LazyLock::new(|| {
    URL_PATTERNS
        .iter()
        .filter_map(|(shape, pattern)| Regex::new(pattern).ok().map(|re| (*shape, re)))
        .collect()
});

/// Check whether `candidate` is a bare canonical video id.
#[must_use]
pub fn is_video_id(candidate: &str) -> bool {
    candidate.len() == VIDEO_ID_LEN
        && candidate
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
}

/// Parse user input into a [`VideoReference`].
///
/// # Supported Inputs
///
/// - `dQw4w9WgXcQ` - bare id
/// - `https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=10`
/// - `https://youtu.be/dQw4w9WgXcQ`
/// - `https://www.youtube.com/embed/dQw4w9WgXcQ`
/// - `https://www.youtube.com/v/dQw4w9WgXcQ`
///
/// # Examples
///
/// ```rust
/// use tagdeck_core::video_id::{parse_video_reference, ReferenceShape};
///
/// let reference = parse_video_reference("https://youtu.be/dQw4w9WgXcQ").unwrap();
/// assert_eq!(reference.id, "dQw4w9WgXcQ");
/// assert_eq!(reference.shape, ReferenceShape::ShortLink);
///
/// assert!(parse_video_reference("not a url").is_err());
/// ```
pub fn parse_video_reference(input: &str) -> Result<VideoReference> {
    let raw = input.trim();

    if is_video_id(raw) {
        return Ok(VideoReference {
            id: raw.to_string(),
            shape: ReferenceShape::Bare,
        });
    }

    COMPILED_PATTERNS
        .iter()
        .find_map(|(shape, re)| {
            re.captures(raw)
                .and_then(|caps| caps.get(1))
                .map(|m| VideoReference {
                    id: m.as_str().to_string(),
                    shape: *shape,
                })
        })
        .ok_or_else(|| Error::InvalidVideoReference(raw.to_string()))
}

/// Extract the canonical video id from a bare id or a video URL.
pub fn extract_video_id(input: &str) -> Result<String> {
    parse_video_reference(input).map(|reference| reference.id)
}

/// Thumbnail URL for a video id.
///
/// Uses the `hqdefault` variant, which exists for every public video.
#[must_use]
pub fn thumbnail_url(video_id: &str) -> String {
    format!("https://img.youtube.com/vi/{video_id}/hqdefault.jpg")
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_id() {
        assert_eq!(extract_video_id("dQw4w9WgXcQ").unwrap(), "dQw4w9WgXcQ");
    }

    #[test]
    fn test_bare_id_is_trimmed() {
        let reference = parse_video_reference("  dQw4w9WgXcQ \n").unwrap();
        assert_eq!(reference.id, "dQw4w9WgXcQ");
        assert_eq!(reference.shape, ReferenceShape::Bare);
    }

    #[test]
    fn test_short_link() {
        let reference = parse_video_reference("https://youtu.be/dQw4w9WgXcQ").unwrap();
        assert_eq!(reference.id, "dQw4w9WgXcQ");
        assert_eq!(reference.shape, ReferenceShape::ShortLink);
    }

    #[test]
    fn test_watch_url_with_extra_params() {
        let reference =
            parse_video_reference("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=10").unwrap();
        assert_eq!(reference.id, "dQw4w9WgXcQ");
        assert_eq!(reference.shape, ReferenceShape::WatchQuery);
    }

    #[test]
    fn test_embed_url() {
        let reference =
            parse_video_reference("https://www.youtube.com/embed/GF_FPaRCUmE?autoplay=1").unwrap();
        assert_eq!(reference.id, "GF_FPaRCUmE");
        assert_eq!(reference.shape, ReferenceShape::Embed);
    }

    #[test]
    fn test_legacy_path() {
        let reference = parse_video_reference("http://www.youtube.com/v/mLuH-vBzGXE").unwrap();
        assert_eq!(reference.id, "mLuH-vBzGXE");
        assert_eq!(reference.shape, ReferenceShape::LegacyPath);
    }

    #[test]
    fn test_query_pattern_takes_precedence() {
        // A short link carrying a v= parameter resolves to the query value.
        let reference =
            parse_video_reference("https://youtu.be/dQw4w9WgXcQ?v=msdYmNX8KuQ").unwrap();
        assert_eq!(reference.id, "msdYmNX8KuQ");
        assert_eq!(reference.shape, ReferenceShape::WatchQuery);
    }

    #[test]
    fn test_invalid_inputs() {
        for input in [
            "not a url",
            "",
            "   ",
            "https://example.com/watch",
            "dQw4w9WgXc",
            "https://youtu.be/short",
        ] {
            let result = extract_video_id(input);
            assert!(
                matches!(result, Err(Error::InvalidVideoReference(_))),
                "expected failure for {input:?}"
            );
        }
    }

    #[test]
    fn test_is_video_id() {
        assert!(is_video_id("_yGifKCmHC0"));
        assert!(is_video_id("mLuH-vBzGXE"));
        assert!(!is_video_id("dQw4w9WgXc"));
        assert!(!is_video_id("dQw4w9WgXcQQ"));
        assert!(!is_video_id("dQw4w9WgX?Q"));
        assert!(!is_video_id("ÄQw4w9WgXc"));
    }

    #[test]
    fn test_thumbnail_url() {
        assert_eq!(
            thumbnail_url("dQw4w9WgXcQ"),
            "https://img.youtube.com/vi/dQw4w9WgXcQ/hqdefault.jpg"
        );
    }
}
