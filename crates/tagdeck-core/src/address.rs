//! Address-bar query parameter handling.
//!
//! The current entry is mirrored into a single query parameter so the page
//! can be shared or reloaded on the same video. These helpers work on the
//! raw `location.search` string so they stay testable outside a browser.
//! Parsing and serialization follow `application/x-www-form-urlencoded`, the
//! same rules the browser's `URLSearchParams` applies.

use url::form_urlencoded;

use crate::video_id::is_video_id;

/// Default query parameter carrying the current video id.
pub const DEFAULT_ADDRESS_PARAM: &str = "v";

/// Read a video id from `param` in a query string.
///
/// Accepts the string with or without its leading `?`. Returns `None` when
/// the parameter is missing or does not hold a bare video id.
///
/// ```rust
/// use tagdeck_core::address::video_id_from_query;
///
/// assert_eq!(
///     video_id_from_query("?list=x&v=dQw4w9WgXcQ", "v").as_deref(),
///     Some("dQw4w9WgXcQ")
/// );
/// assert_eq!(video_id_from_query("?v=bogus", "v"), None);
/// ```
#[must_use]
pub fn video_id_from_query(search: &str, param: &str) -> Option<String> {
    form_urlencoded::parse(trim_query(search).as_bytes())
        .find(|(key, _)| key == param)
        .map(|(_, value)| value.into_owned())
        .filter(|value| is_video_id(value))
}

/// Rewrite a query string so that `param` holds `video_id`.
///
/// Keys and values are decoded before comparison and re-encoded on output.
/// Other parameters keep their order. With `None` the parameter is removed.
/// The result starts with `?` unless it is empty.
#[must_use]
pub fn query_with_video_id(search: &str, param: &str, video_id: Option<&str>) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    let mut written = false;
    let mut replaced = false;

    for (key, value) in form_urlencoded::parse(trim_query(search).as_bytes()) {
        if key != param {
            query.append_pair(&key, &value);
            written = true;
            continue;
        }
        // First occurrence is rewritten in place, repeats are dropped
        if let (Some(id), false) = (video_id, replaced) {
            query.append_pair(param, id);
            written = true;
        }
        replaced = true;
    }

    if let (Some(id), false) = (video_id, replaced) {
        query.append_pair(param, id);
        written = true;
    }

    if written {
        format!("?{}", query.finish())
    } else {
        String::new()
    }
}

fn trim_query(search: &str) -> &str {
    search.strip_prefix('?').unwrap_or(search)
}
