//! Error types for Tagdeck core operations.

use thiserror::Error;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in Tagdeck core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The input is neither a bare video id nor a recognised video URL.
    #[error("Invalid video URL or id: {0}")]
    InvalidVideoReference(String),

    /// An entry with the same video id is already in the playlist.
    #[error("Video already in playlist: {0}")]
    DuplicateEntry(String),

    /// Key-value storage could not be read or written.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A command issued to the embedded player widget failed.
    #[error(transparent)]
    Widget(#[from] WidgetError),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Failure reported by the embedded player widget for a single command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Player command `{command}` failed: {message}")]
pub struct WidgetError {
    /// Name of the widget command that failed.
    pub command: &'static str,
    /// Message reported by the widget.
    pub message: String,
}

impl WidgetError {
    /// Create a widget error for the given command.
    pub fn new(command: &'static str, message: impl Into<String>) -> Self {
        Self {
            command,
            message: message.into(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidVideoReference("not a url".to_string());
        assert_eq!(err.to_string(), "Invalid video URL or id: not a url");
    }

    #[test]
    fn test_duplicate_entry_display() {
        let err = Error::DuplicateEntry("dQw4w9WgXcQ".to_string());
        assert_eq!(err.to_string(), "Video already in playlist: dQw4w9WgXcQ");
    }

    #[test]
    fn test_widget_error_is_transparent() {
        let err: Error = WidgetError::new("loadVideoById", "video unavailable").into();
        assert!(matches!(err, Error::Widget(_)));
        assert_eq!(
            err.to_string(),
            "Player command `loadVideoById` failed: video unavailable"
        );
    }

    #[test]
    fn test_serde_error_conversion() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = parse_err.into();
        assert!(matches!(err, Error::Serialization(_)));
    }
}
