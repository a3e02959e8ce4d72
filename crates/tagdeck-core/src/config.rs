//! Viewer configuration.
//!
//! Defaults are compiled in. A host page may embed a JSON document to
//! override any subset of fields; missing fields keep their defaults.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::address::DEFAULT_ADDRESS_PARAM;
use crate::error::{Error, Result};
use crate::storage::DEFAULT_STORAGE_KEY;

/// Options passed to the embedded player on creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PlayerOptions {
    /// Show the player's native controls.
    pub controls: bool,
    /// Allow related videos from other channels at the end of playback.
    pub related_videos: bool,
    /// Reduce branding in the player chrome.
    pub modest_branding: bool,
}

impl Default for PlayerOptions {
    fn default() -> Self {
        Self {
            controls: true,
            related_videos: false,
            modest_branding: true,
        }
    }
}

impl PlayerOptions {
    /// The options as the widget's numeric `playerVars`.
    #[must_use]
    pub fn player_vars(&self) -> PlayerVars {
        PlayerVars {
            controls: u8::from(self.controls),
            rel: u8::from(self.related_videos),
            modestbranding: u8::from(self.modest_branding),
        }
    }
}

/// Player parameters in the widget's wire format.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct PlayerVars {
    /// `1` to show controls.
    pub controls: u8,
    /// `1` to allow related videos.
    pub rel: u8,
    /// `1` for modest branding.
    pub modestbranding: u8,
}

/// Viewer configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ViewerConfig {
    /// Storage key for the persisted view snapshot.
    pub storage_key: String,
    /// Whether the view snapshot is persisted.
    pub persist_view_state: bool,
    /// Query parameter mirroring the current entry.
    pub address_param: String,
    /// Whether the current entry is mirrored into the address bar.
    pub sync_address: bool,
    /// Embedded player options.
    pub player: PlayerOptions,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            persist_view_state: true,
            address_param: DEFAULT_ADDRESS_PARAM.to_string(),
            sync_address: true,
            player: PlayerOptions::default(),
        }
    }
}

impl ViewerConfig {
    /// Parse a configuration document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid JSON, or if it names an
    /// empty storage key or address parameter.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)
            .map_err(|e| Error::Configuration(format!("Failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse an optional configuration document, falling back to defaults.
    #[must_use]
    pub fn load_or_default(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
            debug!("No embedded config, using defaults");
            return Self::default();
        };

        match Self::from_json(raw) {
            Ok(config) => {
                debug!(?config, "Loaded embedded config");
                config
            }
            Err(e) => {
                warn!("Ignoring embedded config: {}", e);
                Self::default()
            }
        }
    }

    fn validate(&self) -> Result<()> {
        if self.storage_key.trim().is_empty() {
            return Err(Error::Configuration(
                "storage_key cannot be empty".to_string(),
            ));
        }
        if self.address_param.trim().is_empty()
            || self.address_param.contains(['&', '=', '?', '#'])
        {
            return Err(Error::Configuration(format!(
                "address_param is not a valid query parameter name: {:?}",
                self.address_param
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ViewerConfig::default();
        assert_eq!(config.storage_key, "tagdeck.view-state");
        assert_eq!(config.address_param, "v");
        assert!(config.persist_view_state);
        assert!(config.sync_address);
    }

    #[test]
    fn test_partial_override() {
        let config =
            ViewerConfig::from_json(r#"{"sync_address": false, "player": {"controls": false}}"#)
                .expect("valid config");

        assert!(!config.sync_address);
        assert!(!config.player.controls);
        assert!(config.player.modest_branding);
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
    }

    #[test]
    fn test_invalid_json_is_configuration_error() {
        let result = ViewerConfig::from_json("{");
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn test_rejects_bad_param_name() {
        assert!(ViewerConfig::from_json(r#"{"address_param": "a&b"}"#).is_err());
        assert!(ViewerConfig::from_json(r#"{"address_param": " "}"#).is_err());
        assert!(ViewerConfig::from_json(r#"{"storage_key": ""}"#).is_err());
    }

    #[test]
    fn test_load_or_default_falls_back() {
        assert_eq!(ViewerConfig::load_or_default(None), ViewerConfig::default());
        assert_eq!(
            ViewerConfig::load_or_default(Some("  ")),
            ViewerConfig::default()
        );
        assert_eq!(
            ViewerConfig::load_or_default(Some("not json")),
            ViewerConfig::default()
        );

        let custom = ViewerConfig::load_or_default(Some(r#"{"storage_key": "mine"}"#));
        assert_eq!(custom.storage_key, "mine");
    }

    #[test]
    fn test_player_vars() {
        let vars = PlayerOptions::default().player_vars();
        assert_eq!(
            vars,
            PlayerVars {
                controls: 1,
                rel: 0,
                modestbranding: 1,
            }
        );
        let json = serde_json::to_value(vars).unwrap();
        assert_eq!(json["modestbranding"], 1);
    }
}
