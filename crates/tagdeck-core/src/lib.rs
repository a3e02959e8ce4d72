//! `Tagdeck` Core Library
//!
//! This crate provides the platform-independent core of the `Tagdeck` viewer:
//! - Video id extraction from bare ids and `YouTube` URLs
//! - Tag filtering (AND semantics) over the playlist
//! - Playback cursor coordination (select, advance, reconciliation)
//! - The embedded player lifecycle and its one-shot script readiness gate
//! - View-state persistence and address-bar synchronization helpers
//! - Viewer configuration
//!
//! Nothing here touches the DOM; the `tagdeck-ui` crate supplies browser
//! implementations of [`PlayerWidget`] and [`KeyValueStore`].
//!
//! # Error Handling
//!
//! Fallible operations return [`Result`] with the crate's [`Error`] type.
//!
//! ```rust
//! use tagdeck_core::{PlaylistCoordinator, sample_entries};
//!
//! let mut playlist = PlaylistCoordinator::new(sample_entries());
//! playlist.toggle_tag("jpop");
//! assert!(playlist.filtered().iter().all(|e| e.has_tag("jpop")));
//! ```

pub mod address;
pub mod catalog;
pub mod config;
pub mod coordinator;
pub mod entry;
pub mod error;
pub mod filter;
pub mod player;
pub mod readiness;
pub mod storage;
pub mod video_id;

pub use address::{DEFAULT_ADDRESS_PARAM, query_with_video_id, video_id_from_query};
pub use catalog::sample_entries;
pub use config::{PlayerOptions, PlayerVars, ViewerConfig};
pub use coordinator::{PlaylistCoordinator, Reconciliation};
pub use entry::{Entry, parse_tag_list};
pub use error::{Error, Result, WidgetError};
pub use filter::{TagSelection, collect_tags};
pub use player::{
    AdapterState, PlayOutcome, PlaybackEvent, PlaybackState, PlayerAdapter, PlayerWidget,
    state_change_event,
};
pub use readiness::{LoadState, ReadinessGate};
pub use storage::{
    DEFAULT_STORAGE_KEY, KeyValueStore, MemoryStore, UnavailableStore, ViewSnapshot,
    ViewStateStore,
};
pub use video_id::{
    ReferenceShape, VIDEO_ID_LEN, VideoReference, extract_video_id, is_video_id,
    parse_video_reference, thumbnail_url,
};
