//! Embedded player lifecycle.
//!
//! The external widget is created asynchronously and may not exist yet when
//! the first play request arrives. [`PlayerAdapter`] buffers at most one such
//! request and replays it once the widget reports ready. Commands issued to
//! the widget never fail the caller: the widget's own errors (removed or
//! region-locked videos, embed restrictions) are logged and dropped.

use tracing::{debug, warn};

use crate::error::WidgetError;

/// Capability set of the embedded player widget.
///
/// This trait allows for mocking in tests.
#[cfg_attr(test, mockall::automock)]
pub trait PlayerWidget {
    /// Load the video with the given id from its start.
    fn load_by_id(&self, video_id: &str) -> Result<(), WidgetError>;

    /// Start or resume playback.
    fn play(&self) -> Result<(), WidgetError>;

    /// Stop playback.
    fn stop(&self) -> Result<(), WidgetError>;
}

/// Playback state reported by the widget's state-change event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// Not started yet.
    Unstarted,
    /// Reached the end of the video.
    Ended,
    /// Playing.
    Playing,
    /// Paused.
    Paused,
    /// Buffering.
    Buffering,
    /// Cued and waiting for play.
    Cued,
    /// A code this adapter does not know.
    Unknown(i32),
}

impl PlaybackState {
    /// Map the widget's numeric state code.
    #[must_use]
    pub const fn from_code(code: i32) -> Self {
        match code {
            -1 => Self::Unstarted,
            0 => Self::Ended,
            1 => Self::Playing,
            2 => Self::Paused,
            3 => Self::Buffering,
            5 => Self::Cued,
            other => Self::Unknown(other),
        }
    }
}

/// Events the adapter surfaces to its owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackEvent {
    /// The current video played to its natural end.
    Completed,
}

/// What [`PlayerAdapter::request_play`] did with a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    /// Load and play were issued to the widget.
    Started,
    /// Stop was issued to the widget.
    Stopped,
    /// The widget is not ready; the request is pending.
    Deferred,
}

/// Lifecycle of the widget owned by an adapter.
#[derive(Debug)]
pub enum AdapterState<W> {
    /// No widget has been requested.
    Uninitialized,
    /// Widget creation has started but it has not reported ready.
    Loading,
    /// The widget is ready for commands.
    Ready(W),
}

/// Drives one embedded player widget from the playback cursor.
#[derive(Debug)]
pub struct PlayerAdapter<W> {
    state: AdapterState<W>,
    pending: Option<String>,
}

impl<W> Default for PlayerAdapter<W> {
    fn default() -> Self {
        Self {
            state: AdapterState::Uninitialized,
            pending: None,
        }
    }
}

impl<W: PlayerWidget> PlayerAdapter<W> {
    /// Create an adapter with no widget.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> &AdapterState<W> {
        &self.state
    }

    /// Whether the widget is ready for commands.
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self.state, AdapterState::Ready(_))
    }

    /// The buffered request waiting for readiness, if any.
    #[must_use]
    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    /// Claim widget creation.
    ///
    /// Returns `true` only the first time, so the owner creates at most one
    /// widget.
    pub fn begin_loading(&mut self) -> bool {
        if matches!(self.state, AdapterState::Uninitialized) {
            self.state = AdapterState::Loading;
            true
        } else {
            false
        }
    }

    /// Handle the widget's ready event.
    ///
    /// Replays the pending request, if any.
    pub fn attach(&mut self, widget: W) {
        debug!("Player widget ready");
        if let Some(video_id) = self.pending.take() {
            debug!(video_id = %video_id, "Replaying pending load");
            load_and_play(&widget, &video_id);
        }
        self.state = AdapterState::Ready(widget);
    }

    /// Play `video_id`, or stop playback for `None`.
    ///
    /// Before the widget is ready the request replaces any pending one.
    pub fn request_play(&mut self, video_id: Option<&str>) -> PlayOutcome {
        let AdapterState::Ready(widget) = &self.state else {
            debug!(video_id = ?video_id, "Player not ready, deferring request");
            self.pending = video_id.map(str::to_string);
            return PlayOutcome::Deferred;
        };

        match video_id {
            Some(id) => {
                load_and_play(widget, id);
                PlayOutcome::Started
            }
            None => {
                if let Err(e) = widget.stop() {
                    warn!("Ignoring player error: {}", e);
                }
                PlayOutcome::Stopped
            }
        }
    }
}

/// Translate a widget state-change code into an adapter event.
///
/// Widget callbacks call this directly; they cannot borrow the adapter.
#[must_use]
pub const fn state_change_event(code: i32) -> Option<PlaybackEvent> {
    match PlaybackState::from_code(code) {
        PlaybackState::Ended => Some(PlaybackEvent::Completed),
        _ => None,
    }
}

fn load_and_play<W: PlayerWidget>(widget: &W, video_id: &str) {
    let result = widget.load_by_id(video_id).and_then(|()| widget.play());
    if let Err(e) = result {
        warn!(video_id, "Ignoring player error: {}", e);
    }
}
