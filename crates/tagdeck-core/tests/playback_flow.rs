//! Integration tests for `Tagdeck` core workflows.
//!
//! These tests drive the coordinator, the player adapter, and view-state
//! persistence together the way the UI does:
//! - cursor changes are forwarded to the adapter
//! - completion events advance the cursor
//! - every state change is persisted and restored on the next "page load"

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::cell::RefCell;
use std::rc::Rc;

use tagdeck_core::{
    Entry, Error, MemoryStore, PlayOutcome, PlaybackEvent, PlayerAdapter, PlayerWidget,
    PlaylistCoordinator, ViewStateStore, ViewerConfig, WidgetError, query_with_video_id,
    sample_entries, state_change_event, video_id_from_query,
};

// =============================================================================
// Test Fixtures and Utilities
// =============================================================================

/// Widget command as observed by [`RecordingWidget`].
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Load(String),
    Play,
    Stop,
}

/// Player widget that records every command it receives.
#[derive(Clone, Default)]
struct RecordingWidget {
    log: Rc<RefCell<Vec<Command>>>,
    fail_loads: bool,
}

impl RecordingWidget {
    fn commands(&self) -> Vec<Command> {
        self.log.borrow().clone()
    }
}

impl PlayerWidget for RecordingWidget {
    fn load_by_id(&self, video_id: &str) -> Result<(), WidgetError> {
        self.log
            .borrow_mut()
            .push(Command::Load(video_id.to_string()));
        if self.fail_loads {
            Err(WidgetError::new("loadVideoById", "video unavailable"))
        } else {
            Ok(())
        }
    }

    fn play(&self) -> Result<(), WidgetError> {
        self.log.borrow_mut().push(Command::Play);
        Ok(())
    }

    fn stop(&self) -> Result<(), WidgetError> {
        self.log.borrow_mut().push(Command::Stop);
        Ok(())
    }
}

/// Coordinator plus adapter, wired the way the page wires them.
struct Session {
    playlist: PlaylistCoordinator,
    player: PlayerAdapter<RecordingWidget>,
}

impl Session {
    fn new() -> Self {
        Self {
            playlist: PlaylistCoordinator::new(sample_entries()),
            player: PlayerAdapter::new(),
        }
    }

    /// Forward the cursor to the player, as the cursor effect does.
    fn sync_player(&mut self) -> PlayOutcome {
        let cursor = self.playlist.cursor().map(str::to_string);
        self.player.request_play(cursor.as_deref())
    }

    /// Deliver a widget state change.
    fn state_change(&mut self, code: i32) {
        if state_change_event(code) == Some(PlaybackEvent::Completed) {
            self.playlist.advance();
            self.sync_player();
        }
    }
}

// =============================================================================
// Playback Workflow Tests
// =============================================================================

#[test]
fn test_early_cursor_changes_collapse_into_one_load() {
    let mut session = Session::new();
    assert!(session.player.begin_loading());

    assert_eq!(session.sync_player(), PlayOutcome::Deferred);
    session.playlist.select("GF_FPaRCUmE");
    assert_eq!(session.sync_player(), PlayOutcome::Deferred);

    let widget = RecordingWidget::default();
    session.player.attach(widget.clone());

    assert_eq!(
        widget.commands(),
        vec![Command::Load("GF_FPaRCUmE".to_string()), Command::Play]
    );
}

#[test]
fn test_completion_advances_through_filtered_list_and_wraps() {
    let mut session = Session::new();
    let widget = RecordingWidget::default();
    session.player.begin_loading();
    session.player.attach(widget.clone());

    session.playlist.toggle_tag("pop");
    let filtered: Vec<String> = session
        .playlist
        .filtered()
        .iter()
        .map(|e| e.id.clone())
        .collect();
    assert_eq!(filtered, vec!["0unIGP_fhYA", "mLuH-vBzGXE", "AfxsFsLhL04"]);
    assert_eq!(session.playlist.cursor(), Some("0unIGP_fhYA"));
    session.sync_player();

    session.state_change(1); // playing
    session.state_change(0); // ended
    assert_eq!(session.playlist.cursor(), Some("mLuH-vBzGXE"));
    session.state_change(0);
    session.state_change(0);
    assert_eq!(session.playlist.cursor(), Some("0unIGP_fhYA"));

    let loads: Vec<Command> = widget
        .commands()
        .into_iter()
        .filter(|c| matches!(c, Command::Load(_)))
        .collect();
    assert_eq!(
        loads,
        vec![
            Command::Load("0unIGP_fhYA".to_string()),
            Command::Load("mLuH-vBzGXE".to_string()),
            Command::Load("AfxsFsLhL04".to_string()),
            Command::Load("0unIGP_fhYA".to_string()),
        ]
    );
}

#[test]
fn test_empty_filter_stops_player() {
    let mut session = Session::new();
    let widget = RecordingWidget::default();
    session.player.attach(widget.clone());

    session.playlist.toggle_tag("jpop");
    session.playlist.toggle_tag("kpop");
    assert_eq!(session.playlist.cursor(), None);
    assert_eq!(session.sync_player(), PlayOutcome::Stopped);

    // Completion with nothing to play leaves everything as is.
    session.state_change(0);
    assert_eq!(session.playlist.cursor(), None);
    assert_eq!(widget.commands(), vec![Command::Stop, Command::Stop]);
}

#[test]
fn test_widget_failures_do_not_break_the_session() {
    let mut session = Session::new();
    let widget = RecordingWidget {
        fail_loads: true,
        ..RecordingWidget::default()
    };
    session.player.attach(widget.clone());

    assert_eq!(session.sync_player(), PlayOutcome::Started);
    session.state_change(0);
    assert_eq!(session.playlist.cursor(), Some("ewkSCKdKl2Y"));

    // Load failed each time, so play was never reached.
    assert!(!widget.commands().contains(&Command::Play));
}

// =============================================================================
// Form Submission Tests
// =============================================================================

#[test]
fn test_submitted_entry_joins_the_playlist() {
    let mut session = Session::new();
    let entry = Entry::from_submission("https://youtu.be/dQw4w9WgXcQ", "pop, 80s").unwrap();

    session.playlist.add_entry(entry).unwrap();
    assert!(session.playlist.all_tags().contains(&"80s".to_string()));

    session.playlist.toggle_tag("80s");
    assert_eq!(session.playlist.cursor(), Some("dQw4w9WgXcQ"));
}

#[test]
fn test_invalid_submission_creates_nothing() {
    let session = Session::new();
    let before = session.playlist.entries().len();

    let result = Entry::from_submission("not a url", "pop");
    assert!(matches!(result, Err(Error::InvalidVideoReference(_))));
    assert_eq!(session.playlist.entries().len(), before);
}

#[test]
fn test_resubmitting_a_sample_is_rejected() {
    let mut session = Session::new();
    let entry =
        Entry::from_submission("https://www.youtube.com/watch?v=msdYmNX8KuQ", "").unwrap();
    assert!(matches!(
        session.playlist.add_entry(entry),
        Err(Error::DuplicateEntry(_))
    ));
}

// =============================================================================
// Persistence and Address Bar Tests
// =============================================================================

#[test]
fn test_view_state_survives_reload() {
    let config = ViewerConfig::default();
    let store = ViewStateStore::new(MemoryStore::new(), config.storage_key.clone());

    let mut first_load = PlaylistCoordinator::new(sample_entries());
    first_load.toggle_tag("신남");
    first_load.advance();
    store.save(&first_load.snapshot(0.0));

    let mut second_load = PlaylistCoordinator::new(sample_entries());
    let snapshot = store.load().expect("snapshot stored");
    second_load.apply_snapshot(&snapshot);

    assert_eq!(second_load.selection(), first_load.selection());
    assert_eq!(second_load.cursor(), first_load.cursor());
}

#[test]
fn test_address_round_trip() {
    let config = ViewerConfig::default();
    let mut playlist = PlaylistCoordinator::new(sample_entries());
    playlist.select("nI61IxcCiXc");

    let search = query_with_video_id("?ref=share", &config.address_param, playlist.cursor());
    assert_eq!(search, "?ref=share&v=nI61IxcCiXc");

    let mut reloaded = PlaylistCoordinator::new(sample_entries());
    let id = video_id_from_query(&search, &config.address_param).unwrap();
    assert!(reloaded.restore_from_address(&id));
    assert_eq!(reloaded.cursor(), Some("nI61IxcCiXc"));
}

#[test]
fn test_address_with_unknown_id_keeps_default_cursor() {
    let mut playlist = PlaylistCoordinator::new(sample_entries());
    let id = video_id_from_query("?v=dQw4w9WgXcQ", "v").unwrap();

    assert!(!playlist.restore_from_address(&id));
    assert_eq!(playlist.cursor(), Some("msdYmNX8KuQ"));
}
