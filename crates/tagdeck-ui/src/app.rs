//! Main application component.

use leptos::prelude::*;
use tagdeck_core::{
    Entry, KeyValueStore, PlaylistCoordinator, ViewStateStore, ViewerConfig, query_with_video_id,
    sample_entries, video_id_from_query,
};

use crate::browser::{self, BrowserStorage};
use crate::components::{Header, Player, TagFilter, VideoForm, VideoList};
use crate::theme::generate_css_variables;

/// Main application component.
#[component]

pub fn App() -> impl IntoView {
    // CSS variables
    let css_vars = generate_css_variables();
    let config = ViewerConfig::load_or_default(browser::embedded_config().as_deref());

    view! {
        <style>{css_vars}</style>
        <style>{include_str!("../styles/main.css")}</style>
        <Viewer config=config />
    }
}

/// Build the startup playlist.
///
/// Sample catalog first, then the persisted view, then the address bar. An
/// id in the address bar is an explicit selection and wins over the stored
/// cursor.
fn initial_playlist<S: KeyValueStore>(
    config: &ViewerConfig,
    store: Option<&ViewStateStore<S>>,
    search: &str,
) -> PlaylistCoordinator {
    let mut playlist = PlaylistCoordinator::new(sample_entries());

    if let Some(snapshot) = store.and_then(ViewStateStore::load) {
        playlist.apply_snapshot(&snapshot);
    }

    if config.sync_address
        && let Some(id) = video_id_from_query(search, &config.address_param)
    {
        playlist.restore_from_address(&id);
    }

    playlist
}

/// Player, tag filter, and playlist wired to one coordinator.
#[component]
fn Viewer(config: ViewerConfig) -> impl IntoView {
    let store = config
        .persist_view_state
        .then(|| ViewStateStore::new(BrowserStorage, config.storage_key.clone()));
    let playlist = RwSignal::new(initial_playlist(
        &config,
        store.as_ref(),
        &browser::location_search(),
    ));

    // Derived views
    let current_id = Memo::new(move |_| playlist.with(|p| p.cursor().map(str::to_string)));
    let filtered = Memo::new(move |_| {
        playlist.with(|p| p.filtered().into_iter().cloned().collect::<Vec<Entry>>())
    });
    let all_tags = Memo::new(move |_| playlist.with(PlaylistCoordinator::all_tags));
    let selected_tags = Memo::new(move |_| playlist.with(|p| p.selection().as_slice().to_vec()));

    // Persist the view after every change
    if let Some(store) = store {
        Effect::new(move || {
            let snapshot = playlist.with(|p| p.snapshot(0.0));
            store.save(&snapshot);
        });
    }

    // Mirror the cursor into the address bar, and follow it back on navigation
    if config.sync_address {
        let param = config.address_param.clone();
        Effect::new(move || {
            let id = current_id.get();
            let search = query_with_video_id(&browser::location_search(), &param, id.as_deref());
            browser::replace_search(&search);
        });

        let param = config.address_param.clone();
        browser::on_popstate(move || {
            if let Some(id) = video_id_from_query(&browser::location_search(), &param) {
                playlist.update(|p| {
                    p.restore_from_address(&id);
                });
            }
        });
    }

    let on_toggle = Callback::new(move |tag: String| {
        playlist.update(|p| {
            p.toggle_tag(&tag);
        });
    });

    let on_select = Callback::new(move |id: String| {
        playlist.update(|p| p.select(id));
    });

    let on_ended = Callback::new(move |()| {
        playlist.update(|p| {
            p.advance();
        });
    });

    let on_add = Callback::new(move |entry: Entry| {
        let id = entry.id.clone();
        match playlist.try_update(|p| p.add_entry(entry)) {
            Some(Ok(_)) => {
                leptos::logging::log!("Added {} to the playlist", id);
                true
            }
            Some(Err(e)) => {
                leptos::logging::warn!("Rejected entry {}: {}", id, e);
                browser::alert(&e.to_string());
                false
            }
            None => false,
        }
    });

    view! {
        <div class="app-shell">
            <Header title="Tagdeck" subtitle="A tag-filtered YouTube playlist." />

            <div class="app-grid">
                <section class="player-panel">
                    <div class="panel">
                        <h2 class="panel-title">"Player"</h2>
                        <Player
                            current_id=current_id
                            options=config.player.clone()
                            on_ended=on_ended
                        />
                    </div>
                </section>

                <aside class="playlist-panel">
                    <div class="panel">
                        <h2 class="panel-title">"Playlist"</h2>
                        <TagFilter
                            all_tags=all_tags
                            selected=selected_tags
                            on_toggle=on_toggle
                        />
                        <VideoList
                            entries=filtered
                            current_id=current_id
                            on_select=on_select
                        />
                        <VideoForm on_add=on_add />
                    </div>
                </aside>
            </div>

            <footer class="app-footer">
                "Pick tags to narrow the list. Playback continues through the filtered videos."
            </footer>
        </div>
    }
}
