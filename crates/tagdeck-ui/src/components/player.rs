//! Embedded video player component.
//!
//! Owns one [`PlayerAdapter`]. The widget is created once after the
//! container mounts; until it reports ready, cursor changes collapse into a
//! single pending request.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use tagdeck_core::{PlayerAdapter, PlayerOptions, state_change_event};

use crate::youtube_api::{self, YtWidget};

/// Embedded player driven by the playback cursor.
#[component]

pub fn Player(
    /// Id of the video to play; `None` stops playback.
    #[prop(into)]
    current_id: Signal<Option<String>>,
    /// Options passed to the widget on creation.
    options: PlayerOptions,
    /// Called each time the current video plays to its end.
    on_ended: Callback<()>,
) -> impl IntoView {
    let container = NodeRef::<html::Div>::new();
    let adapter = Rc::new(RefCell::new(PlayerAdapter::<YtWidget>::new()));

    // Create the widget once the container is in the DOM
    let create_adapter = Rc::clone(&adapter);
    Effect::new(move || {
        let Some(element) = container.get() else {
            return;
        };
        if !create_adapter.borrow_mut().begin_loading() {
            return;
        }

        let adapter = Rc::clone(&create_adapter);
        let options = options.clone();
        spawn_local(async move {
            youtube_api::ensure_loaded().await;

            let ready_adapter = Rc::clone(&adapter);
            let result = youtube_api::create_player(
                &element,
                &options,
                move |widget| ready_adapter.borrow_mut().attach(widget),
                move |code| {
                    if state_change_event(code).is_some() {
                        on_ended.run(());
                    }
                },
            );
            if let Err(e) = result {
                leptos::logging::error!("Failed to create player: {}", e);
            }
        });
    });

    // Forward every cursor change to the adapter
    Effect::new(move || {
        let id = current_id.get();
        let outcome = adapter.borrow_mut().request_play(id.as_deref());
        leptos::logging::log!("Play request {:?}: {:?}", id, outcome);
    });

    view! {
        <div class="player-frame">
            <div node_ref=container class="player-mount" id="yt-player"></div>
        </div>
    }
}
