//! Playlist rows: thumbnail, title, and tag chips.

use leptos::prelude::*;
use tagdeck_core::Entry;

/// Single playlist row component.
#[component]

pub fn VideoRow(
    /// The entry to display.
    entry: Entry,
    /// Whether this row is the current entry.
    #[prop(into)]
    active: Signal<bool>,
    /// Callback with the entry id when the row is clicked.
    on_select: Callback<String>,
) -> impl IntoView {
    let title = entry.display_title().to_string();
    let alt = title.clone();
    let tooltip = title.clone();
    let thumbnail = entry.thumbnail_url();
    let click_id = entry.id.clone();
    let key_id = entry.id.clone();

    view! {
        <div
            class="video-row"
            class:active=move || active.get()
            role="button"
            tabindex="0"
            on:click=move |_| on_select.run(click_id.clone())
            on:keydown=move |e| {
                let key = e.key();
                if key == "Enter" || key == " " {
                    e.prevent_default();
                    on_select.run(key_id.clone());
                }
            }
        >
            <img class="video-thumbnail" src=thumbnail alt=alt loading="lazy" />
            <div class="video-info">
                <div class="video-title" title=tooltip>{title}</div>
                <div class="video-tags">
                    {entry
                        .tags
                        .into_iter()
                        .map(|tag| view! { <span class="tag-chip">{tag}</span> })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

/// Filtered playlist with the current entry highlighted.
#[component]

pub fn VideoList(
    /// Entries to display, already filtered.
    #[prop(into)]
    entries: Signal<Vec<Entry>>,
    /// Id of the current entry.
    #[prop(into)]
    current_id: Signal<Option<String>>,
    /// Callback with the entry id when a row is clicked.
    on_select: Callback<String>,
) -> impl IntoView {
    let count = move || entries.with(Vec::len);

    view! {
        <div class="video-list">
            <div class="video-count">{move || format!("{} videos", count())}</div>
            <div class="video-list-scroll">
                <Show
                    when=move || { count() > 0 }
                    fallback=|| view! { <div class="video-list-empty">"No videos."</div> }
                >
                    <For
                        each=move || entries.get()
                        key=|entry| entry.id.clone()
                        children=move |entry| {
                            let id = entry.id.clone();
                            let active = Signal::derive(move || {
                                current_id.with(|current| current.as_deref() == Some(id.as_str()))
                            });
                            view! { <VideoRow entry=entry active=active on_select=on_select /> }
                        }
                    />
                </Show>
            </div>
        </div>
    }
}
