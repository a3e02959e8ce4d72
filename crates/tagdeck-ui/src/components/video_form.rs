//! Form for adding an entry by URL or id.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use tagdeck_core::Entry;

use crate::browser;

/// Alert shown when the submitted reference is not a video.
pub const INVALID_REFERENCE_MESSAGE: &str = "Enter a valid YouTube URL or video ID.";

/// URL-or-id input plus comma-separated tags.
#[component]

pub fn VideoForm(
    /// Receives the new entry; returns `true` if it was accepted.
    on_add: Callback<Entry, bool>,
) -> impl IntoView {
    let (url, set_url) = signal(String::new());
    let (tag_input, set_tag_input) = signal(String::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match Entry::from_submission(&url.get_untracked(), &tag_input.get_untracked()) {
            Ok(entry) => {
                if on_add.run(entry) {
                    set_url.set(String::new());
                    set_tag_input.set(String::new());
                }
            }
            Err(e) => {
                leptos::logging::warn!("Rejected submission: {}", e);
                browser::alert(INVALID_REFERENCE_MESSAGE);
            }
        }
    };

    view! {
        <form class="video-form" on:submit=on_submit>
            <label class="form-label" for="video-form-url">"YouTube URL or ID"</label>
            <input
                id="video-form-url"
                class="form-input"
                type="text"
                placeholder="https://youtu.be/..."
                prop:value=url
                on:input=move |ev| set_url.set(event_target_value(&ev))
            />
            <label class="form-label" for="video-form-tags">"Tags (comma separated)"</label>
            <div class="form-row">
                <input
                    id="video-form-tags"
                    class="form-input"
                    type="text"
                    placeholder="tag1, tag2"
                    prop:value=tag_input
                    on:input=move |ev| set_tag_input.set(event_target_value(&ev))
                />
                <button type="submit" class="btn btn-primary">"Add"</button>
            </div>
        </form>
    }
}
