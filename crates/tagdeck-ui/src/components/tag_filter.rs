//! Tag filter component.
//!
//! One toggle button per known tag. Selected tags narrow the playlist with
//! AND semantics.

use leptos::prelude::*;

/// Toggle buttons for every known tag.
#[component]

pub fn TagFilter(
    /// Every tag present in the playlist, sorted.
    #[prop(into)]
    all_tags: Signal<Vec<String>>,
    /// Currently selected tags.
    #[prop(into)]
    selected: Signal<Vec<String>>,
    /// Callback when a tag button is pressed.
    on_toggle: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="tag-filter">
            <h3 class="tag-filter-title">"Filter by tags"</h3>
            <div class="tag-filter-buttons">
                <Show when=move || all_tags.with(Vec::is_empty)>
                    <span class="tag-filter-empty">"No tags"</span>
                </Show>
                <For
                    each=move || all_tags.get()
                    key=Clone::clone
                    children=move |tag| {
                        let label = tag.clone();
                        let is_selected = {
                            let tag = tag.clone();
                            move || selected.with(|s| s.contains(&tag))
                        };
                        let pressed = is_selected.clone();
                        view! {
                            <button
                                type="button"
                                class="tag-button"
                                class:selected=is_selected
                                aria-pressed=move || pressed().to_string()
                                on:click=move |_| on_toggle.run(tag.clone())
                            >
                                {label}
                            </button>
                        }
                    }
                />
            </div>
        </div>
    }
}
