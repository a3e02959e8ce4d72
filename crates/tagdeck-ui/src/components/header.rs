//! Header component.

use leptos::prelude::*;

/// Application header component.
#[component]

pub fn Header(
    /// Page title.
    #[prop(into)]
    title: String,
    /// Line shown under the title.
    #[prop(optional, into)]
    subtitle: Option<String>,
) -> impl IntoView {
    view! {
        <header class="app-header">
            <h1 class="app-title">{title}</h1>
            {subtitle.map(|s| view! { <p class="app-subtitle">{s}</p> })}
        </header>
    }
}
