//! `Tagdeck` UI - Leptos-based user interface.
//!
//! This crate provides the browser front end for `Tagdeck`: the components,
//! the `YouTube` IFrame API bindings, and the browser storage and history
//! glue around [`tagdeck_core`].

// Component files tend to be large by nature - they contain view logic
#![allow(clippy::too_many_lines)]
// Pass by value suggestions for small types like bool - not always clearer
#![allow(clippy::trivially_copy_pass_by_ref)]

pub mod app;
pub mod browser;
pub mod components;
pub mod logging;
pub mod theme;
pub mod youtube_api;

pub use app::App;
