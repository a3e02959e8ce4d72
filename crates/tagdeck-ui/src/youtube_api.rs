//! `YouTube` IFrame API bindings for WASM.
//!
//! The API script is injected at most once per page. Its global
//! `onYouTubeIframeAPIReady` hook releases the shared [`ReadinessGate`]; a
//! hook installed earlier by someone else is still called first.

use std::sync::LazyLock;

use serde::Serialize;
use tagdeck_core::{PlayerOptions, PlayerVars, PlayerWidget, ReadinessGate, WidgetError};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::browser::js_error_message;

/// Source of the IFrame API script.
pub const IFRAME_API_SRC: &str = "https://www.youtube.com/iframe_api";

/// Attribute marking the injected script tag.
const SCRIPT_MARKER: &str = "data-yt-api";

/// Global hook the API calls once it has loaded.
const READY_HOOK: &str = "onYouTubeIframeAPIReady";

static SCRIPT_GATE: LazyLock<ReadinessGate> = LazyLock::new(ReadinessGate::new);

#[wasm_bindgen]
extern "C" {
    /// A `YT.Player` instance.
    #[wasm_bindgen(js_namespace = YT, js_name = Player)]
    #[derive(Clone)]
    pub type YtPlayer;

    #[wasm_bindgen(constructor, js_namespace = YT, js_class = "Player", catch)]
    fn new(element: &web_sys::HtmlElement, options: &JsValue) -> Result<YtPlayer, JsValue>;

    #[wasm_bindgen(method, catch, js_class = "Player", js_name = loadVideoById)]
    fn load_video_by_id(this: &YtPlayer, request: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_class = "Player", js_name = playVideo)]
    fn play_video(this: &YtPlayer) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_class = "Player", js_name = stopVideo)]
    fn stop_video(this: &YtPlayer) -> Result<(), JsValue>;
}

/// Argument object for `loadVideoById`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LoadRequest<'a> {
    video_id: &'a str,
    start_seconds: u32,
}

/// Options object for the `YT.Player` constructor, minus the event handlers.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PlayerInit {
    height: &'static str,
    width: &'static str,
    player_vars: PlayerVars,
}

/// [`PlayerWidget`] over a ready `YT.Player`.
#[derive(Clone)]
pub struct YtWidget {
    player: YtPlayer,
}

impl PlayerWidget for YtWidget {
    fn load_by_id(&self, video_id: &str) -> Result<(), WidgetError> {
        let request = serde_wasm_bindgen::to_value(&LoadRequest {
            video_id,
            start_seconds: 0,
        })
        .map_err(|e| WidgetError::new("loadVideoById", e.to_string()))?;
        self.player
            .load_video_by_id(&request)
            .map_err(|e| WidgetError::new("loadVideoById", js_error_message(&e)))
    }

    fn play(&self) -> Result<(), WidgetError> {
        self.player
            .play_video()
            .map_err(|e| WidgetError::new("playVideo", js_error_message(&e)))
    }

    fn stop(&self) -> Result<(), WidgetError> {
        self.player
            .stop_video()
            .map_err(|e| WidgetError::new("stopVideo", js_error_message(&e)))
    }
}

/// Load the IFrame API if needed and wait until it is usable.
///
/// Concurrent callers share one script load.
pub async fn ensure_loaded() {
    if SCRIPT_GATE.begin_loading() {
        if api_present() {
            SCRIPT_GATE.mark_ready();
        } else {
            install_ready_hook();
            inject_script();
        }
    }
    SCRIPT_GATE.wait_ready().await;
}

/// Create a player inside `element`.
///
/// `on_ready` receives the widget once it accepts commands; `on_state_change`
/// receives every numeric state code. Both handlers live for the rest of the
/// page.
pub fn create_player<R, S>(
    element: &web_sys::HtmlElement,
    options: &PlayerOptions,
    on_ready: R,
    on_state_change: S,
) -> Result<YtPlayer, WidgetError>
where
    R: Fn(YtWidget) + 'static,
    S: Fn(i32) + 'static,
{
    let init = serde_wasm_bindgen::to_value(&PlayerInit {
        height: "100%",
        width: "100%",
        player_vars: options.player_vars(),
    })
    .map_err(|e| WidgetError::new("YT.Player", e.to_string()))?;

    let on_ready = Closure::<dyn Fn(JsValue)>::new(move |event: JsValue| {
        match js_sys::Reflect::get(&event, &JsValue::from_str("target")) {
            Ok(target) if !target.is_undefined() => on_ready(YtWidget {
                player: target.unchecked_into(),
            }),
            _ => leptos::logging::error!("Player ready event without a target"),
        }
    });
    let on_state_change = Closure::<dyn Fn(JsValue)>::new(move |event: JsValue| {
        if let Some(code) = state_code(&event) {
            on_state_change(code);
        }
    });

    let events = js_sys::Object::new();
    set_property(&events, "onReady", on_ready.as_ref())?;
    set_property(&events, "onStateChange", on_state_change.as_ref())?;
    set_property(&init, "events", &events)?;

    let player = YtPlayer::new(element, &init)
        .map_err(|e| WidgetError::new("YT.Player", js_error_message(&e)))?;

    // The handlers are owned by the player for the rest of the page
    on_ready.forget();
    on_state_change.forget();

    Ok(player)
}

#[allow(clippy::cast_possible_truncation)]
fn state_code(event: &JsValue) -> Option<i32> {
    js_sys::Reflect::get(event, &JsValue::from_str("data"))
        .ok()?
        .as_f64()
        .map(|code| code as i32)
}

fn set_property(target: &JsValue, key: &str, value: &JsValue) -> Result<(), WidgetError> {
    js_sys::Reflect::set(target, &JsValue::from_str(key), value)
        .map(|_| ())
        .map_err(|e| WidgetError::new("YT.Player", js_error_message(&e)))
}

/// Whether `YT.Player` is already defined.
fn api_present() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    js_sys::Reflect::get(&window, &JsValue::from_str("YT"))
        .ok()
        .filter(|yt| yt.is_object())
        .and_then(|yt| js_sys::Reflect::get(&yt, &JsValue::from_str("Player")).ok())
        .is_some_and(|player| player.is_function())
}

/// Install the global ready hook, chaining any hook already present.
fn install_ready_hook() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let hook_key = JsValue::from_str(READY_HOOK);
    let previous = js_sys::Reflect::get(&window, &hook_key)
        .ok()
        .and_then(|hook| hook.dyn_into::<js_sys::Function>().ok());

    let hook = Closure::<dyn Fn()>::new(move || {
        if let Some(previous) = &previous
            && let Err(e) = previous.call0(&JsValue::NULL)
        {
            leptos::logging::warn!("Previous {} hook failed: {}", READY_HOOK, js_error_message(&e));
        }
        SCRIPT_GATE.mark_ready();
    });

    if let Err(e) = js_sys::Reflect::set(&window, &hook_key, hook.as_ref()) {
        leptos::logging::error!("Failed to install {}: {}", READY_HOOK, js_error_message(&e));
        return;
    }
    hook.forget();
}

/// Append the API script tag unless one is already on the page.
fn inject_script() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Ok(Some(_)) = document.query_selector(&format!("script[{SCRIPT_MARKER}]")) {
        leptos::logging::log!("IFrame API script already present");
        return;
    }

    let result = document
        .create_element("script")
        .and_then(|el| {
            el.set_attribute(SCRIPT_MARKER, "1")?;
            el.dyn_into::<web_sys::HtmlScriptElement>()
                .map_err(JsValue::from)
        })
        .and_then(|script| {
            script.set_src(IFRAME_API_SRC);
            document
                .body()
                .ok_or_else(|| JsValue::from_str("document has no body"))?
                .append_child(&script)
        });

    match result {
        Ok(_) => leptos::logging::log!("Injected IFrame API script"),
        Err(e) => leptos::logging::error!("Failed to inject IFrame API script: {}", js_error_message(&e)),
    }
}
