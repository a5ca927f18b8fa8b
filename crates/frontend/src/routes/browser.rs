//! `window.history` behind the `HistoryBackend` port.

use super::history::HistoryBackend;
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserHistory;

impl BrowserHistory {
    fn history() -> Option<web_sys::History> {
        web_sys::window()?.history().ok()
    }

    fn to_js(state: &Value) -> JsValue {
        // plain JS objects, not `Map`s, so the entry survives structured cloning as JSON
        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        state.serialize(&serializer).unwrap_or(JsValue::NULL)
    }
}

impl HistoryBackend for BrowserHistory {
    fn location(&self) -> String {
        current_location()
    }

    fn push_state(&self, state: &Value, url: &str) {
        if let Some(history) = Self::history() {
            if let Err(e) = history.push_state_with_url(&Self::to_js(state), "", Some(url)) {
                log::warn!("pushState failed for {}: {:?}", url, e);
            }
        }
    }

    fn replace_state(&self, state: &Value, url: &str) {
        if let Some(history) = Self::history() {
            if let Err(e) = history.replace_state_with_url(&Self::to_js(state), "", Some(url)) {
                log::warn!("replaceState failed for {}: {:?}", url, e);
            }
        }
    }
}

/// Current `pathname + search` of the window.
pub fn current_location() -> String {
    let Some(location) = web_sys::window().map(|w| w.location()) else {
        return "/".to_string();
    };
    let path = location.pathname().unwrap_or_else(|_| "/".to_string());
    let search = location.search().unwrap_or_default();
    format!("{}{}", path, search)
}

/// Subscribe to `popstate`. The handler receives the entry's state as JSON
/// (`None` for entries without state).
pub fn on_pop_state(handler: impl Fn(Option<Value>) + 'static) {
    let closure = Closure::<dyn Fn(web_sys::PopStateEvent)>::new(move |ev: web_sys::PopStateEvent| {
        let state = ev.state();
        let payload = if state.is_null() || state.is_undefined() {
            None
        } else {
            serde_wasm_bindgen::from_value::<Value>(state).ok()
        };
        handler(payload);
    });

    if let Some(window) = web_sys::window() {
        let _ = window.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
    }

    // the listener lives as long as the page
    closure.forget();
}
