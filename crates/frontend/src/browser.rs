//! Thin wrappers over browser APIs.
//!
//! Every helper tolerates a missing window, document or element and turns
//! into a no-op.

use js_sys::{Array, Reflect};
use ui_core::device::DeviceSignals;
use ui_core::{ClientError, Clipboard, Result};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::Navigator;

/// Log a failed call to the developer console.
pub fn log_error(context: &str, err: &ClientError) {
    web_sys::console::error_1(&format!("{context}: {err}").into());
}

pub fn log_info(message: &str) {
    web_sys::console::log_1(&message.into());
}

/// Current viewport width, or 0 when unavailable.
pub fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn viewport_height() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// Collect what the browser reports about the device.
pub fn device_signals() -> DeviceSignals {
    let user_agent = web_sys::window()
        .and_then(|w| w.navigator().user_agent().ok())
        .unwrap_or_default();

    DeviceSignals {
        viewport_width: viewport_width(),
        viewport_height: viewport_height(),
        user_agent,
    }
}

/// `content` of `<meta name="{name}">`, if present.
pub fn meta_content(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let meta = document
        .query_selector(&format!("meta[name=\"{name}\"]"))
        .ok()??;
    meta.get_attribute("content")
}

/// Replace the viewport meta content.
pub fn set_viewport(content: &str) {
    let meta = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector("meta[name=viewport]").ok().flatten());
    if let Some(meta) = meta {
        let _ = meta.set_attribute("content", content);
    }
}

/// Add or remove a class on `<body>`.
pub fn set_body_class(class: &str, present: bool) {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body());
    if let Some(body) = body {
        let _ = body.class_list().toggle_with_force(class, present);
    }
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// True when `target` exposes a non-null `name` property.
fn has_property(target: &JsValue, name: &str) -> bool {
    Reflect::get(target, &JsValue::from_str(name))
        .map(|value| !value.is_undefined() && !value.is_null())
        .unwrap_or(false)
}

/// Vibrate with `pattern` (milliseconds) where supported.
pub fn vibrate(pattern: &[u32]) {
    if let Some(window) = web_sys::window() {
        vibrate_on(&window.navigator(), pattern);
    }
}

/// Vibrate through `navigator`; a no-op when it has no `vibrate` method.
pub fn vibrate_on(navigator: &Navigator, pattern: &[u32]) {
    if !has_property(navigator, "vibrate") {
        return;
    }
    match pattern {
        [] => {}
        [single] => {
            navigator.vibrate_with_duration(*single);
        }
        _ => {
            let steps: Array = pattern.iter().map(|ms| JsValue::from(*ms)).collect();
            navigator.vibrate_with_pattern(&steps);
        }
    }
}

/// Blocking confirmation dialog; a missing window counts as "no".
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// `navigator.clipboard`, which is absent outside secure contexts.
pub fn clipboard_of(navigator: &Navigator) -> Result<web_sys::Clipboard> {
    if !has_property(navigator, "clipboard") {
        return Err(ClientError::ClipboardDenied("clipboard unavailable".to_string()));
    }
    Ok(navigator.clipboard())
}

/// The asynchronous Clipboard API.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClipboard;

impl Clipboard for BrowserClipboard {
    async fn write_text(&self, text: &str) -> Result<()> {
        let window = web_sys::window()
            .ok_or_else(|| ClientError::ClipboardDenied("no window".to_string()))?;
        let promise = clipboard_of(&window.navigator())?.write_text(text);
        JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|err| ClientError::ClipboardDenied(format!("{err:?}")))
    }
}
