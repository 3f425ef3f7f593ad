#![cfg(target_arch = "wasm32")]

use frontend::browser::{clipboard_of, vibrate_on};
use js_sys::{Array, Function, Object, Reflect};
use ui_core::ClientError;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::Navigator;

wasm_bindgen_test_configure!(run_in_browser);

/// A navigator stand-in exposing only the given properties.
fn navigator_with(properties: &[(&str, JsValue)]) -> Navigator {
    let object = Object::new();
    for (name, value) in properties {
        Reflect::set(&object, &JsValue::from_str(name), value).expect("set property");
    }
    object.unchecked_into::<Navigator>()
}

fn recording_vibrate() -> Function {
    Function::new_with_args(
        "pattern",
        "this.calls = (this.calls || []).concat([pattern]); return true;",
    )
}

fn recorded_calls(navigator: &Navigator) -> u32 {
    Reflect::get(navigator, &JsValue::from_str("calls"))
        .ok()
        .and_then(|calls| calls.dyn_into::<Array>().ok())
        .map_or(0, |calls| calls.length())
}

#[wasm_bindgen_test]
fn test_vibrate_without_support_is_a_no_op() {
    let navigator = navigator_with(&[]);

    vibrate_on(&navigator, &[50]);
    vibrate_on(&navigator, &[100, 50, 100]);

    assert_eq!(recorded_calls(&navigator), 0);
}

#[wasm_bindgen_test]
fn test_vibrate_with_support_forwards_pattern() {
    let navigator = navigator_with(&[("vibrate", recording_vibrate().into())]);

    vibrate_on(&navigator, &[50]);
    vibrate_on(&navigator, &[100, 50, 100]);
    vibrate_on(&navigator, &[]);

    assert_eq!(recorded_calls(&navigator), 2);
}

#[wasm_bindgen_test]
fn test_missing_clipboard_is_denied() {
    let navigator = navigator_with(&[]);

    let result = clipboard_of(&navigator);

    assert_eq!(
        result.err(),
        Some(ClientError::ClipboardDenied("clipboard unavailable".to_string()))
    );
}

#[wasm_bindgen_test]
fn test_present_clipboard_is_returned() {
    let navigator = navigator_with(&[("clipboard", Object::new().into())]);

    assert!(clipboard_of(&navigator).is_ok());
}
