use js_sys::Date;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlAnchorElement, HtmlInputElement};
use yew::prelude::*;

use crate::config::api_url;

fn parse_date(raw: &str) -> Option<Date> {
    let date = Date::new(&JsValue::from_str(raw));
    // Invalid dates come back as NaN.
    (!date.get_time().is_nan()).then_some(date)
}

/// Timestamp in the operator's locale, e.g. for the activity feed.
pub fn format_datetime(raw: &str) -> String {
    parse_date(raw)
        .map(|date| String::from(date.to_locale_string("default", &JsValue::UNDEFINED)))
        .unwrap_or_else(|| raw.to_string())
}

/// Calendar date in the operator's locale, used in tables.
pub fn format_date(raw: &str) -> String {
    parse_date(raw)
        .map(|date| String::from(date.to_locale_date_string("default", &JsValue::UNDEFINED)))
        .unwrap_or_else(|| raw.to_string())
}

pub fn log_error(message: &str) {
    web_sys::console::error_1(&message.into());
}

/// Leave the single-page app for a server-rendered URL.
pub fn navigate_full_page(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.location().set_href(&api_url(path)) {
            web_sys::console::error_1(&err);
        }
    }
}

/// Trigger the browser's own "save as" for `path` through a throwaway
/// anchor element.
pub fn download_via_anchor(path: &str, file_name: &str) {
    let Some(document) = web_sys::window().and_then(|win| win.document()) else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };
    let Some(anchor) = document
        .create_element("a")
        .ok()
        .and_then(|element| element.dyn_into::<HtmlAnchorElement>().ok())
    else {
        return;
    };

    anchor.set_href(&api_url(path));
    anchor.set_download(file_name);
    if body.append_child(&anchor).is_ok() {
        anchor.click();
        let _ = body.remove_child(&anchor);
    }
}

/// Keeps a text input and its state in sync.
pub fn bind_input(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |event: InputEvent| {
        if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
            state.set(target.value());
        }
    })
}
