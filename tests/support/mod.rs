// Shared mount/cleanup and DOM helpers for the browser tests.
//
// Each test file that does `mod support;` compiles its own copy, so not every
// function is used in every compilation unit.
#![allow(dead_code)]

use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventInit, HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

/// Create a fresh `<div>`, attach it to `<body>`, and return it.
pub fn create_mount_point() -> Element {
    let document = gloo_utils::document();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

/// Remove the mount-point from `<body>` so subsequent tests start clean.
pub fn cleanup(mount: &Element) {
    gloo_utils::document()
        .body()
        .unwrap()
        .remove_child(mount)
        .ok();
}

pub fn query(mount: &Element, selector: &str) -> Element {
    mount
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no element matches {selector}"))
}

pub fn text_of(mount: &Element, selector: &str) -> String {
    query(mount, selector).text_content().unwrap_or_default()
}

pub fn click(mount: &Element, selector: &str) {
    query(mount, selector)
        .dyn_into::<HtmlElement>()
        .unwrap()
        .click();
}

/// Fire a bubbling, cancelable event. Returns false if a handler prevented its default.
fn dispatch(target: &Element, kind: &str) -> bool {
    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = Event::new_with_event_init_dict(kind, &init).unwrap();
    target.dispatch_event(&event).unwrap()
}

/// Submit a form directly, skipping the browser's constraint validation.
pub fn submit(mount: &Element, selector: &str) -> bool {
    dispatch(&query(mount, selector), "submit")
}

/// Type into an `<input>` or `<textarea>` the way a user would.
pub fn fill(mount: &Element, name: &str, value: &str) {
    let element = query(mount, &format!("[name=\"{name}\"]"));
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
    } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        area.set_value(value);
    }
    dispatch(&element, "input");
}

/// Pick an option in a `<select>`.
pub fn choose(mount: &Element, name: &str, value: &str) {
    let element = query(mount, &format!("select[name=\"{name}\"]"));
    element
        .dyn_ref::<HtmlSelectElement>()
        .unwrap()
        .set_value(value);
    dispatch(&element, "change");
}

pub fn control_value(mount: &Element, name: &str) -> String {
    let element = query(mount, &format!("[name=\"{name}\"]"));
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else {
        panic!("{name} is not a form control")
    }
}
