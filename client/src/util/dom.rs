//! Document lookups used by the host.
//!
//! Every helper treats an absent window, document, or element as "feature not
//! present" and returns an empty result rather than an error.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use motion::tween::Target;

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// All elements matching `selector`, in document order.
pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(list) = document().and_then(|d| d.query_selector_all(selector).ok()) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// First element matching `selector`.
pub fn query(selector: &str) -> Option<Element> {
    document().and_then(|d| d.query_selector(selector).ok().flatten())
}

/// The elements a tween target names.
pub fn resolve(target: &Target) -> Vec<Element> {
    match target {
        Target::Selector(selector) => query_all(selector),
        Target::ChildrenOf(selector) => {
            let Some(parent) = query(selector) else {
                return Vec::new();
            };
            let children = parent.children();
            (0..children.length()).filter_map(|i| children.item(i)).collect()
        }
    }
}

/// Number of elements matching `selector`.
pub fn count(selector: &str) -> usize {
    document()
        .and_then(|d| d.query_selector_all(selector).ok())
        .map_or(0, |list| list.length() as usize)
}

/// Viewport size in CSS pixels.
pub fn viewport() -> (f64, f64) {
    let Some(window) = web_sys::window() else {
        return (0.0, 0.0);
    };
    let read = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (read(window.inner_width()), read(window.inner_height()))
}
