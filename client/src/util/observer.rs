//! `IntersectionObserver` wrapper keyed by reveal id.
//!
//! Elements are found through their `data-reveal` attribute, which the host
//! stamps on at registration. Entries whose target lacks a parsable id are
//! skipped.

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use motion::reveal::RevealId;

use crate::util::dom;

/// Attribute carrying the reveal id.
pub const REVEAL_ATTR: &str = "data-reveal";

type EntriesCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: EntriesCallback,
}

impl RevealObserver {
    /// Create an observer that reports `(id, intersection ratio)` batches.
    pub fn new(threshold: f64, mut on_entries: impl FnMut(Vec<(RevealId, f64)>) + 'static) -> Result<Self, JsValue> {
        let callback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
            let batch: Vec<(RevealId, f64)> = entries
                .iter()
                .filter_map(|value| value.dyn_into::<IntersectionObserverEntry>().ok())
                .filter_map(|entry| {
                    let id = entry.target().get_attribute(REVEAL_ATTR)?.parse().ok()?;
                    Some((RevealId(id), entry.intersection_ratio()))
                })
                .collect();
            if !batch.is_empty() {
                on_entries(batch);
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        Ok(Self { observer, _callback: callback })
    }

    pub fn observe(&self, id: RevealId) {
        if let Some(el) = dom::query(&id.selector()) {
            self.observer.observe(&el);
        }
    }

    pub fn unobserve(&self, id: RevealId) {
        if let Some(el) = dom::query(&id.selector()) {
            self.observer.unobserve(&el);
        }
    }

    pub fn disconnect(&self) {
        self.observer.disconnect();
    }
}
