//! Full-viewport particle background and the page's engine bootstrap.
//!
//! The canvas is the first element the engine needs, so its mount effect also
//! boots the host: reveal registration, window listeners, and the page-load
//! choreography all start here once the document exists.

use leptos::prelude::*;

#[cfg(feature = "csr")]
use leptos::ev;
#[cfg(feature = "csr")]
use motion::input::Key;

#[cfg(feature = "csr")]
use crate::util::host::HostHandle;

/// Particle canvas component.
#[component]
pub fn ParticleCanvas() -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "csr")]
    {
        let host = expect_context::<HostHandle>();
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            host.with_value(|h| {
                if h.is_attached() {
                    return;
                }
                h.boot(canvas);
                h.hold(window_event_listener(ev::resize, move |_| {
                    host.with_value(|h| h.resize());
                }));
                h.hold(window_event_listener(ev::keydown, move |ev| {
                    let key = Key::new(&ev.key());
                    host.with_value(|h| h.handle(|core| core.on_key_down(&key)));
                }));
            });
        });
        on_cleanup(move || host.with_value(|h| h.teardown()));
    }

    view! { <canvas id="network-canvas" node_ref=canvas_ref></canvas> }
}
