//! Pre-registration dialog.

use leptos::prelude::*;

#[cfg(feature = "csr")]
use motion::engine::EngineCore;

use crate::state::landing::LandingView;
#[cfg(feature = "csr")]
use crate::util::host::HostHandle;

/// Modal overlay with the waitlist form. Visibility and the submit button's
/// look come from `LandingView`; every transition is decided by the engine.
#[component]
pub fn RegisterModal() -> impl IntoView {
    let landing = expect_context::<RwSignal<LandingView>>();
    #[cfg(feature = "csr")]
    let host = expect_context::<HostHandle>();

    let on_overlay = move |_ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "csr")]
        {
            let on_overlay = match (_ev.target(), _ev.current_target()) {
                (Some(target), Some(current)) => js_sys::Object::is(&target, &current),
                _ => false,
            };
            host.with_value(|h| h.handle(|core| core.overlay_click(on_overlay)));
        }
    };

    let on_close = move |_: leptos::ev::MouseEvent| {
        #[cfg(feature = "csr")]
        host.with_value(|h| h.handle(EngineCore::close_modal));
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "csr")]
        {
            let email = landing.with_untracked(|v| v.email.clone());
            host.with_value(|h| h.handle(|core| core.submit(&email)));
        }
    };

    view! {
        <div id="modal-overlay" class="modal-overlay" class:active=move || landing.with(|v| v.modal_open) on:click=on_overlay>
            <div class="modal-content">
                <button id="modal-close" class="modal-close" aria-label="Close" on:click=on_close>
                    "×"
                </button>
                <h2>"Join the waitlist"</h2>
                <p>"Be the first to know when we open the doors."</p>
                <form id="register-form" on:submit=on_submit>
                    <input
                        type="email"
                        required
                        placeholder="you@example.com"
                        prop:value=move || landing.with(|v| v.email.clone())
                        on:input=move |ev| landing.update(|v| v.email = event_target_value(&ev))
                    />
                    <button type="submit" style:background=move || landing.with(LandingView::submit_background)>
                        {move || landing.with(LandingView::submit_label)}
                    </button>
                </form>
            </div>
        </div>
    }
}
