//! Hero section: headline, call to action, stats, and floating cards.

use leptos::prelude::*;

#[cfg(feature = "csr")]
use motion::engine::EngineCore;
#[cfg(feature = "csr")]
use motion::input::Point;

#[cfg(feature = "csr")]
use crate::util::dom;
#[cfg(feature = "csr")]
use crate::util::host::HostHandle;

struct Stat {
    value: &'static str,
    label: &'static str,
}

const STATS: [Stat; 3] = [
    Stat { value: "10k+", label: "Early sign-ups" },
    Stat { value: "99.9%", label: "Uptime target" },
    Stat { value: "3x", label: "Faster onboarding" },
];

/// Hero section component.
#[component]
pub fn Hero() -> impl IntoView {
    #[cfg(feature = "csr")]
    let host = expect_context::<HostHandle>();

    let on_register = move |_: leptos::ev::MouseEvent| {
        #[cfg(feature = "csr")]
        host.with_value(|h| h.handle(EngineCore::open_modal));
    };

    let on_visual_move = move |_ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "csr")]
        {
            let at = Point::new(f64::from(_ev.client_x()), f64::from(_ev.client_y()));
            let (width, height) = dom::viewport();
            host.with_value(|h| h.handle(|core| core.on_hero_pointer_move(at, width, height)));
        }
    };

    view! {
        <section class="hero">
            <div class="hero-content">
                <span class="badge">"Launching Soon"</span>
                <h1 class="hero-title">
                    <span class="line">"Grow your ideas"</span>
                    <span class="line">"into living networks"</span>
                </h1>
                <p class="hero-subtitle">
                    "Connect people, tools, and data in one place that keeps up with how your team actually works."
                </p>
                <div class="hero-cta">
                    <button id="pre-register-btn" class="btn-primary" on:click=on_register>
                        "Pre-register Now"
                    </button>
                    <button class="btn-secondary">"Watch Demo"</button>
                </div>
                <div class="stats">
                    {STATS
                        .iter()
                        .map(|stat| {
                            view! {
                                <div class="stat-card">
                                    <span class="stat-value">{stat.value}</span>
                                    <span class="stat-label">{stat.label}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="hero-visual" on:mousemove=on_visual_move>
                <div class="floating-card card-1">"Realtime sync"</div>
                <div class="floating-card card-2">"Smart routing"</div>
                <div class="floating-card card-3">"Zero setup"</div>
            </div>
        </section>
    }
}
