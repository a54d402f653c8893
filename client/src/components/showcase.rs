//! Showcase carousel.
//!
//! DESIGN
//! ======
//! The markup only mirrors `LandingView::active_slide`. Every input on the
//! carousel region (touch, mouse drag, wheel) is forwarded to the engine,
//! which owns gesture classification and the transition lock. The engine
//! answers with the slide to activate and the entrance tweens to play.

use leptos::prelude::*;

#[cfg(feature = "csr")]
use motion::input::{Point, WheelDelta};

use crate::state::landing::LandingView;
#[cfg(feature = "csr")]
use crate::util::host::HostHandle;

struct Slide {
    icon: &'static str,
    title: &'static str,
    desc: &'static str,
}

const SLIDES: [Slide; 5] = [
    Slide { icon: "🌐", title: "One shared map", desc: "Every project, person, and document on a single living canvas." },
    Slide { icon: "🤝", title: "Work in the open", desc: "Invite collaborators and watch their edits arrive as they type." },
    Slide { icon: "🧩", title: "Snap in your stack", desc: "Integrations connect in one click and stay in sync both ways." },
    Slide { icon: "🛰", title: "Follow the signal", desc: "Activity feeds surface what changed and who needs to know." },
    Slide { icon: "🚀", title: "Ship together", desc: "Turn plans into releases without leaving the network." },
];

#[cfg(feature = "csr")]
fn touch_point(touches: &web_sys::TouchList) -> Option<Point> {
    let touch = touches.get(0)?;
    Some(Point::new(f64::from(touch.client_x()), f64::from(touch.client_y())))
}

#[cfg(feature = "csr")]
fn mouse_point(ev: &leptos::ev::MouseEvent) -> Point {
    Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

/// Showcase section with the swipeable carousel and its indicators.
#[component]
pub fn Showcase() -> impl IntoView {
    let landing = expect_context::<RwSignal<LandingView>>();
    #[cfg(feature = "csr")]
    let host = expect_context::<HostHandle>();

    let on_touch_start = move |_ev: leptos::ev::TouchEvent| {
        #[cfg(feature = "csr")]
        if let Some(at) = touch_point(&_ev.touches()) {
            let now = _ev.time_stamp();
            host.with_value(|h| {
                h.handle(|core| {
                    core.on_touch_start(at, now);
                    Vec::new()
                })
            });
        }
    };
    let on_touch_move = move |_ev: leptos::ev::TouchEvent| {
        #[cfg(feature = "csr")]
        if let Some(at) = touch_point(&_ev.touches()) {
            if host.with_value(|h| h.handle(|core| core.on_touch_move(at))) {
                _ev.prevent_default();
            }
        }
    };
    let on_touch_end = move |_ev: leptos::ev::TouchEvent| {
        #[cfg(feature = "csr")]
        if let Some(at) = touch_point(&_ev.changed_touches()) {
            let now = _ev.time_stamp();
            host.with_value(|h| h.handle(|core| core.on_touch_end(at, now)));
        }
    };

    let on_mouse_down = move |_ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "csr")]
        {
            let at = mouse_point(&_ev);
            let now = _ev.time_stamp();
            host.with_value(|h| {
                h.handle(|core| {
                    core.on_mouse_down(at, now);
                    Vec::new()
                })
            });
        }
    };
    let on_mouse_up = move |_ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "csr")]
        {
            let at = mouse_point(&_ev);
            let now = _ev.time_stamp();
            host.with_value(|h| h.handle(|core| core.on_mouse_up(at, now)));
        }
    };
    let on_mouse_leave = move |_: leptos::ev::MouseEvent| {
        #[cfg(feature = "csr")]
        host.with_value(|h| {
            h.handle(|core| {
                core.on_mouse_leave();
                Vec::new()
            })
        });
    };

    let on_wheel = move |_ev: leptos::ev::WheelEvent| {
        #[cfg(feature = "csr")]
        {
            let delta = WheelDelta { dx: _ev.delta_x(), dy: _ev.delta_y() };
            if host.with_value(|h| h.handle(|core| core.on_wheel(delta))) {
                _ev.prevent_default();
            }
        }
    };

    let go_to = move |_index: usize| {
        #[cfg(feature = "csr")]
        host.with_value(|h| h.handle(|core| core.go_to(_index)));
    };

    view! {
        <section id="showcase" class="showcase">
            <div class="section-header">
                <h2>"See it in motion"</h2>
                <p>"Swipe, drag, scroll, or use the arrow keys."</p>
            </div>
            <div
                class="carousel"
                on:touchstart=on_touch_start
                on:touchmove=on_touch_move
                on:touchend=on_touch_end
                on:mousedown=on_mouse_down
                on:mouseup=on_mouse_up
                on:mouseleave=on_mouse_leave
                on:wheel=on_wheel
            >
                {SLIDES
                    .iter()
                    .enumerate()
                    .map(|(i, slide)| {
                        view! {
                            <div
                                class="slide"
                                class:active=move || landing.with(|v| v.is_slide_active(i))
                                data-slide=i.to_string()
                            >
                                <div class="slide-icon">{slide.icon}</div>
                                <h3 class="slide-title">{slide.title}</h3>
                                <p class="slide-desc">{slide.desc}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="carousel-indicators">
                {(0..SLIDES.len())
                    .map(|i| {
                        view! {
                            <button
                                class="indicator"
                                class:active=move || landing.with(|v| v.is_slide_active(i))
                                aria-label=format!("Show slide {}", i + 1)
                                on:click=move |_| go_to(i)
                            ></button>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
