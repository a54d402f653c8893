//! Imperative bridge between the page and `motion::engine::Engine`.
//!
//! ARCHITECTURE
//! ============
//! Handlers call [`Host::handle`] with a closure over the engine core. The
//! engine borrow ends before the returned actions run, so an action that
//! re-enters the host (a timer, an observer batch, the frame loop) never
//! finds the engine borrowed. View-level actions update the shared
//! `RwSignal<LandingView>`; everything else is executed here.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::HtmlCanvasElement;

use motion::carousel::SLIDES;
use motion::engine::{Action, Engine, EngineCore};
use motion::entrance::{HERO_CTA_BUTTONS, HERO_TITLE_LINES, HeroLayout};
use motion::reveal::RevealKind;
use motion::scheduler::TaskId;

use crate::state::landing::LandingView;
use crate::util::observer::{REVEAL_ATTR, RevealObserver};
use crate::util::{animate, config, dom};

/// Class of section headers whose children reveal on scroll.
pub const SECTION_HEADERS: &str = ".section-header";
/// Class of grid items that reveal on scroll.
pub const GRID_ITEMS: &str = ".grid-item";

/// Context handle for the page host.
pub type HostHandle = StoredValue<Rc<Host>, LocalStorage>;

type FrameCallback = Closure<dyn FnMut(f64)>;

pub struct Host {
    view: RwSignal<LandingView>,
    engine: RefCell<Option<Engine>>,
    timers: RefCell<HashMap<TaskId, Timeout>>,
    observer: RefCell<Option<RevealObserver>>,
    frame: RefCell<Option<FrameCallback>>,
    listeners: RefCell<Vec<WindowListenerHandle>>,
}

impl Host {
    pub fn new(view: RwSignal<LandingView>) -> Rc<Self> {
        Rc::new(Self {
            view,
            engine: RefCell::new(None),
            timers: RefCell::new(HashMap::new()),
            observer: RefCell::new(None),
            frame: RefCell::new(None),
            listeners: RefCell::new(Vec::new()),
        })
    }

    pub fn is_attached(&self) -> bool {
        self.engine.borrow().is_some()
    }

    /// Bind the engine to the particle canvas and run the page-load sequence.
    pub fn boot(self: &Rc<Self>, canvas: HtmlCanvasElement) {
        let config = config::fit_to_markup(config::read_config(), dom::count(SLIDES));
        let threshold = config.reveal.threshold;
        let engine = match Engine::new(canvas, config, js_sys::Date::now().to_bits()) {
            Ok(engine) => engine,
            Err(err) => {
                log::warn!("particle canvas unavailable: {err:?}");
                return;
            }
        };
        *self.engine.borrow_mut() = Some(engine);

        let host = Rc::clone(self);
        match RevealObserver::new(threshold, move |batch| {
            host.handle(|core| batch.into_iter().flat_map(|(id, ratio)| core.on_intersect(id, ratio)).collect());
        }) {
            Ok(observer) => *self.observer.borrow_mut() = Some(observer),
            Err(err) => log::warn!("scroll reveal disabled: {err:?}"),
        }

        self.register_reveals();
        self.resize();
        let layout = HeroLayout {
            title_lines: dom::count(HERO_TITLE_LINES),
            cta_buttons: dom::count(HERO_CTA_BUTTONS),
        };
        self.handle(|core| core.on_load(layout));
        log::debug!("landing host booted");
    }

    /// Keep a window listener alive until teardown.
    pub fn hold(&self, listener: WindowListenerHandle) {
        self.listeners.borrow_mut().push(listener);
    }

    /// Run a core handler and execute its actions. Returns `true` when the
    /// triggering event's default behavior should be suppressed.
    pub fn handle(self: &Rc<Self>, f: impl FnOnce(&mut EngineCore) -> Vec<Action>) -> bool {
        self.handle_engine(|engine| f(&mut engine.core))
    }

    fn handle_engine(self: &Rc<Self>, f: impl FnOnce(&mut Engine) -> Vec<Action>) -> bool {
        let actions = match self.engine.borrow_mut().as_mut() {
            Some(engine) => f(engine),
            None => return false,
        };
        self.dispatch(actions)
    }

    /// Match the canvas to the window and regenerate particles.
    pub fn resize(self: &Rc<Self>) {
        let (width, height) = dom::viewport();
        self.handle_engine(|engine| engine.resize(width, height));
    }

    /// Stop every timer, observer and listener, and halt the frame loop.
    pub fn teardown(&self) {
        let cancelled = match self.engine.borrow_mut().as_mut() {
            Some(engine) => engine.core.teardown(),
            None => Vec::new(),
        };
        {
            let mut timers = self.timers.borrow_mut();
            for action in cancelled {
                if let Action::CancelTimer(id) = action {
                    timers.remove(&id);
                }
            }
        }
        if let Some(observer) = self.observer.borrow_mut().take() {
            observer.disconnect();
        }
        for listener in self.listeners.borrow_mut().drain(..) {
            listener.remove();
        }
        // A frame may still be queued; `on_frame` releases the callback once
        // it sees the loop stopped.
    }

    fn register_reveals(self: &Rc<Self>) {
        let mut actions = Vec::new();
        {
            let mut engine = self.engine.borrow_mut();
            let Some(engine) = engine.as_mut() else {
                return;
            };
            for (selector, kind) in [(SECTION_HEADERS, RevealKind::SectionHeader), (GRID_ITEMS, RevealKind::GridItem)] {
                for element in dom::query_all(selector) {
                    let (id, registered) = engine.core.register_reveal(kind);
                    if let Err(err) = element.set_attribute(REVEAL_ATTR, &id.0.to_string()) {
                        log::warn!("failed to tag reveal element: {err:?}");
                    }
                    actions.extend(registered);
                }
            }
        }
        self.dispatch(actions);
    }

    fn dispatch(self: &Rc<Self>, actions: Vec<Action>) -> bool {
        let mut prevent_default = false;
        for action in actions {
            match action {
                Action::Animate(tween) => {
                    if let Err(err) = animate::play(&tween) {
                        log::warn!("animation failed: {err:?}");
                    }
                }
                Action::Hide(target) => {
                    if let Err(err) = animate::hide(&target) {
                        log::warn!("failed to hide {target:?}: {err:?}");
                    }
                }
                Action::Schedule { id, delay_ms } => self.schedule(id, delay_ms),
                Action::CancelTimer(id) => {
                    self.timers.borrow_mut().remove(&id);
                }
                Action::PreventDefault => prevent_default = true,
                Action::Observe(id) => {
                    if let Some(observer) = self.observer.borrow().as_ref() {
                        observer.observe(id);
                    }
                }
                Action::Unobserve(id) => {
                    if let Some(observer) = self.observer.borrow().as_ref() {
                        observer.unobserve(id);
                    }
                }
                Action::Notify(message) => notify(&message),
                Action::RenderNeeded => self.start_frames(),
                Action::SetActiveSlide(_)
                | Action::ModalActive(_)
                | Action::SetSubmitButton { .. }
                | Action::RestoreSubmitButton
                | Action::ResetForm => self.view.update(|view| {
                    view.apply(&action);
                }),
            }
        }
        prevent_default
    }

    fn schedule(self: &Rc<Self>, id: TaskId, delay_ms: f64) {
        let host = Rc::clone(self);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let millis = delay_ms.max(0.0).round() as u32;
        let timeout = Timeout::new(millis, move || {
            host.timers.borrow_mut().remove(&id);
            host.handle(|core| core.run_task(id));
        });
        self.timers.borrow_mut().insert(id, timeout);
    }

    // --- Particle frame loop ---

    fn start_frames(self: &Rc<Self>) {
        let host = Rc::clone(self);
        let callback = Closure::wrap(Box::new(move |_ts: f64| host.on_frame()) as Box<dyn FnMut(f64)>);
        *self.frame.borrow_mut() = Some(callback);
        self.request_frame();
    }

    fn request_frame(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Some(callback) = self.frame.borrow().as_ref() {
            if let Err(err) = window.request_animation_frame(callback.as_ref().unchecked_ref()) {
                log::warn!("requestAnimationFrame failed: {err:?}");
            }
        }
    }

    fn on_frame(&self) {
        let running = match self.engine.borrow_mut().as_mut() {
            Some(engine) => {
                if let Err(err) = engine.render() {
                    log::warn!("particle frame failed: {err:?}");
                }
                engine.is_running()
            }
            None => false,
        };
        if running {
            self.request_frame();
        } else {
            self.frame.borrow_mut().take();
        }
    }
}

fn notify(message: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(err) = window.alert_with_message(message) {
        log::warn!("failed to show notice: {err:?}");
    }
}
