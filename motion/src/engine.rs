use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::carousel::{Carousel, Transition};
use crate::config::LandingConfig;
use crate::entrance::{self, HeroLayout};
use crate::gesture::{key_direction, Direction, DragGesture, TouchGesture, WheelGesture, WheelOutcome};
use crate::input::{Key, Point, WheelDelta};
use crate::modal::{Modal, SubmitOutcome};
use crate::particles::{FrameLoop, ParticleField, Surface};
use crate::reveal::{Reveal, RevealId, RevealKind};
use crate::scheduler::{Scheduler, Task, TaskId};
use crate::tween::{Target, Tween};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from handlers for the host to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Run a tween through the browser's animation capability.
    Animate(Tween),
    /// Apply the hidden starting state (`opacity: 0`) to a target.
    Hide(Target),
    /// Mark exactly this slide and indicator active, clearing all others.
    SetActiveSlide(usize),
    /// Start a host timer that calls [`EngineCore::run_task`] with `id`.
    Schedule { id: TaskId, delay_ms: f64 },
    /// Drop the host timer for `id`.
    CancelTimer(TaskId),
    /// Suppress the default behavior of the event being handled.
    PreventDefault,
    Observe(RevealId),
    Unobserve(RevealId),
    /// Toggle the overlay's active marker.
    ModalActive(bool),
    SetSubmitButton { label: String, color: String },
    RestoreSubmitButton,
    ResetForm,
    /// Show a message to the visitor.
    Notify(String),
    /// Request the first animation frame of the particle loop.
    RenderNeeded,
}

/// Core engine state: all logic that does not depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
pub struct EngineCore {
    pub config: LandingConfig,
    pub field: ParticleField,
    pub frames: FrameLoop,
    pub carousel: Carousel,
    pub touch: TouchGesture,
    pub drag: DragGesture,
    pub wheel: WheelGesture,
    pub modal: Modal,
    pub reveal: Reveal,
    pub scheduler: Scheduler,
    grid_items: usize,
    rng: SmallRng,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::new(LandingConfig::default(), 0)
    }
}

impl EngineCore {
    /// Build every component from `config`. `seed` drives particle placement.
    #[must_use]
    pub fn new(config: LandingConfig, seed: u64) -> Self {
        let g = &config.gestures;
        Self {
            field: ParticleField::new(config.particles.clone()),
            frames: FrameLoop::default(),
            carousel: Carousel::new(config.carousel.slide_count),
            touch: TouchGesture::new(g.touch, g.touch_scroll_lock_px),
            drag: DragGesture::new(g.drag),
            wheel: WheelGesture::new(g.wheel_min_delta_px, g.wheel_cooldown_ms),
            modal: Modal::new(),
            reveal: Reveal::new(config.reveal.threshold, config.reveal.grid_stagger_ms),
            scheduler: Scheduler::new(),
            grid_items: 0,
            rng: SmallRng::seed_from_u64(seed),
            config,
        }
    }

    // --- Lifecycle ---

    /// Page load: entrance choreography, the first slide, and the particle loop.
    pub fn on_load(&mut self, layout: HeroLayout) -> Vec<Action> {
        let mut actions: Vec<Action> = entrance::load_plan(layout).into_iter().map(Action::Animate).collect();
        if let Some(t) = self.carousel.activate_initial() {
            self.push_transition(t, &mut actions);
        }
        if self.frames.start() {
            actions.push(Action::RenderNeeded);
        }
        actions
    }

    /// Viewport changed: adopt the new extents and regenerate every particle.
    pub fn on_resize(&mut self, width: f64, height: f64) -> Vec<Action> {
        self.field.resize(width, height);
        self.field.init_particles(&mut self.rng);
        if self.frames.start() {
            return vec![Action::RenderNeeded];
        }
        Vec::new()
    }

    /// Draw one particle frame onto `surface`.
    ///
    /// # Errors
    ///
    /// Returns the first error reported by `surface`.
    pub fn frame<S: Surface>(&mut self, surface: &mut S) -> Result<(), S::Error> {
        self.field.frame(surface)
    }

    /// Cancel every pending task and stop the frame loop.
    pub fn teardown(&mut self) -> Vec<Action> {
        self.frames.stop();
        self.touch.cancel();
        self.drag.cancel();
        self.scheduler.cancel_all().into_iter().map(Action::CancelTimer).collect()
    }

    // --- Timers ---

    /// A host timer fired. Unknown or cancelled ids are ignored.
    pub fn run_task(&mut self, id: TaskId) -> Vec<Action> {
        match self.scheduler.take(id) {
            Some(task) => self.dispatch(task),
            None => Vec::new(),
        }
    }

    /// Move the scheduler's virtual clock forward and run everything that
    /// came due, in due order.
    pub fn advance(&mut self, elapsed_ms: f64) -> Vec<Action> {
        let due = self.scheduler.advance(elapsed_ms);
        due.into_iter().flat_map(|(_, task)| self.dispatch(task)).collect()
    }

    fn dispatch(&mut self, task: Task) -> Vec<Action> {
        match task {
            Task::ReleaseCarousel => {
                self.carousel.release();
                Vec::new()
            }
            Task::EndWheelCooldown => {
                self.wheel.end_cooldown();
                Vec::new()
            }
            Task::CompleteRegistration => match self.modal.complete() {
                Some(message) => vec![
                    Action::ModalActive(false),
                    Action::RestoreSubmitButton,
                    Action::ResetForm,
                    Action::Notify(message),
                ],
                None => Vec::new(),
            },
            Task::ObserveGridItem(index) => {
                let id = RevealId(index);
                if self.reveal.observe(id) {
                    vec![Action::Observe(id)]
                } else {
                    Vec::new()
                }
            }
        }
    }

    fn schedule(&mut self, task: Task, delay_ms: f64, actions: &mut Vec<Action>) {
        let id = self.scheduler.schedule(task, delay_ms);
        actions.push(Action::Schedule { id, delay_ms });
    }

    // --- Carousel ---

    /// Jump straight to a slide (indicator click).
    pub fn go_to(&mut self, index: usize) -> Vec<Action> {
        let mut actions = Vec::new();
        if let Some(t) = self.carousel.navigate_to(index) {
            self.push_transition(t, &mut actions);
        }
        actions
    }

    pub fn navigate(&mut self, direction: Direction) -> Vec<Action> {
        let mut actions = Vec::new();
        self.navigate_into(direction, &mut actions);
        actions
    }

    fn navigate_into(&mut self, direction: Direction, actions: &mut Vec<Action>) {
        if let Some(t) = self.carousel.step(direction) {
            self.push_transition(t, actions);
        }
    }

    fn push_transition(&mut self, t: Transition, actions: &mut Vec<Action>) {
        actions.push(Action::SetActiveSlide(t.index));
        actions.extend(t.tweens.into_iter().map(Action::Animate));
        self.schedule(Task::ReleaseCarousel, self.config.carousel.lock_ms, actions);
    }

    // --- Touch ---

    pub fn on_touch_start(&mut self, at: Point, now_ms: f64) {
        self.touch.start(at, now_ms);
    }

    /// Suppresses page scroll once the swipe is clearly horizontal.
    pub fn on_touch_move(&mut self, at: Point) -> Vec<Action> {
        if self.touch.moved(at) {
            return vec![Action::PreventDefault];
        }
        Vec::new()
    }

    pub fn on_touch_end(&mut self, at: Point, now_ms: f64) -> Vec<Action> {
        match self.touch.end(at, now_ms) {
            Some(direction) => self.navigate(direction),
            None => Vec::new(),
        }
    }

    // --- Pointer drag ---

    pub fn on_mouse_down(&mut self, at: Point, now_ms: f64) {
        self.drag.press(at, now_ms);
    }

    pub fn on_mouse_up(&mut self, at: Point, now_ms: f64) -> Vec<Action> {
        match self.drag.release(at, now_ms) {
            Some(direction) => self.navigate(direction),
            None => Vec::new(),
        }
    }

    /// The pointer left the carousel: abandon the drag.
    pub fn on_mouse_leave(&mut self) {
        self.drag.cancel();
    }

    // --- Wheel / keyboard ---

    pub fn on_wheel(&mut self, delta: WheelDelta) -> Vec<Action> {
        let WheelOutcome::Command(direction) = self.wheel.wheel(delta) else {
            return Vec::new();
        };
        // The cooldown is shorter than the carousel lock: a wheel event that
        // lands after the cooldown but inside the lock is still consumed here
        // and then dropped by the lock, so the page neither scrolls nor moves.
        let mut actions = vec![Action::PreventDefault];
        self.schedule(Task::EndWheelCooldown, self.wheel.cooldown_ms, &mut actions);
        self.navigate_into(direction, &mut actions);
        actions
    }

    pub fn on_key_down(&mut self, key: &Key) -> Vec<Action> {
        match key_direction(key) {
            Some(direction) => self.navigate(direction),
            None => Vec::new(),
        }
    }

    // --- Hero ---

    /// Pointer moved over the hero visual.
    #[must_use]
    pub fn on_hero_pointer_move(&self, at: Point, viewport_w: f64, viewport_h: f64) -> Vec<Action> {
        entrance::parallax(at, viewport_w, viewport_h).into_iter().map(Action::Animate).collect()
    }

    // --- Scroll reveal ---

    /// Register a tagged element. The returned id is its `data-reveal` value.
    pub fn register_reveal(&mut self, kind: RevealKind) -> (RevealId, Vec<Action>) {
        let id = self.reveal.register(kind);
        let mut actions = vec![Action::Hide(Reveal::initial_target(id, kind))];
        match kind {
            RevealKind::SectionHeader => actions.push(Action::Observe(id)),
            RevealKind::GridItem => {
                let delay = self.reveal.grid_delay_ms(self.grid_items);
                self.grid_items += 1;
                self.schedule(Task::ObserveGridItem(id.0), delay, &mut actions);
            }
        }
        (id, actions)
    }

    /// Visibility notification from the observer.
    pub fn on_intersect(&mut self, id: RevealId, ratio: f64) -> Vec<Action> {
        match self.reveal.intersect(id, ratio) {
            Some(tween) => {
                log::debug!("reveal: element {} entered", id.0);
                vec![Action::Animate(tween), Action::Unobserve(id)]
            }
            None => Vec::new(),
        }
    }

    // --- Modal ---

    pub fn open_modal(&mut self) -> Vec<Action> {
        match self.modal.open() {
            Some(tween) => vec![Action::ModalActive(true), Action::Animate(tween)],
            None => Vec::new(),
        }
    }

    pub fn close_modal(&mut self) -> Vec<Action> {
        if self.modal.close() {
            return vec![Action::ModalActive(false)];
        }
        Vec::new()
    }

    /// Click anywhere on the overlay; `target_is_overlay` is true only for the
    /// background itself.
    pub fn overlay_click(&mut self, target_is_overlay: bool) -> Vec<Action> {
        if self.modal.overlay_click(target_is_overlay) {
            return vec![Action::ModalActive(false)];
        }
        Vec::new()
    }

    /// Form submit. The native submission is always suppressed.
    pub fn submit(&mut self, email: &str) -> Vec<Action> {
        let mut actions = vec![Action::PreventDefault];
        if self.modal.submit(email) == SubmitOutcome::Accepted {
            let m = &self.config.modal;
            actions.push(Action::SetSubmitButton { label: m.pending_label.clone(), color: m.pending_color.clone() });
            self.schedule(Task::CompleteRegistration, self.config.modal.submit_delay_ms, &mut actions);
        }
        actions
    }
}

/// The full engine. Wraps `EngineCore` and owns the particle canvas.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pub core: EngineCore,
}

impl Engine {
    /// Create an engine bound to `canvas`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the canvas cannot provide a 2D context.
    pub fn new(canvas: HtmlCanvasElement, config: LandingConfig, seed: u64) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(JsValue::from)?;
        Ok(Self { canvas, ctx, core: EngineCore::new(config, seed) })
    }

    /// Match the canvas backing store to the viewport and regenerate particles.
    pub fn resize(&mut self, width: f64, height: f64) -> Vec<Action> {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let (w, h) = (width.max(0.0).round() as u32, height.max(0.0).round() as u32);
        self.canvas.set_width(w);
        self.canvas.set_height(h);
        self.core.on_resize(width, height)
    }

    /// Draw one frame if the loop is running.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a canvas call fails.
    pub fn render(&mut self) -> Result<(), JsValue> {
        if !self.core.frames.is_running() {
            return Ok(());
        }
        self.core.frame(&mut self.ctx)
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.core.frames.is_running()
    }
}
