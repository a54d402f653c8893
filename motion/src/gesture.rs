//! Directional gesture recognition for the carousel.
//!
//! Every input modality reduces to the same question: did this interaction
//! travel far enough, fast enough, in one horizontal direction? Touch and
//! mouse drag share [`classify`] with their own [`GestureProfile`]; wheel and
//! keyboard map straight to a [`Direction`] behind their own gates.

#[cfg(test)]
#[path = "gesture_test.rs"]
mod gesture_test;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::input::{GestureSession, InputState, Key, Point, WheelDelta};

/// A logical carousel command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Next slide, wrapping to the first.
    Advance,
    /// Previous slide, wrapping to the last.
    Retreat,
}

/// Thresholds for one pointer-like modality.
///
/// A gesture moving faster than `fast_velocity` (px/ms) only needs to clear
/// `fast_threshold`; a slower one must clear `slow_threshold`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureProfile {
    pub fast_threshold: f64,
    pub slow_threshold: f64,
    pub fast_velocity: f64,
    /// Reject gestures whose vertical travel is at least their horizontal travel.
    pub compare_vertical: bool,
}

impl GestureProfile {
    /// Finger swipes.
    #[must_use]
    pub fn touch() -> Self {
        Self {
            fast_threshold: TOUCH_FAST_THRESHOLD_PX,
            slow_threshold: TOUCH_SLOW_THRESHOLD_PX,
            fast_velocity: TOUCH_FAST_VELOCITY,
            compare_vertical: true,
        }
    }

    /// Mouse press-drag-release.
    #[must_use]
    pub fn drag() -> Self {
        Self {
            fast_threshold: DRAG_FAST_THRESHOLD_PX,
            slow_threshold: DRAG_SLOW_THRESHOLD_PX,
            fast_velocity: DRAG_FAST_VELOCITY,
            compare_vertical: false,
        }
    }

    /// The travel a gesture at `velocity` px/ms has to exceed.
    #[must_use]
    pub fn threshold_for(&self, velocity: f64) -> f64 {
        if velocity > self.fast_velocity {
            self.fast_threshold
        } else {
            self.slow_threshold
        }
    }
}

impl Default for GestureProfile {
    fn default() -> Self {
        Self::touch()
    }
}

/// Horizontal speed in px/ms, with elapsed time clamped away from zero.
#[must_use]
pub fn velocity(dx: f64, elapsed_ms: f64) -> f64 {
    dx.abs() / elapsed_ms.max(MIN_GESTURE_ELAPSED_MS)
}

/// Decide whether a finished gesture is a command.
///
/// `dx`/`dy` are `start - end`, so a leftward drag is positive and advances.
#[must_use]
pub fn classify(dx: f64, dy: f64, elapsed_ms: f64, profile: &GestureProfile) -> Option<Direction> {
    if profile.compare_vertical && dx.abs() <= dy.abs() {
        return None;
    }
    let threshold = profile.threshold_for(velocity(dx, elapsed_ms));
    if dx > threshold {
        Some(Direction::Advance)
    } else if dx < -threshold {
        Some(Direction::Retreat)
    } else {
        None
    }
}

fn classify_session(session: &GestureSession, now_ms: f64, profile: &GestureProfile) -> Option<Direction> {
    let (dx, dy) = session.delta();
    classify(dx, dy, now_ms - session.started_ms, profile)
}

// =============================================================
// Touch
// =============================================================

/// Single-finger swipe recognizer.
#[derive(Debug, Clone)]
pub struct TouchGesture {
    pub profile: GestureProfile,
    /// Horizontal travel after which the host should block page scrolling.
    pub scroll_lock_px: f64,
    state: InputState,
}

impl TouchGesture {
    #[must_use]
    pub fn new(profile: GestureProfile, scroll_lock_px: f64) -> Self {
        Self { profile, scroll_lock_px, state: InputState::Idle }
    }

    pub fn start(&mut self, at: Point, now_ms: f64) {
        self.state.begin(at, now_ms);
    }

    /// Track a move; returns `true` when default scrolling should be suppressed.
    pub fn moved(&mut self, at: Point) -> bool {
        let Some(session) = self.state.update(at) else {
            return false;
        };
        let (dx, dy) = session.delta();
        dx.abs() > dy.abs() && dx.abs() > self.scroll_lock_px
    }

    pub fn end(&mut self, at: Point, now_ms: f64) -> Option<Direction> {
        let session = self.state.finish(at)?;
        classify_session(&session, now_ms, &self.profile)
    }

    pub fn cancel(&mut self) {
        self.state.cancel();
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state.is_tracking()
    }
}

// =============================================================
// Mouse drag
// =============================================================

/// Press-drag-release recognizer for a mouse. Horizontal travel only.
#[derive(Debug, Clone)]
pub struct DragGesture {
    pub profile: GestureProfile,
    state: InputState,
}

impl DragGesture {
    #[must_use]
    pub fn new(profile: GestureProfile) -> Self {
        Self { profile, state: InputState::Idle }
    }

    pub fn press(&mut self, at: Point, now_ms: f64) {
        self.state.begin(at, now_ms);
    }

    pub fn release(&mut self, at: Point, now_ms: f64) -> Option<Direction> {
        let session = self.state.finish(at)?;
        classify_session(&session, now_ms, &self.profile)
    }

    /// The pointer left the carousel; the press no longer counts.
    pub fn cancel(&mut self) {
        self.state.cancel();
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.state.is_tracking()
    }
}

// =============================================================
// Wheel
// =============================================================

/// What the host should do with a wheel event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelOutcome {
    /// Not a horizontal scroll (or cooling down); let the page scroll.
    PassThrough,
    /// Suppress default scrolling and run the command.
    Command(Direction),
}

/// Horizontal wheel recognizer with a cooldown between accepted events.
///
/// The cooldown is opened by [`WheelGesture::wheel`] and closed by
/// [`WheelGesture::end_cooldown`]; the owner schedules the close.
#[derive(Debug, Clone)]
pub struct WheelGesture {
    pub min_delta_px: f64,
    pub cooldown_ms: f64,
    cooling_down: bool,
}

impl WheelGesture {
    #[must_use]
    pub fn new(min_delta_px: f64, cooldown_ms: f64) -> Self {
        Self { min_delta_px, cooldown_ms, cooling_down: false }
    }

    pub fn wheel(&mut self, delta: WheelDelta) -> WheelOutcome {
        if self.cooling_down {
            return WheelOutcome::PassThrough;
        }
        if delta.dx.abs() <= delta.dy.abs() || delta.dx.abs() <= self.min_delta_px {
            return WheelOutcome::PassThrough;
        }
        self.cooling_down = true;
        let direction = if delta.dx > 0.0 { Direction::Advance } else { Direction::Retreat };
        WheelOutcome::Command(direction)
    }

    pub fn end_cooldown(&mut self) {
        self.cooling_down = false;
    }

    #[must_use]
    pub fn is_cooling_down(&self) -> bool {
        self.cooling_down
    }
}

// =============================================================
// Keyboard
// =============================================================

/// Arrow keys map directly to commands.
#[must_use]
pub fn key_direction(key: &Key) -> Option<Direction> {
    match key.0.as_str() {
        "ArrowLeft" => Some(Direction::Retreat),
        "ArrowRight" => Some(Direction::Advance),
        _ => None,
    }
}
