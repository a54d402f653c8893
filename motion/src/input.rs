//! Input model: points, keys, wheel deltas, and per-modality gesture sessions.
//!
//! These are the raw values the host extracts from DOM events. Sessions carry
//! what a recognizer needs between an interaction's start and end; they are
//! created on start, consumed on end, and never outlive one interaction.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

/// A 2D point in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A keyboard key.
///
/// The inner string holds the key name as reported by the browser (e.g. `"ArrowLeft"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self(name.to_owned())
    }
}

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down).
    pub dy: f64,
}

/// State of one press-to-release interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSession {
    /// Where the interaction started.
    pub start: Point,
    /// Most recent position reported during the interaction.
    pub current: Point,
    /// Host timestamp of the start event, in ms.
    pub started_ms: f64,
}

impl GestureSession {
    #[must_use]
    pub fn begin(at: Point, now_ms: f64) -> Self {
        Self { start: at, current: at, started_ms: now_ms }
    }

    /// Travel since the start, as `start - current` (leftward drag is positive).
    #[must_use]
    pub fn delta(&self) -> (f64, f64) {
        (self.start.x - self.current.x, self.start.y - self.current.y)
    }
}

/// Tracks at most one session for a pointer-like modality.
#[derive(Debug, Clone, Default)]
pub enum InputState {
    /// No interaction in progress.
    #[default]
    Idle,
    /// A press is down and being tracked.
    Tracking(GestureSession),
}

impl InputState {
    /// Start a fresh session, replacing any stale one.
    pub fn begin(&mut self, at: Point, now_ms: f64) {
        *self = Self::Tracking(GestureSession::begin(at, now_ms));
    }

    /// Record the latest position; returns the updated session if one is active.
    pub fn update(&mut self, at: Point) -> Option<GestureSession> {
        match self {
            Self::Idle => None,
            Self::Tracking(session) => {
                session.current = at;
                Some(*session)
            }
        }
    }

    /// End the session and hand it back, leaving the state idle.
    pub fn finish(&mut self, at: Point) -> Option<GestureSession> {
        match std::mem::take(self) {
            Self::Idle => None,
            Self::Tracking(mut session) => {
                session.current = at;
                Some(session)
            }
        }
    }

    /// Drop the session without producing a result.
    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }

    #[must_use]
    pub fn is_tracking(&self) -> bool {
        matches!(self, Self::Tracking(_))
    }
}
