//! Shared numeric constants for the motion crate.
//!
//! These are the defaults behind [`crate::config::LandingConfig`]; runtime code
//! reads the config, not these values directly.

// ── Particle field ──────────────────────────────────────────────

/// Particles generated per batch (initial load and every resize).
pub const PARTICLE_COUNT: usize = 50;

/// Maximum absolute velocity component, in px per frame.
pub const PARTICLE_MAX_SPEED: f64 = 0.25;

/// Smallest particle radius in px.
pub const PARTICLE_MIN_RADIUS: f64 = 1.0;

/// Largest particle radius in px.
pub const PARTICLE_MAX_RADIUS: f64 = 3.0;

/// Two particles closer than this are joined by a line.
pub const LINK_DISTANCE: f64 = 150.0;

/// Link alpha at zero distance.
pub const LINK_BASE_ALPHA: f64 = 0.1;

/// Link alpha falls by `distance / LINK_ALPHA_FALLOFF`.
pub const LINK_ALPHA_FALLOFF: f64 = 1500.0;

/// Fill alpha of particle dots.
pub const PARTICLE_FILL_ALPHA: f64 = 0.3;

/// Brand green shared by dots and links.
pub const PARTICLE_RGB: [u8; 3] = [34, 197, 94];

// ── Carousel ────────────────────────────────────────────────────

/// Time-based transition lock, in ms.
pub const CAROUSEL_LOCK_MS: f64 = 800.0;

// ── Gestures ────────────────────────────────────────────────────

/// Lower bound applied to elapsed gesture time before dividing by it.
pub const MIN_GESTURE_ELAPSED_MS: f64 = 1.0;

/// Touch: horizontal travel needed for a fast swipe.
pub const TOUCH_FAST_THRESHOLD_PX: f64 = 40.0;
/// Touch: horizontal travel needed for a slow swipe.
pub const TOUCH_SLOW_THRESHOLD_PX: f64 = 100.0;
/// Touch: velocity above which the fast threshold applies, in px/ms.
pub const TOUCH_FAST_VELOCITY: f64 = 0.5;
/// Touch: horizontal travel after which page scrolling is suppressed.
pub const TOUCH_SCROLL_LOCK_PX: f64 = 15.0;

/// Mouse drag: horizontal travel needed for a fast drag.
pub const DRAG_FAST_THRESHOLD_PX: f64 = 50.0;
/// Mouse drag: horizontal travel needed for a slow drag.
pub const DRAG_SLOW_THRESHOLD_PX: f64 = 120.0;
/// Mouse drag: velocity above which the fast threshold applies, in px/ms.
pub const DRAG_FAST_VELOCITY: f64 = 0.3;

/// Wheel: minimum horizontal delta treated as intentional.
pub const WHEEL_MIN_DELTA_PX: f64 = 20.0;
/// Wheel: suppression window after an accepted wheel command, in ms.
pub const WHEEL_COOLDOWN_MS: f64 = 600.0;

// ── Reveal ──────────────────────────────────────────────────────

/// Visible fraction at which an observed element counts as seen.
pub const REVEAL_THRESHOLD: f64 = 0.2;

/// Delay between registering consecutive grid items, in ms.
pub const GRID_OBSERVE_STAGGER_MS: f64 = 100.0;

// ── Modal ───────────────────────────────────────────────────────

/// Artificial latency of the mocked registration, in ms.
pub const REGISTER_DELAY_MS: f64 = 1000.0;

/// Submit button label while the mock registration runs.
pub const REGISTER_PENDING_LABEL: &str = "Joined!";

/// Submit button background while the mock registration runs.
pub const REGISTER_PENDING_COLOR: &str = "#22c55e";
