//! Interaction core for the landing page.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! page's moving parts: the particle network behind the hero, the entrance and
//! scroll-reveal choreography, the pre-registration modal, and the slide
//! carousel with its touch, drag, wheel, and keyboard recognizers. The host
//! layer only wires DOM events to the engine and executes the resulting
//! [`engine::Action`]s (class toggles, `Element.animate`, timers).
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`particles`] | Particle simulation, the [`particles::Surface`] trait, frame-loop flag |
//! | [`render`] | `Surface` implementation for the browser 2D context |
//! | [`tween`] | Declarative tween descriptions and CSS keyframe shaping |
//! | [`timeline`] | Sequencing tweens with overlapping offsets |
//! | [`entrance`] | Page-load choreography, float loops, and hero parallax |
//! | [`reveal`] | Fire-once scroll reveals |
//! | [`modal`] | Pre-registration dialog state machine |
//! | [`carousel`] | Active slide and transition lock |
//! | [`gesture`] | Swipe, drag, wheel, and key recognizers |
//! | [`input`] | Input event types and gesture sessions |
//! | [`scheduler`] | Cancellable delayed tasks |
//! | [`config`] | Runtime-tunable settings |
//! | [`consts`] | Default numeric constants (thresholds, timings, colors) |

pub mod carousel;
pub mod config;
pub mod consts;
pub mod engine;
pub mod entrance;
pub mod gesture;
pub mod input;
pub mod modal;
pub mod particles;
pub mod render;
pub mod reveal;
pub mod scheduler;
pub mod timeline;
pub mod tween;
