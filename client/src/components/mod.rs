//! Landing page sections.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render markup from the shared `LandingView` and forward DOM
//! events to the page host, which runs them through the motion engine.

pub mod features;
pub mod hero;
pub mod navbar;
pub mod particle_canvas;
pub mod register_modal;
pub mod showcase;
