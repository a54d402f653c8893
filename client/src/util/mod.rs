//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns from component logic. The pure
//! halves (`animate` keyframe building, `config` parsing) test natively; the
//! DOM-bound modules only compile for the browser.

pub mod animate;
pub mod config;
#[cfg(feature = "csr")]
pub mod dom;
#[cfg(feature = "csr")]
pub mod host;
#[cfg(feature = "csr")]
pub mod observer;
