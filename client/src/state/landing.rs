//! Presentation state the page renders declaratively.
//!
//! DESIGN
//! ======
//! The engine decides *when* a slide or the dialog changes; this struct holds
//! the resulting view so components can bind classes and text to one
//! `RwSignal<LandingView>` instead of poking the DOM.

#[cfg(test)]
#[path = "landing_test.rs"]
mod landing_test;

use motion::engine::Action;

/// Default label of the register form's submit button.
pub const SUBMIT_LABEL: &str = "Join Waitlist";

/// View state for the landing page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LandingView {
    /// Slide and indicator carrying the active marker.
    pub active_slide: Option<usize>,
    pub modal_open: bool,
    /// Label override while a registration is pending.
    pub pending_label: Option<String>,
    /// Background set by the first submission. Completion restores only the
    /// label, so the color stays.
    pub submit_color: Option<String>,
    /// Bound value of the email field.
    pub email: String,
}

impl LandingView {
    /// Fold a view-level action into the state. Returns `false` for actions
    /// the view does not own.
    pub fn apply(&mut self, action: &Action) -> bool {
        match action {
            Action::SetActiveSlide(index) => self.active_slide = Some(*index),
            Action::ModalActive(open) => self.modal_open = *open,
            Action::SetSubmitButton { label, color } => {
                self.pending_label = Some(label.clone());
                self.submit_color = Some(color.clone());
            }
            Action::RestoreSubmitButton => self.pending_label = None,
            Action::ResetForm => self.email.clear(),
            _ => return false,
        }
        true
    }

    #[must_use]
    pub fn is_slide_active(&self, index: usize) -> bool {
        self.active_slide == Some(index)
    }

    #[must_use]
    pub fn submit_label(&self) -> String {
        self.pending_label.clone().unwrap_or_else(|| SUBMIT_LABEL.to_owned())
    }

    /// Inline `background` override, empty when the button uses its stylesheet color.
    #[must_use]
    pub fn submit_background(&self) -> String {
        self.submit_color.clone().unwrap_or_default()
    }
}
