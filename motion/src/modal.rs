//! Pre-registration dialog state machine.
//!
//! Submission is mocked: the button flips to a pending look immediately and
//! the dialog closes after a fixed delay. Nothing leaves the page.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use crate::tween::{Easing, Prop, Target, Tween};

pub const MODAL_CONTENT: &str = ".modal-content";

/// Visibility of the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

/// What a submit produced, for the owner to schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Show the pending look and schedule completion.
    Accepted,
    /// A submission is already pending, or the dialog is closed.
    Ignored,
}

/// Copy shown to the visitor once the mock registration completes.
#[must_use]
pub fn confirmation_message(email: &str) -> String {
    format!("Thanks for joining! We'll notify {email} when we launch.")
}

/// Modal controller.
///
/// Closing the dialog while a submission is pending does not cancel it; the
/// completion still resets the form and confirms.
#[derive(Debug, Clone, Default)]
pub struct Modal {
    state: ModalState,
    pending_email: Option<String>,
}

impl Modal {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> ModalState {
        self.state
    }

    /// Whether the overlay carries its active (visible) marker.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state == ModalState::Open
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.pending_email.is_some()
    }

    /// Show the dialog. Returns the content entrance tween when it was closed.
    pub fn open(&mut self) -> Option<Tween> {
        if self.is_active() {
            return None;
        }
        self.state = ModalState::Open;
        Some(
            Tween::new(Target::selector(MODAL_CONTENT), 400.0)
                .from_to(Prop::Scale, 0.9, 1.0)
                .fade_in()
                .easing(Easing::EaseOutCubic),
        )
    }

    /// Hide the dialog. Returns `false` if it was already closed.
    pub fn close(&mut self) -> bool {
        if self.is_active() {
            self.state = ModalState::Closed;
            return true;
        }
        false
    }

    /// A click landed on the overlay or something inside it. Only a click on
    /// the overlay background itself closes.
    pub fn overlay_click(&mut self, target_is_overlay: bool) -> bool {
        target_is_overlay && self.close()
    }

    pub fn submit(&mut self, email: &str) -> SubmitOutcome {
        if !self.is_active() || self.is_submitting() {
            return SubmitOutcome::Ignored;
        }
        self.pending_email = Some(email.to_owned());
        SubmitOutcome::Accepted
    }

    /// Finish the mock registration: close and return the confirmation text.
    pub fn complete(&mut self) -> Option<String> {
        let email = self.pending_email.take()?;
        self.state = ModalState::Closed;
        Some(confirmation_message(&email))
    }
}
