//! Slide carousel state: active index plus an exclusive transition lock.
//!
//! Every input modality reduces to [`Direction`] and lands in
//! [`Carousel::navigate_to`], which is the only place `active` changes. The
//! lock is time-based: the owner schedules [`Carousel::release`] after each
//! accepted transition.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

use crate::gesture::Direction;
use crate::tween::{Easing, Prop, Target, Tween};

pub const SLIDES: &str = ".slide";

/// Marker and animation work for one accepted transition.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    /// The newly active index; the host marks this slide and indicator and
    /// clears every other.
    pub index: usize,
    /// Entrance animations for the new slide's title, description, and icon.
    pub tweens: Vec<Tween>,
}

/// Carousel over a fixed number of slides.
#[derive(Debug, Clone)]
pub struct Carousel {
    slide_count: usize,
    active: usize,
    transitioning: bool,
    /// `markers[i]` mirrors whether slide `i` and indicator `i` are marked active.
    markers: Vec<bool>,
}

impl Carousel {
    /// A carousel with `slide_count` slides, none marked yet. Call
    /// [`Carousel::activate_initial`] to bring up slide 0.
    #[must_use]
    pub fn new(slide_count: usize) -> Self {
        Self {
            slide_count,
            active: 0,
            transitioning: false,
            markers: vec![false; slide_count],
        }
    }

    #[must_use]
    pub fn active(&self) -> usize {
        self.active
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slide_count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slide_count == 0
    }

    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    /// Which slides currently carry the active marker.
    #[must_use]
    pub fn markers(&self) -> &[bool] {
        &self.markers
    }

    /// Bring up slide 0 through the normal transition, even though it is
    /// already the active index.
    pub fn activate_initial(&mut self) -> Option<Transition> {
        if self.transitioning || self.is_empty() {
            return None;
        }
        Some(self.enter(0))
    }

    /// Move to `target`. No-op while transitioning, for the current index, and
    /// for indices out of range.
    pub fn navigate_to(&mut self, target: usize) -> Option<Transition> {
        if self.transitioning || target == self.active || target >= self.slide_count {
            return None;
        }
        Some(self.enter(target))
    }

    pub fn step(&mut self, direction: Direction) -> Option<Transition> {
        match direction {
            Direction::Advance => self.advance(),
            Direction::Retreat => self.retreat(),
        }
    }

    /// Next slide, wrapping to the first.
    pub fn advance(&mut self) -> Option<Transition> {
        if self.is_empty() {
            return None;
        }
        self.navigate_to((self.active + 1) % self.slide_count)
    }

    /// Previous slide, wrapping to the last.
    pub fn retreat(&mut self) -> Option<Transition> {
        if self.is_empty() {
            return None;
        }
        self.navigate_to((self.active + self.slide_count - 1) % self.slide_count)
    }

    /// Drop the transition lock.
    pub fn release(&mut self) {
        self.transitioning = false;
    }

    fn enter(&mut self, target: usize) -> Transition {
        self.transitioning = true;
        self.active = target;
        for (i, marked) in self.markers.iter_mut().enumerate() {
            *marked = i == target;
        }
        log::debug!("carousel: slide {target} active");
        Transition { index: target, tweens: slide_entrance(target) }
    }
}

/// Selector for the slide at `index`.
#[must_use]
pub fn slide_selector(index: usize) -> String {
    format!("{SLIDES}[data-slide=\"{index}\"]")
}

/// Title, description, and icon entrances for the slide at `index`.
#[must_use]
pub fn slide_entrance(index: usize) -> Vec<Tween> {
    let slide = slide_selector(index);
    vec![
        Tween::new(Target::Selector(format!("{slide} .slide-title")), 800.0)
            .from_to(Prop::TranslateY, 30.0, 0.0)
            .fade_in()
            .delay(300.0)
            .easing(Easing::EaseOutExpo),
        Tween::new(Target::Selector(format!("{slide} .slide-desc")), 600.0)
            .from_to(Prop::TranslateY, 20.0, 0.0)
            .fade_in()
            .delay(500.0)
            .easing(Easing::EaseOutCubic),
        Tween::new(Target::Selector(format!("{slide} .slide-icon")), 600.0)
            .from_to(Prop::Scale, 0.5, 1.0)
            .fade_in()
            .delay(200.0)
            .easing(Easing::EaseOutBack),
    ]
}
