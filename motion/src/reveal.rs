//! Fire-once scroll reveals.
//!
//! Elements are tagged in the markup with `data-reveal="<id>"`. Section headers
//! are observed as soon as they register; grid items start being observed one
//! stagger step apart. The first sufficiently visible notification for an
//! element yields its entrance tween and retires it, so scrolling back past it
//! never replays the animation.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::tween::{Easing, Prop, Target, Tween};

/// Index of a registered element, matching its `data-reveal` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RevealId(pub usize);

impl RevealId {
    /// Attribute selector for the tagged element.
    #[must_use]
    pub fn selector(self) -> String {
        format!("[data-reveal=\"{}\"]", self.0)
    }
}

/// How a registered element animates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealKind {
    /// Children rise and fade in one after another.
    SectionHeader,
    /// The element scales up slightly while fading in.
    GridItem,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Registered but not yet observed.
    Waiting,
    Observed,
    Revealed,
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    kind: RevealKind,
    phase: Phase,
}

/// Registry of scroll-revealed elements.
#[derive(Debug, Clone)]
pub struct Reveal {
    pub threshold: f64,
    pub grid_stagger_ms: f64,
    entries: Vec<Entry>,
}

impl Reveal {
    #[must_use]
    pub fn new(threshold: f64, grid_stagger_ms: f64) -> Self {
        Self { threshold, grid_stagger_ms, entries: Vec::new() }
    }

    /// Register an element. Headers are observed immediately; grid items wait
    /// for [`Reveal::observe`].
    pub fn register(&mut self, kind: RevealKind) -> RevealId {
        let phase = match kind {
            RevealKind::SectionHeader => Phase::Observed,
            RevealKind::GridItem => Phase::Waiting,
        };
        self.entries.push(Entry { kind, phase });
        RevealId(self.entries.len() - 1)
    }

    /// Delay before the `nth` grid item (0-based, in grid order) starts being observed.
    #[must_use]
    pub fn grid_delay_ms(&self, nth: usize) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let n = nth as f64;
        n * self.grid_stagger_ms
    }

    /// Move a waiting element into observation. Returns `false` for unknown
    /// ids and elements already observed or revealed.
    pub fn observe(&mut self, id: RevealId) -> bool {
        match self.entries.get_mut(id.0) {
            Some(entry) if entry.phase == Phase::Waiting => {
                entry.phase = Phase::Observed;
                true
            }
            _ => false,
        }
    }

    /// Handle a visibility notification.
    ///
    /// Returns the entrance tween the first time an observed element reaches
    /// the threshold; the element is then retired and must be unobserved.
    pub fn intersect(&mut self, id: RevealId, ratio: f64) -> Option<Tween> {
        let threshold = self.threshold;
        let entry = self.entries.get_mut(id.0)?;
        if entry.phase != Phase::Observed || ratio < threshold {
            return None;
        }
        entry.phase = Phase::Revealed;
        Some(entrance(id, entry.kind))
    }

    /// The hidden starting state applied when an element registers.
    #[must_use]
    pub fn initial_target(id: RevealId, kind: RevealKind) -> Target {
        match kind {
            RevealKind::SectionHeader => Target::ChildrenOf(id.selector()),
            RevealKind::GridItem => Target::Selector(id.selector()),
        }
    }

    #[must_use]
    pub fn is_observed(&self, id: RevealId) -> bool {
        self.entries.get(id.0).is_some_and(|e| e.phase == Phase::Observed)
    }

    #[must_use]
    pub fn is_revealed(&self, id: RevealId) -> bool {
        self.entries.get(id.0).is_some_and(|e| e.phase == Phase::Revealed)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn entrance(id: RevealId, kind: RevealKind) -> Tween {
    match kind {
        RevealKind::SectionHeader => Tween::new(Reveal::initial_target(id, kind), 800.0)
            .from_to(Prop::TranslateY, 30.0, 0.0)
            .fade_in()
            .stagger(100.0)
            .easing(Easing::EaseOutCubic),
        RevealKind::GridItem => Tween::new(Reveal::initial_target(id, kind), 600.0)
            .from_to(Prop::Scale, 0.9, 1.0)
            .fade_in()
            .easing(Easing::EaseOutCubic),
    }
}
