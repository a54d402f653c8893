//! Sequenced tweens with overlapping offsets.
//!
//! Steps are placed relative to the timeline's running end. `FromEnd(-600.0)`
//! starts a step 600 ms before everything so far has finished, which is how
//! the hero copy cascades in rather than waiting for each line in turn.

#[cfg(test)]
#[path = "timeline_test.rs"]
mod timeline_test;

use crate::tween::{Easing, Tween};

/// Where a step starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Offset {
    /// At the current end of the timeline.
    AfterPrevious,
    /// At the current end plus this many ms (negative overlaps).
    FromEnd(f64),
    /// At an absolute time from the timeline's start.
    At(f64),
}

#[derive(Debug, Clone)]
struct Step {
    tween: Tween,
    start_ms: f64,
}

/// Builder that resolves offsets into absolute per-tween delays.
#[derive(Debug, Clone)]
pub struct Timeline {
    easing: Easing,
    steps: Vec<Step>,
    end_ms: f64,
}

impl Timeline {
    /// A timeline whose steps inherit `easing`.
    #[must_use]
    pub fn new(easing: Easing) -> Self {
        Self { easing, steps: Vec::new(), end_ms: 0.0 }
    }

    /// Add a step. `count` is the number of elements the target matches, used
    /// to account for stagger when extending the timeline.
    #[must_use]
    pub fn add(mut self, tween: Tween, count: usize, offset: Offset) -> Self {
        let start_ms = match offset {
            Offset::AfterPrevious => self.end_ms,
            Offset::FromEnd(delta) => (self.end_ms + delta).max(0.0),
            Offset::At(at) => at.max(0.0),
        };
        let tween = tween.easing(self.easing);
        self.end_ms = self.end_ms.max(start_ms + tween.span_ms(count));
        self.steps.push(Step { tween, start_ms });
        self
    }

    /// Total length of everything added so far.
    #[must_use]
    pub fn end_ms(&self) -> f64 {
        self.end_ms
    }

    /// Start times of each step, in insertion order.
    #[must_use]
    pub fn starts(&self) -> Vec<f64> {
        self.steps.iter().map(|s| s.start_ms).collect()
    }

    /// Flatten into standalone tweens whose delays include their step start.
    #[must_use]
    pub fn into_tweens(self) -> Vec<Tween> {
        self.steps
            .into_iter()
            .map(|s| {
                let delay = s.start_ms + s.tween.delay_ms;
                s.tween.delay(delay)
            })
            .collect()
    }
}
