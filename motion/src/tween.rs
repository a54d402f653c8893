//! Declarative tween descriptions handed to the host's animation capability.
//!
//! A [`Tween`] says *what* should move; the browser's Web Animations API does
//! the interpolation. Helpers here only shape the description into CSS
//! (transform strings, `cubic-bezier` easings, per-element delays).

#[cfg(test)]
#[path = "tween_test.rs"]
mod tween_test;

/// Easing curves used by the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    #[default]
    Linear,
    EaseOutExpo,
    EaseOutCubic,
    EaseInOutSine,
    /// Overshoots slightly past the target before settling.
    EaseOutBack,
}

impl Easing {
    /// CSS timing function equivalent.
    #[must_use]
    pub fn css(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::EaseOutExpo => "cubic-bezier(0.16, 1, 0.3, 1)",
            Self::EaseOutCubic => "cubic-bezier(0.33, 1, 0.68, 1)",
            Self::EaseInOutSine => "cubic-bezier(0.37, 0, 0.63, 1)",
            Self::EaseOutBack => "cubic-bezier(0.34, 1.56, 0.64, 1)",
        }
    }
}

/// Animatable properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prop {
    /// Horizontal translation in px.
    TranslateX,
    /// Vertical translation in px.
    TranslateY,
    /// Uniform scale factor.
    Scale,
    Opacity,
}

/// One property's motion. `from: None` starts at the element's current value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropTween {
    pub prop: Prop,
    pub from: Option<f64>,
    pub to: f64,
}

impl PropTween {
    #[must_use]
    pub fn between(prop: Prop, from: f64, to: f64) -> Self {
        Self { prop, from: Some(from), to }
    }

    #[must_use]
    pub fn to(prop: Prop, to: f64) -> Self {
        Self { prop, from: None, to }
    }
}

/// Which element(s) a tween applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Every element matching a CSS selector, in document order.
    Selector(String),
    /// The element children of the first element matching a selector.
    ChildrenOf(String),
}

impl Target {
    #[must_use]
    pub fn selector(s: &str) -> Self {
        Self::Selector(s.to_owned())
    }
}

/// Per-element delay increment across a group.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Stagger {
    /// Added per element index, in ms.
    pub step_ms: f64,
    /// Added to every element before the step, in ms.
    pub start_ms: f64,
}

/// A complete animation request.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    pub target: Target,
    pub props: Vec<PropTween>,
    pub duration_ms: f64,
    pub delay_ms: f64,
    pub easing: Easing,
    pub stagger: Option<Stagger>,
    /// Repeat forever.
    pub looped: bool,
    /// Play every other iteration backwards.
    pub alternate: bool,
}

impl Tween {
    #[must_use]
    pub fn new(target: Target, duration_ms: f64) -> Self {
        Self {
            target,
            props: Vec::new(),
            duration_ms,
            delay_ms: 0.0,
            easing: Easing::Linear,
            stagger: None,
            looped: false,
            alternate: false,
        }
    }

    #[must_use]
    pub fn prop(mut self, prop: PropTween) -> Self {
        self.props.push(prop);
        self
    }

    /// Animate `prop` from `from` to `to`.
    #[must_use]
    pub fn from_to(self, prop: Prop, from: f64, to: f64) -> Self {
        self.prop(PropTween::between(prop, from, to))
    }

    /// Animate `prop` from its current value to `to`.
    #[must_use]
    pub fn to(self, prop: Prop, to: f64) -> Self {
        self.prop(PropTween::to(prop, to))
    }

    /// Shorthand for the common `opacity: [0, 1]` fade-in.
    #[must_use]
    pub fn fade_in(self) -> Self {
        self.from_to(Prop::Opacity, 0.0, 1.0)
    }

    #[must_use]
    pub fn delay(mut self, ms: f64) -> Self {
        self.delay_ms = ms;
        self
    }

    #[must_use]
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    #[must_use]
    pub fn stagger(mut self, step_ms: f64) -> Self {
        self.stagger = Some(Stagger { step_ms, start_ms: 0.0 });
        self
    }

    #[must_use]
    pub fn stagger_from(mut self, step_ms: f64, start_ms: f64) -> Self {
        self.stagger = Some(Stagger { step_ms, start_ms });
        self
    }

    /// Infinite back-and-forth loop.
    #[must_use]
    pub fn yoyo(mut self) -> Self {
        self.looped = true;
        self.alternate = true;
        self
    }

    /// Delay for the element at `index` within the target group.
    #[must_use]
    pub fn delay_for(&self, index: usize) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let i = index as f64;
        match self.stagger {
            Some(s) => self.delay_ms + s.start_ms + s.step_ms * i,
            None => self.delay_ms,
        }
    }

    /// Time from the tween's zero until the last of `count` elements finishes
    /// one iteration.
    #[must_use]
    pub fn span_ms(&self, count: usize) -> f64 {
        self.delay_for(count.saturating_sub(1)) + self.duration_ms
    }

    /// Starting value of `prop`, if it has an explicit one.
    #[must_use]
    pub fn from_value(&self, prop: Prop) -> Option<f64> {
        self.props.iter().find(|p| p.prop == prop).and_then(|p| p.from)
    }

    /// Target value of `prop`, if the tween touches it.
    #[must_use]
    pub fn to_value(&self, prop: Prop) -> Option<f64> {
        self.props.iter().find(|p| p.prop == prop).map(|p| p.to)
    }

    /// Whether every animated property has an explicit start.
    #[must_use]
    pub fn has_from_frame(&self) -> bool {
        !self.props.is_empty() && self.props.iter().all(|p| p.from.is_some())
    }
}

/// One keyframe in CSS terms.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CssFrame {
    /// `transform` value, absent if no transform property is animated.
    pub transform: Option<String>,
    pub opacity: Option<f64>,
}

/// Which end of a tween to express.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    From,
    To,
}

/// Build the CSS keyframe for one end of a tween.
#[must_use]
pub fn css_frame(tween: &Tween, edge: Edge) -> CssFrame {
    let pick = |p: &PropTween| match edge {
        Edge::From => p.from,
        Edge::To => Some(p.to),
    };

    let mut transform = String::new();
    let mut opacity = None;
    for p in &tween.props {
        let Some(value) = pick(p) else {
            continue;
        };
        if !transform.is_empty() && p.prop != Prop::Opacity {
            transform.push(' ');
        }
        match p.prop {
            Prop::TranslateX => transform.push_str(&format!("translateX({value}px)")),
            Prop::TranslateY => transform.push_str(&format!("translateY({value}px)")),
            Prop::Scale => transform.push_str(&format!("scale({value})")),
            Prop::Opacity => opacity = Some(value),
        }
    }

    CssFrame { transform: (!transform.is_empty()).then_some(transform), opacity }
}
