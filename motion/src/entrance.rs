//! Page-load choreography and hero parallax.
//!
//! The selectors here are the page's contract with its markup; the client's
//! view uses the same class names.

#[cfg(test)]
#[path = "entrance_test.rs"]
mod entrance_test;

use crate::input::Point;
use crate::timeline::{Offset, Timeline};
use crate::tween::{Easing, Prop, Target, Tween};

pub const NAVBAR: &str = ".navbar";
pub const HERO_BADGE: &str = ".badge";
pub const HERO_TITLE_LINES: &str = ".hero-title .line";
pub const HERO_SUBTITLE: &str = ".hero-subtitle";
pub const HERO_CTA_BUTTONS: &str = ".hero-cta button";
pub const STAT_CARDS: &str = ".stat-card";
pub const CARD_1: &str = ".card-1";
pub const CARD_2: &str = ".card-2";
pub const CARD_3: &str = ".card-3";

/// Parallax travel at the viewport edge, in px either side of center.
const PARALLAX_RANGE_PX: f64 = 20.0;

/// Parallax tween length; short enough to track the pointer, long enough to smooth jitter.
const PARALLAX_MS: f64 = 100.0;

/// How many elements each hero group holds in the page markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroLayout {
    pub title_lines: usize,
    pub cta_buttons: usize,
}

impl Default for HeroLayout {
    fn default() -> Self {
        Self { title_lines: 2, cta_buttons: 2 }
    }
}

/// The one-shot tweens fired once when the page loads, followed by the
/// infinite float loops on the stat cards.
#[must_use]
pub fn load_plan(layout: HeroLayout) -> Vec<Tween> {
    let mut plan = vec![
        Tween::new(Target::selector(NAVBAR), 1000.0)
            .from_to(Prop::TranslateY, -100.0, 0.0)
            .fade_in()
            .easing(Easing::EaseOutExpo)
            .delay(200.0),
    ];

    plan.extend(hero_timeline(layout).into_tweens());

    plan.push(
        Tween::new(Target::selector(STAT_CARDS), 1000.0)
            .from_to(Prop::TranslateY, 50.0, 0.0)
            .fade_in()
            .stagger_from(200.0, 1000.0)
            .easing(Easing::EaseOutExpo),
    );

    plan.extend(float_loops());
    plan
}

/// Badge, title, subtitle, and calls to action, overlapping as they arrive.
#[must_use]
pub fn hero_timeline(layout: HeroLayout) -> Timeline {
    let badge = Tween::new(Target::selector(HERO_BADGE), 800.0)
        .from_to(Prop::Scale, 0.0, 1.0)
        .fade_in()
        .delay(500.0);
    let lines = Tween::new(Target::selector(HERO_TITLE_LINES), 1200.0)
        .from_to(Prop::TranslateY, 50.0, 0.0)
        .fade_in()
        .stagger(150.0);
    let subtitle = Tween::new(Target::selector(HERO_SUBTITLE), 800.0)
        .from_to(Prop::TranslateY, 20.0, 0.0)
        .fade_in();
    let cta = Tween::new(Target::selector(HERO_CTA_BUTTONS), 800.0)
        .from_to(Prop::TranslateY, 20.0, 0.0)
        .fade_in()
        .stagger(100.0);

    Timeline::new(Easing::EaseOutExpo)
        .add(badge, 1, Offset::AfterPrevious)
        .add(lines, layout.title_lines, Offset::FromEnd(-600.0))
        .add(subtitle, 1, Offset::FromEnd(-1000.0))
        .add(cta, layout.cta_buttons, Offset::FromEnd(-800.0))
}

/// Endless bobbing of the three stat cards, each on its own period.
#[must_use]
pub fn float_loops() -> Vec<Tween> {
    [(CARD_1, -10.0, 10.0, 3000.0), (CARD_2, 10.0, -10.0, 4000.0), (CARD_3, -5.0, 5.0, 3500.0)]
        .into_iter()
        .map(|(card, from, to, period)| {
            Tween::new(Target::selector(card), period)
                .from_to(Prop::TranslateY, from, to)
                .easing(Easing::EaseInOutSine)
                .yoyo()
        })
        .collect()
}

/// Offset of the pointer from the viewport center, scaled to the parallax range.
#[must_use]
pub fn parallax_offset(pointer: Point, viewport_w: f64, viewport_h: f64) -> Point {
    if viewport_w <= 0.0 || viewport_h <= 0.0 {
        return Point::default();
    }
    Point::new(
        (pointer.x / viewport_w - 0.5) * PARALLAX_RANGE_PX,
        (pointer.y / viewport_h - 0.5) * PARALLAX_RANGE_PX,
    )
}

/// Short linear tweens easing each card toward its pointer-relative offset.
/// Card 2 moves against the pointer and card 3 at half strength.
#[must_use]
pub fn parallax(pointer: Point, viewport_w: f64, viewport_h: f64) -> Vec<Tween> {
    let o = parallax_offset(pointer, viewport_w, viewport_h);
    [(CARD_1, 1.0), (CARD_2, -1.0), (CARD_3, 0.5)]
        .into_iter()
        .map(|(card, k)| {
            Tween::new(Target::selector(card), PARALLAX_MS)
                .to(Prop::TranslateX, o.x * k)
                .to(Prop::TranslateY, o.y * k)
                .easing(Easing::Linear)
        })
        .collect()
}
