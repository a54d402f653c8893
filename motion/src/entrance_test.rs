#![allow(clippy::float_cmp)]

use super::*;

fn target_of(t: &Tween) -> &str {
    match &t.target {
        Target::Selector(s) | Target::ChildrenOf(s) => s,
    }
}

fn find<'a>(plan: &'a [Tween], selector: &str) -> &'a Tween {
    plan.iter()
        .find(|t| target_of(t) == selector && !t.looped)
        .expect("selector in plan")
}

#[test]
fn navbar_drops_in_after_200ms() {
    let plan = load_plan(HeroLayout::default());
    let nav = find(&plan, NAVBAR);
    assert_eq!(nav.delay_ms, 200.0);
    assert_eq!(nav.duration_ms, 1000.0);
    assert_eq!(nav.from_value(Prop::TranslateY), Some(-100.0));
    assert_eq!(nav.easing, Easing::EaseOutExpo);
}

#[test]
fn hero_steps_overlap() {
    let tl = hero_timeline(HeroLayout { title_lines: 2, cta_buttons: 2 });
    // badge 0..1300, lines from 700, subtitle from 2050 - 1000, cta from 2050 - 800.
    assert_eq!(tl.starts(), vec![0.0, 700.0, 1050.0, 1250.0]);
    assert_eq!(tl.end_ms(), 2150.0);
}

#[test]
fn hero_tweens_carry_absolute_delays() {
    let plan = load_plan(HeroLayout::default());
    assert_eq!(find(&plan, HERO_BADGE).delay_ms, 500.0);
    let lines = find(&plan, HERO_TITLE_LINES);
    assert_eq!(lines.delay_for(0), 700.0);
    assert_eq!(lines.delay_for(1), 850.0);
    assert_eq!(find(&plan, HERO_SUBTITLE).delay_ms, 1050.0);
    assert_eq!(find(&plan, HERO_CTA_BUTTONS).delay_for(1), 1350.0);
}

#[test]
fn more_title_lines_push_later_steps() {
    let short = hero_timeline(HeroLayout { title_lines: 1, cta_buttons: 2 });
    let long = hero_timeline(HeroLayout { title_lines: 4, cta_buttons: 2 });
    assert!(long.starts()[2] > short.starts()[2]);
}

#[test]
fn stat_cards_stagger_from_one_second() {
    let plan = load_plan(HeroLayout::default());
    let cards = find(&plan, STAT_CARDS);
    assert_eq!(cards.delay_for(0), 1000.0);
    assert_eq!(cards.delay_for(2), 1400.0);
}

#[test]
fn float_loops_are_infinite_alternating() {
    let loops = float_loops();
    assert_eq!(loops.len(), 3);
    assert!(loops.iter().all(|t| t.looped && t.alternate));
    assert!(loops.iter().all(|t| t.easing == Easing::EaseInOutSine));
    assert_eq!(loops[1].duration_ms, 4000.0);
    assert_eq!(loops[1].from_value(Prop::TranslateY), Some(10.0));
    assert_eq!(loops[2].to_value(Prop::TranslateY), Some(5.0));
}

#[test]
fn parallax_at_center_is_zero() {
    let o = parallax_offset(Point::new(500.0, 400.0), 1000.0, 800.0);
    assert_eq!(o, Point::new(0.0, 0.0));
}

#[test]
fn parallax_signs_and_magnitudes() {
    let tweens = parallax(Point::new(1000.0, 0.0), 1000.0, 800.0);
    assert_eq!(tweens.len(), 3);
    assert_eq!(tweens[0].to_value(Prop::TranslateX), Some(10.0));
    assert_eq!(tweens[0].to_value(Prop::TranslateY), Some(-10.0));
    assert_eq!(tweens[1].to_value(Prop::TranslateX), Some(-10.0));
    assert_eq!(tweens[1].to_value(Prop::TranslateY), Some(10.0));
    assert_eq!(tweens[2].to_value(Prop::TranslateX), Some(5.0));
    assert!(tweens.iter().all(|t| t.duration_ms == 100.0 && t.easing == Easing::Linear));
    assert!(tweens.iter().all(|t| !t.has_from_frame()));
}

#[test]
fn parallax_with_empty_viewport_is_zero() {
    assert_eq!(parallax_offset(Point::new(10.0, 10.0), 0.0, 0.0), Point::default());
}
