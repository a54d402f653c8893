#![allow(clippy::float_cmp)]

use super::*;

fn started(n: usize) -> Carousel {
    let mut c = Carousel::new(n);
    c.activate_initial();
    c.release();
    c
}

fn marked(c: &Carousel) -> Vec<usize> {
    c.markers().iter().enumerate().filter(|(_, m)| **m).map(|(i, _)| i).collect()
}

// =============================================================
// Initialization
// =============================================================

#[test]
fn nothing_marked_before_init() {
    let c = Carousel::new(5);
    assert!(marked(&c).is_empty());
}

#[test]
fn init_activates_slide_zero_with_entrance() {
    let mut c = Carousel::new(5);
    let t = c.activate_initial().expect("initial transition");
    assert_eq!(t.index, 0);
    assert_eq!(t.tweens.len(), 3);
    assert!(c.is_transitioning());
    assert_eq!(marked(&c), vec![0]);
}

#[test]
fn empty_carousel_never_transitions() {
    let mut c = Carousel::new(0);
    assert!(c.activate_initial().is_none());
    assert!(c.advance().is_none());
    assert!(c.retreat().is_none());
}

// =============================================================
// Guards
// =============================================================

#[test]
fn navigate_to_current_is_noop() {
    let mut c = started(5);
    assert!(c.navigate_to(0).is_none());
    assert!(!c.is_transitioning());
}

#[test]
fn navigate_while_locked_is_noop() {
    let mut c = started(5);
    assert!(c.navigate_to(2).is_some());
    assert!(c.navigate_to(3).is_none());
    assert_eq!(c.active(), 2);
    c.release();
    assert!(c.navigate_to(3).is_some());
}

#[test]
fn out_of_range_target_is_ignored() {
    let mut c = started(5);
    assert!(c.navigate_to(5).is_none());
    assert_eq!(c.active(), 0);
    assert!(!c.is_transitioning());
}

// =============================================================
// Wrap-around
// =============================================================

#[test]
fn advance_wraps_from_last_to_first() {
    let mut c = started(5);
    c.navigate_to(4);
    c.release();
    assert_eq!(c.advance().map(|t| t.index), Some(0));
}

#[test]
fn retreat_wraps_from_first_to_last() {
    let mut c = started(5);
    assert_eq!(c.retreat().map(|t| t.index), Some(4));
}

#[test]
fn advance_then_retreat_returns_to_start() {
    for start in 0..5 {
        let mut c = started(5);
        c.navigate_to(start);
        c.release();
        c.step(Direction::Advance);
        c.release();
        c.step(Direction::Retreat);
        assert_eq!(c.active(), start);
    }
}

#[test]
fn single_slide_cannot_move() {
    let mut c = started(1);
    assert!(c.advance().is_none());
    assert!(c.retreat().is_none());
}

// =============================================================
// Markers
// =============================================================

#[test]
fn exactly_one_marker_after_any_sequence() {
    let mut c = started(5);
    let moves = [
        Direction::Advance,
        Direction::Advance,
        Direction::Retreat,
        Direction::Retreat,
        Direction::Retreat,
        Direction::Advance,
    ];
    for d in moves {
        c.step(d);
        c.release();
        assert_eq!(marked(&c), vec![c.active()]);
    }
}

// =============================================================
// Sub-animations
// =============================================================

#[test]
fn entrance_targets_new_slide_children() {
    let tweens = slide_entrance(3);
    assert_eq!(tweens[0].target, Target::selector(".slide[data-slide=\"3\"] .slide-title"));
    assert_eq!(tweens[1].target, Target::selector(".slide[data-slide=\"3\"] .slide-desc"));
    assert_eq!(tweens[2].target, Target::selector(".slide[data-slide=\"3\"] .slide-icon"));
}

#[test]
fn entrance_timings() {
    let tweens = slide_entrance(0);
    let timings: Vec<(f64, f64)> = tweens.iter().map(|t| (t.duration_ms, t.delay_ms)).collect();
    assert_eq!(timings, vec![(800.0, 300.0), (600.0, 500.0), (600.0, 200.0)]);
    assert_eq!(tweens[2].easing, Easing::EaseOutBack);
    assert_eq!(tweens[2].from_value(Prop::Scale), Some(0.5));
}
