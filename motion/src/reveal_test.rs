#![allow(clippy::float_cmp)]

use super::*;

fn registry() -> Reveal {
    Reveal::new(0.2, 100.0)
}

#[test]
fn header_is_observed_on_register() {
    let mut r = registry();
    let id = r.register(RevealKind::SectionHeader);
    assert!(r.is_observed(id));
    assert!(!r.observe(id));
}

#[test]
fn grid_item_waits_for_observe() {
    let mut r = registry();
    let id = r.register(RevealKind::GridItem);
    assert!(!r.is_observed(id));
    assert!(r.intersect(id, 1.0).is_none());
    assert!(r.observe(id));
    assert!(r.is_observed(id));
}

#[test]
fn grid_delays_step_by_index() {
    let r = registry();
    assert_eq!(r.grid_delay_ms(0), 0.0);
    assert_eq!(r.grid_delay_ms(3), 300.0);
}

#[test]
fn below_threshold_is_ignored() {
    let mut r = registry();
    let id = r.register(RevealKind::SectionHeader);
    assert!(r.intersect(id, 0.19).is_none());
    assert!(r.is_observed(id));
    assert!(r.intersect(id, 0.2).is_some());
}

#[test]
fn reveal_fires_once() {
    let mut r = registry();
    let id = r.register(RevealKind::GridItem);
    r.observe(id);
    assert!(r.intersect(id, 0.5).is_some());
    assert!(r.is_revealed(id));
    assert!(r.intersect(id, 1.0).is_none());
    assert!(!r.observe(id));
}

#[test]
fn header_tween_staggers_children() {
    let mut r = registry();
    let id = r.register(RevealKind::SectionHeader);
    let t = r.intersect(id, 1.0).expect("tween");
    assert_eq!(t.target, Target::ChildrenOf("[data-reveal=\"0\"]".to_owned()));
    assert_eq!(t.duration_ms, 800.0);
    assert_eq!(t.delay_for(2), 200.0);
    assert_eq!(t.from_value(Prop::TranslateY), Some(30.0));
    assert_eq!(t.easing, Easing::EaseOutCubic);
}

#[test]
fn grid_tween_scales_element() {
    let mut r = registry();
    r.register(RevealKind::SectionHeader);
    let id = r.register(RevealKind::GridItem);
    r.observe(id);
    let t = r.intersect(id, 0.3).expect("tween");
    assert_eq!(t.target, Target::Selector("[data-reveal=\"1\"]".to_owned()));
    assert_eq!(t.from_value(Prop::Scale), Some(0.9));
    assert_eq!(t.duration_ms, 600.0);
}

#[test]
fn unknown_id_is_ignored() {
    let mut r = registry();
    assert!(r.intersect(RevealId(9), 1.0).is_none());
    assert!(!r.observe(RevealId(9)));
    assert!(r.is_empty());
}

#[test]
fn initial_target_hides_header_children() {
    assert_eq!(
        Reveal::initial_target(RevealId(4), RevealKind::SectionHeader),
        Target::ChildrenOf("[data-reveal=\"4\"]".to_owned())
    );
}
