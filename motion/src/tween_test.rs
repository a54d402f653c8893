#![allow(clippy::float_cmp)]

use super::*;

fn fade_up() -> Tween {
    Tween::new(Target::selector(".hero-subtitle"), 800.0)
        .from_to(Prop::TranslateY, 20.0, 0.0)
        .fade_in()
}

#[test]
fn builder_collects_props_in_order() {
    let t = fade_up();
    assert_eq!(t.props.len(), 2);
    assert_eq!(t.props[0].prop, Prop::TranslateY);
    assert_eq!(t.props[1].prop, Prop::Opacity);
    assert_eq!(t.from_value(Prop::TranslateY), Some(20.0));
    assert_eq!(t.to_value(Prop::Opacity), Some(1.0));
    assert_eq!(t.to_value(Prop::Scale), None);
}

#[test]
fn delay_for_without_stagger_is_flat() {
    let t = fade_up().delay(300.0);
    assert_eq!(t.delay_for(0), 300.0);
    assert_eq!(t.delay_for(5), 300.0);
}

#[test]
fn delay_for_with_stagger_steps_per_index() {
    let t = fade_up().delay(100.0).stagger_from(200.0, 1000.0);
    assert_eq!(t.delay_for(0), 1100.0);
    assert_eq!(t.delay_for(2), 1500.0);
}

#[test]
fn span_covers_last_element() {
    let t = fade_up().stagger(150.0);
    assert_eq!(t.span_ms(1), 800.0);
    assert_eq!(t.span_ms(3), 1100.0);
    assert_eq!(t.span_ms(0), 800.0);
}

#[test]
fn yoyo_sets_loop_and_alternate() {
    let t = fade_up().yoyo();
    assert!(t.looped);
    assert!(t.alternate);
}

#[test]
fn css_frame_combines_transforms() {
    let t = Tween::new(Target::selector(".card-1"), 100.0)
        .from_to(Prop::TranslateX, -4.0, 4.0)
        .from_to(Prop::TranslateY, 2.0, 0.0)
        .from_to(Prop::Scale, 0.5, 1.0)
        .fade_in();
    let from = css_frame(&t, Edge::From);
    assert_eq!(from.transform.as_deref(), Some("translateX(-4px) translateY(2px) scale(0.5)"));
    assert_eq!(from.opacity, Some(0.0));
    let to = css_frame(&t, Edge::To);
    assert_eq!(to.transform.as_deref(), Some("translateX(4px) translateY(0px) scale(1)"));
    assert_eq!(to.opacity, Some(1.0));
}

#[test]
fn css_frame_opacity_only_has_no_transform() {
    let t = Tween::new(Target::selector(".x"), 100.0).fade_in();
    let frame = css_frame(&t, Edge::To);
    assert_eq!(frame.transform, None);
    assert_eq!(frame.opacity, Some(1.0));
}

#[test]
fn to_only_tween_has_empty_from_frame() {
    let t = Tween::new(Target::selector(".card-2"), 100.0).to(Prop::TranslateX, 3.0);
    assert!(!t.has_from_frame());
    assert_eq!(css_frame(&t, Edge::From), CssFrame::default());
    assert!(fade_up().has_from_frame());
}

#[test]
fn easing_css_names() {
    assert_eq!(Easing::Linear.css(), "linear");
    assert!(Easing::EaseOutBack.css().starts_with("cubic-bezier("));
    assert_eq!(Easing::default(), Easing::Linear);
}
