#![allow(clippy::float_cmp)]

use super::*;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

// =============================================================
// classify
// =============================================================

#[test]
fn fast_swipe_just_over_threshold_advances() {
    // 41px over ~68ms is ~0.6px/ms.
    let elapsed = 41.0 / 0.6;
    assert_eq!(classify(41.0, 0.0, elapsed, &GestureProfile::touch()), Some(Direction::Advance));
}

#[test]
fn fast_swipe_just_under_threshold_is_ignored() {
    let elapsed = 39.0 / 0.6;
    assert_eq!(classify(39.0, 0.0, elapsed, &GestureProfile::touch()), None);
}

#[test]
fn swipe_exactly_at_threshold_is_ignored() {
    assert_eq!(classify(40.0, 0.0, 10.0, &GestureProfile::touch()), None);
}

#[test]
fn slow_swipe_needs_slow_threshold() {
    let profile = GestureProfile::touch();
    // 80px over 1s: 0.08px/ms.
    assert_eq!(classify(80.0, 0.0, 1000.0, &profile), None);
    assert_eq!(classify(101.0, 0.0, 1000.0, &profile), Some(Direction::Advance));
}

#[test]
fn negative_delta_retreats() {
    assert_eq!(classify(-150.0, 0.0, 1000.0, &GestureProfile::touch()), Some(Direction::Retreat));
}

#[test]
fn vertical_dominant_touch_is_ignored() {
    assert_eq!(classify(120.0, 130.0, 50.0, &GestureProfile::touch()), None);
}

#[test]
fn drag_ignores_vertical_travel() {
    assert_eq!(classify(130.0, 500.0, 1000.0, &GestureProfile::drag()), Some(Direction::Advance));
}

#[test]
fn drag_profile_uses_its_own_constants() {
    let profile = GestureProfile::drag();
    // 0.4px/ms is fast for a drag but slow for a touch.
    assert_eq!(classify(55.0, 0.0, 55.0 / 0.4, &profile), Some(Direction::Advance));
    assert_eq!(classify(45.0, 0.0, 45.0 / 0.4, &profile), None);
    assert_eq!(classify(55.0, 0.0, 55.0 / 0.4, &GestureProfile::touch()), None);
}

#[test]
fn zero_elapsed_is_clamped() {
    assert_eq!(velocity(30.0, 0.0), 30.0);
    assert_eq!(velocity(30.0, -5.0), 30.0);
    assert!(velocity(30.0, 0.0).is_finite());
}

#[test]
fn threshold_for_switches_on_strictly_greater() {
    let profile = GestureProfile::touch();
    assert_eq!(profile.threshold_for(0.5), 100.0);
    assert_eq!(profile.threshold_for(0.51), 40.0);
}

// =============================================================
// TouchGesture
// =============================================================

#[test]
fn touch_leftward_swipe_advances() {
    let mut touch = TouchGesture::new(GestureProfile::touch(), 15.0);
    touch.start(pt(300.0, 200.0), 0.0);
    assert!(touch.is_active());
    assert_eq!(touch.end(pt(200.0, 205.0), 100.0), Some(Direction::Advance));
    assert!(!touch.is_active());
}

#[test]
fn touch_rightward_swipe_retreats() {
    let mut touch = TouchGesture::new(GestureProfile::touch(), 15.0);
    touch.start(pt(100.0, 200.0), 0.0);
    assert_eq!(touch.end(pt(250.0, 200.0), 100.0), Some(Direction::Retreat));
}

#[test]
fn touch_move_suppresses_scroll_only_when_horizontal() {
    let mut touch = TouchGesture::new(GestureProfile::touch(), 15.0);
    touch.start(pt(100.0, 100.0), 0.0);
    assert!(!touch.moved(pt(90.0, 100.0)));
    assert!(touch.moved(pt(80.0, 100.0)));
    assert!(!touch.moved(pt(80.0, 150.0)));
}

#[test]
fn touch_move_without_start_is_inert() {
    let mut touch = TouchGesture::new(GestureProfile::touch(), 15.0);
    assert!(!touch.moved(pt(0.0, 0.0)));
    assert_eq!(touch.end(pt(0.0, 0.0), 10.0), None);
}

#[test]
fn touch_end_consumes_session() {
    let mut touch = TouchGesture::new(GestureProfile::touch(), 15.0);
    touch.start(pt(300.0, 0.0), 0.0);
    assert!(touch.end(pt(100.0, 0.0), 100.0).is_some());
    assert_eq!(touch.end(pt(100.0, 0.0), 200.0), None);
}

// =============================================================
// DragGesture
// =============================================================

#[test]
fn drag_release_classifies() {
    let mut drag = DragGesture::new(GestureProfile::drag());
    drag.press(pt(400.0, 0.0), 0.0);
    assert!(drag.is_dragging());
    assert_eq!(drag.release(pt(250.0, 0.0), 800.0), Some(Direction::Advance));
    assert!(!drag.is_dragging());
}

#[test]
fn drag_release_without_press_is_none() {
    let mut drag = DragGesture::new(GestureProfile::drag());
    assert_eq!(drag.release(pt(0.0, 0.0), 0.0), None);
}

#[test]
fn drag_cancel_drops_press() {
    let mut drag = DragGesture::new(GestureProfile::drag());
    drag.press(pt(400.0, 0.0), 0.0);
    drag.cancel();
    assert_eq!(drag.release(pt(0.0, 0.0), 100.0), None);
}

// =============================================================
// WheelGesture
// =============================================================

#[test]
fn wheel_horizontal_qualifies_and_cools_down() {
    let mut wheel = WheelGesture::new(20.0, 600.0);
    let out = wheel.wheel(WheelDelta { dx: 30.0, dy: 2.0 });
    assert_eq!(out, WheelOutcome::Command(Direction::Advance));
    assert!(wheel.is_cooling_down());
    assert_eq!(wheel.wheel(WheelDelta { dx: 60.0, dy: 0.0 }), WheelOutcome::PassThrough);
    wheel.end_cooldown();
    assert_eq!(wheel.wheel(WheelDelta { dx: -60.0, dy: 0.0 }), WheelOutcome::Command(Direction::Retreat));
}

#[test]
fn wheel_vertical_passes_through() {
    let mut wheel = WheelGesture::new(20.0, 600.0);
    assert_eq!(wheel.wheel(WheelDelta { dx: 30.0, dy: 40.0 }), WheelOutcome::PassThrough);
    assert!(!wheel.is_cooling_down());
}

#[test]
fn wheel_small_horizontal_passes_through() {
    let mut wheel = WheelGesture::new(20.0, 600.0);
    assert_eq!(wheel.wheel(WheelDelta { dx: 20.0, dy: 0.0 }), WheelOutcome::PassThrough);
    assert_eq!(wheel.wheel(WheelDelta { dx: -15.0, dy: 1.0 }), WheelOutcome::PassThrough);
}

// =============================================================
// Keyboard
// =============================================================

#[test]
fn arrow_keys_map_to_directions() {
    assert_eq!(key_direction(&Key::new("ArrowLeft")), Some(Direction::Retreat));
    assert_eq!(key_direction(&Key::new("ArrowRight")), Some(Direction::Advance));
    assert_eq!(key_direction(&Key::new("ArrowUp")), None);
    assert_eq!(key_direction(&Key::new("Enter")), None);
}
