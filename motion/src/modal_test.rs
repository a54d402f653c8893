use super::*;

#[test]
fn starts_closed() {
    let modal = Modal::new();
    assert_eq!(modal.state(), ModalState::Closed);
    assert!(!modal.is_active());
}

#[test]
fn open_sets_active_and_animates_content() {
    let mut modal = Modal::new();
    let tween = modal.open().expect("entrance tween");
    assert!(modal.is_active());
    assert_eq!(tween.target, Target::selector(MODAL_CONTENT));
    assert_eq!(tween.from_value(Prop::Scale), Some(0.9));
}

#[test]
fn open_twice_does_not_reanimate() {
    let mut modal = Modal::new();
    assert!(modal.open().is_some());
    assert!(modal.open().is_none());
}

#[test]
fn overlay_background_click_closes() {
    let mut modal = Modal::new();
    modal.open();
    assert!(modal.overlay_click(true));
    assert!(!modal.is_active());
}

#[test]
fn content_click_keeps_open() {
    let mut modal = Modal::new();
    modal.open();
    assert!(!modal.overlay_click(false));
    assert!(modal.is_active());
}

#[test]
fn close_button_closes() {
    let mut modal = Modal::new();
    modal.open();
    assert!(modal.close());
    assert!(!modal.close());
}

#[test]
fn submit_then_complete_closes_with_confirmation() {
    let mut modal = Modal::new();
    modal.open();
    assert_eq!(modal.submit("a@b.co"), SubmitOutcome::Accepted);
    assert!(modal.is_submitting());
    assert!(modal.is_active());
    let msg = modal.complete().expect("confirmation");
    assert_eq!(msg, "Thanks for joining! We'll notify a@b.co when we launch.");
    assert!(!modal.is_active());
    assert!(!modal.is_submitting());
}

#[test]
fn second_submit_while_pending_is_ignored() {
    let mut modal = Modal::new();
    modal.open();
    modal.submit("first@x.io");
    assert_eq!(modal.submit("second@x.io"), SubmitOutcome::Ignored);
    assert!(modal.complete().expect("confirmation").contains("first@x.io"));
}

#[test]
fn submit_while_closed_is_ignored() {
    let mut modal = Modal::new();
    assert_eq!(modal.submit("a@b.co"), SubmitOutcome::Ignored);
    assert!(modal.complete().is_none());
}

#[test]
fn closing_mid_submit_still_completes() {
    let mut modal = Modal::new();
    modal.open();
    modal.submit("late@x.io");
    modal.close();
    assert!(modal.is_submitting());
    assert!(modal.complete().is_some());
}
