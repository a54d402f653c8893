//! Runs `motion` tweens through the Web Animations API.
//!
//! SYSTEM CONTEXT
//! ==============
//! The engine only describes motion. This module turns a [`Tween`] into
//! keyframes plus timing and calls `Element.animate()` once per matched
//! element, so the browser does all interpolation off the Rust side.

#[cfg(test)]
#[path = "animate_test.rs"]
mod animate_test;

use motion::tween::{CssFrame, Edge, Tween, css_frame};

/// Keyframes for a tween. Tweens without explicit starting values animate
/// from the element's current style, expressed as a single end keyframe.
pub fn keyframes(tween: &Tween) -> Vec<CssFrame> {
    let to = css_frame(tween, Edge::To);
    if tween.has_from_frame() {
        vec![css_frame(tween, Edge::From), to]
    } else {
        vec![to]
    }
}

/// WAAPI `iterations` value.
pub fn iterations(tween: &Tween) -> f64 {
    if tween.looped { f64::INFINITY } else { 1.0 }
}

/// Start delay for each of `count` matched elements.
pub fn delays(tween: &Tween, count: usize) -> Vec<f64> {
    (0..count).map(|i| tween.delay_for(i)).collect()
}

#[cfg(feature = "csr")]
mod browser {
    use js_sys::{Array, Object, Reflect};
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{FillMode, HtmlElement, KeyframeAnimationOptions, PlaybackDirection};

    use motion::tween::{CssFrame, Target, Tween};

    use super::{delays, iterations, keyframes};
    use crate::util::dom;

    /// Play `tween` on every element it targets. Missing targets are a no-op.
    pub fn play(tween: &Tween) -> Result<(), JsValue> {
        let elements = dom::resolve(&tween.target);
        if elements.is_empty() {
            return Ok(());
        }
        let frames = frames_to_js(&keyframes(tween))?;
        for (element, delay) in elements.iter().zip(delays(tween, elements.len())) {
            let options = KeyframeAnimationOptions::new();
            options.set_duration(&JsValue::from_f64(tween.duration_ms));
            options.set_delay(delay);
            options.set_easing(tween.easing.css());
            options.set_iterations(iterations(tween));
            options.set_fill(FillMode::Both);
            if tween.alternate {
                options.set_direction(PlaybackDirection::Alternate);
            }
            element.animate_with_keyframe_animation_options(Some(&frames), &options);
        }
        Ok(())
    }

    /// Apply the hidden starting state to every element of `target`.
    pub fn hide(target: &Target) -> Result<(), JsValue> {
        for element in dom::resolve(target) {
            if let Some(el) = element.dyn_ref::<HtmlElement>() {
                el.style().set_property("opacity", "0")?;
            }
        }
        Ok(())
    }

    fn frames_to_js(frames: &[CssFrame]) -> Result<Object, JsValue> {
        let list = Array::new();
        for frame in frames {
            let keyframe = Object::new();
            if let Some(transform) = &frame.transform {
                Reflect::set(&keyframe, &"transform".into(), &transform.into())?;
            }
            if let Some(opacity) = frame.opacity {
                Reflect::set(&keyframe, &"opacity".into(), &opacity.into())?;
            }
            list.push(&keyframe);
        }
        Ok(list.into())
    }
}

#[cfg(feature = "csr")]
pub use browser::{hide, play};
