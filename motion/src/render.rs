//! Rendering: the browser 2D context as a particle [`Surface`].
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::input::Point;
use crate::particles::{Rgba, Surface};

impl Surface for CanvasRenderingContext2d {
    type Error = JsValue;

    fn clear(&mut self, width: f64, height: f64) -> Result<(), JsValue> {
        self.clear_rect(0.0, 0.0, width, height);
        Ok(())
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba) -> Result<(), JsValue> {
        self.set_fill_style_str(&color.css());
        self.begin_path();
        self.arc(center.x, center.y, radius, 0.0, TAU)?;
        self.fill();
        Ok(())
    }

    fn stroke_line(&mut self, from: Point, to: Point, color: Rgba, width: f64) -> Result<(), JsValue> {
        self.set_stroke_style_str(&color.css());
        self.set_line_width(width);
        self.begin_path();
        self.move_to(from.x, from.y);
        self.line_to(to.x, to.y);
        self.stroke();
        Ok(())
    }
}
