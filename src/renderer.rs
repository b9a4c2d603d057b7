// Renderer struct that wraps the page canvas and its 2d context, and draws
// the backdrop's circles and links through the Surface trait.

use crate::color::Color;
use crate::surface::Surface;
use std::f64::consts::PI;
use vecmath::Vector2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub struct CanvasRenderer {
    pub canvas: HtmlCanvasElement,
    pub context: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    // Grabs the 2d context from the canvas. A canvas that cannot hand out a
    // 2d context (already bound to another context type, or the call throws)
    // yields None, same as a missing canvas.
    pub fn new(canvas: HtmlCanvasElement) -> Option<Self> {
        let context = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(CanvasRenderer { canvas, context })
    }
}

impl Surface for CanvasRenderer {
    type Error = JsValue;

    fn set_size(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn clear(&mut self, width: u32, height: u32) -> Result<(), JsValue> {
        self.context.clear_rect(0.0, 0.0, width as f64, height as f64);
        Ok(())
    }

    fn fill_circle(
        &mut self,
        center: Vector2<f64>,
        radius: f64,
        color: Color,
    ) -> Result<(), JsValue> {
        self.context.begin_path();
        self.context.arc(center[0], center[1], radius, 0.0, PI * 2.0)?;
        self.context.set_fill_style(&JsValue::from_str(&color.to_css()));
        self.context.fill();
        Ok(())
    }

    fn stroke_line(
        &mut self,
        from: Vector2<f64>,
        to: Vector2<f64>,
        width: f64,
        color: Color,
    ) -> Result<(), JsValue> {
        self.context.begin_path();
        self.context.move_to(from[0], from[1]);
        self.context.line_to(to[0], to[1]);
        self.context.set_stroke_style(&JsValue::from_str(&color.to_css()));
        self.context.set_line_width(width);
        self.context.stroke();
        Ok(())
    }
}
