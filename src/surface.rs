use crate::core::{Glow, Painter, Rgba, Viewport};
use crate::dom;
use anyhow::Context;
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

pub const CANVAS_ID: &str = "particle-canvas";
const CANVAS_STYLE: &str =
    "position:fixed;top:0;left:0;width:100%;height:100%;z-index:0;opacity:0.7;pointer-events:none;";

/// Full-viewport canvas behind the page content, drawn through its 2D context.
pub struct Surface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl Surface {
    /// Create the canvas and insert it as the first element of `<body>`.
    pub fn create(document: &web::Document) -> anyhow::Result<Self> {
        let canvas: web::HtmlCanvasElement = document
            .create_element("canvas")
            .map_err(|e| anyhow::anyhow!("create canvas: {:?}", e))?
            .dyn_into()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        canvas.set_id(CANVAS_ID);
        _ = canvas.set_attribute("style", CANVAS_STYLE);
        dom::prepend_to_body(&canvas)?;

        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("get_context: {:?}", e))?
            .context("canvas has no 2d context")?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self { canvas, ctx })
    }

    /// Size the backing store to exactly the viewport and report the
    /// drawable area.
    pub fn configure(&self, viewport: Viewport) -> Viewport {
        let w = viewport.width.max(0.0) as u32;
        let h = viewport.height.max(0.0) as u32;
        self.canvas.set_width(w);
        self.canvas.set_height(h);
        log::info!("[surface] configured {}x{}", w, h);
        Viewport::new(w as f32, h as f32)
    }

    #[inline]
    pub fn canvas(&self) -> &web::HtmlCanvasElement {
        &self.canvas
    }

    #[inline]
    fn set_glow(&self, glow: Glow) {
        self.ctx.set_shadow_blur(glow.blur as f64);
        self.ctx.set_shadow_color(&glow.color.to_string());
    }

    #[inline]
    fn circle_path(&self, center: Vec2, radius: f32) {
        self.ctx.begin_path();
        _ = self.ctx.arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU);
    }
}

impl Painter for Surface {
    fn clear(&mut self, size: Vec2) {
        self.ctx.clear_rect(0.0, 0.0, size.x as f64, size.y as f64);
    }

    fn fill_radial_gradient(
        &mut self,
        size: Vec2,
        center: Vec2,
        radius: f32,
        inner: Rgba,
        outer: Rgba,
    ) {
        let (cx, cy) = (center.x as f64, center.y as f64);
        let r1 = radius.max(0.0) as f64;
        let gradient = match self.ctx.create_radial_gradient(cx, cy, 0.0, cx, cy, r1) {
            Ok(g) => g,
            Err(e) => {
                log::warn!("radial gradient error: {:?}", e);
                return;
            }
        };
        _ = gradient.add_color_stop(0.0, &inner.to_string());
        _ = gradient.add_color_stop(1.0, &outer.to_string());
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.fill_rect(0.0, 0.0, size.x as f64, size.y as f64);
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32) {
        self.ctx.set_stroke_style_str(&color.to_string());
        self.ctx.set_line_width(width as f64);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba, glow: Glow) {
        self.circle_path(center, radius);
        self.ctx.set_fill_style_str(&color.to_string());
        self.set_glow(glow);
        self.ctx.fill();
        self.ctx.set_shadow_blur(0.0);
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Rgba, width: f32, glow: Glow) {
        self.circle_path(center, radius);
        self.ctx.set_stroke_style_str(&color.to_string());
        self.ctx.set_line_width(width as f64);
        self.set_glow(glow);
        self.ctx.stroke();
        self.ctx.set_shadow_blur(0.0);
    }
}
