//! Browser canvas surface

use web_sys::CanvasRenderingContext2d;

use super::Surface;

/// Draws straight into a 2D canvas context
pub struct Canvas2d {
    ctx: CanvasRenderingContext2d,
}

impl Canvas2d {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Surface for Canvas2d {
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, r: f32, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.begin_path();
        // arc() only fails for a negative radius
        if let Err(e) = self
            .ctx
            .arc(cx as f64, cy as f64, r as f64, 0.0, std::f64::consts::TAU)
        {
            log::warn!("Canvas arc failed: {:?}", e);
        }
        self.ctx.close_path();
        self.ctx.fill();
    }
}
