use crate::constants::POOL_COMPOSITE_OP;
use glam::Vec2;
use liquid_core::{PoolFill, Rgba, Surface, SurfaceSize};
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Canvas 2D binding for the particle field.
///
/// Drawing calls arrive in logical px; `configure` sizes the backing store
/// to `logical * dpr` and installs a matching scale transform.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Fails when the browser refuses a 2D context.
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("getContext(2d) failed: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self { canvas, ctx })
    }

    #[inline]
    fn circle_path(&self, center: Vec2, radius: f32) {
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU);
    }
}

impl Surface for CanvasSurface {
    fn configure(&mut self, size: SurfaceSize) {
        let (w_px, h_px) = size.physical();
        // resizing the backing store also resets the transform
        self.canvas.set_width(w_px);
        self.canvas.set_height(h_px);
        let dpr = size.pixel_ratio;
        _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
    }

    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.circle_path(center, radius);
        self.ctx.set_fill_style_str(&color.to_string());
        self.ctx.fill();
    }

    fn fill_circle_gradient(
        &mut self,
        center: Vec2,
        radius: f32,
        gradient_radius: f32,
        inner: Rgba,
        outer: Rgba,
    ) {
        let (x, y) = (center.x as f64, center.y as f64);
        let gradient =
            match self
                .ctx
                .create_radial_gradient(x, y, 0.0, x, y, gradient_radius.max(0.0) as f64)
            {
                Ok(g) => g,
                Err(e) => {
                    log::error!("radial gradient failed: {:?}", e);
                    return;
                }
            };
        _ = gradient.add_color_stop(0.0, &inner.to_string());
        _ = gradient.add_color_stop(1.0, &outer.to_string());
        self.circle_path(center, radius);
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.fill();
    }

    fn fill_pool(&mut self, outline: &[Vec2], fill: &PoolFill) {
        let Some((first, rest)) = outline.split_first() else {
            return;
        };
        _ = self.ctx.set_global_composite_operation(POOL_COMPOSITE_OP);
        let gradient =
            self.ctx
                .create_linear_gradient(0.0, fill.top_y as f64, 0.0, fill.bottom_y as f64);
        for (offset, color) in &fill.stops {
            _ = gradient.add_color_stop(*offset, &color.to_string());
        }
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.begin_path();
        self.ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        self.ctx.close_path();
        self.ctx.fill();
    }
}
