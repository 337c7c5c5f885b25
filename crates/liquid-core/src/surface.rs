//! Drawing target abstraction.
//!
//! The simulation works in logical (CSS) pixels. Implementations map that
//! onto whatever they render to: a canvas 2D context scaled by the device
//! pixel ratio on the web, a character grid natively, a recorder in tests.

use crate::color::{Rgb, Rgba};
use glam::Vec2;

/// Logical size of the drawing surface plus its pixel density.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceSize {
    pub width: f32,
    pub height: f32,
    pub pixel_ratio: f64,
}

impl SurfaceSize {
    pub fn new(width: f32, height: f32, pixel_ratio: f64) -> Self {
        Self {
            width,
            height,
            pixel_ratio,
        }
    }

    /// Physical backing-buffer size, never smaller than 1x1.
    pub fn physical(&self) -> (u32, u32) {
        let w = (self.width as f64 * self.pixel_ratio) as u32;
        let h = (self.height as f64 * self.pixel_ratio) as u32;
        (w.max(1), h.max(1))
    }
}

/// Vertical linear gradient used to fill the liquid pool.
#[derive(Clone, Debug, PartialEq)]
pub struct PoolFill {
    pub top_y: f32,
    pub bottom_y: f32,
    pub stops: Vec<(f32, Rgba)>,
}

impl PoolFill {
    pub fn new(accent: Rgb, top_y: f32, bottom_y: f32, stops: &[(f32, f32)]) -> Self {
        Self {
            top_y,
            bottom_y,
            stops: stops
                .iter()
                .map(|&(offset, alpha)| (offset, accent.with_alpha(alpha)))
                .collect(),
        }
    }
}

pub trait Surface {
    /// Apply a new size: resize the physical buffer and rescale so drawing
    /// calls keep using logical pixels.
    fn configure(&mut self, size: SurfaceSize);

    fn clear(&mut self, width: f32, height: f32);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);

    /// Fill the circle of `radius` with a radial gradient running from
    /// `inner` at the center to `outer` at `gradient_radius`.
    fn fill_circle_gradient(
        &mut self,
        center: Vec2,
        radius: f32,
        gradient_radius: f32,
        inner: Rgba,
        outer: Rgba,
    );

    /// Fill the closed polygon `outline` with a vertical gradient.
    fn fill_pool(&mut self, outline: &[Vec2], fill: &PoolFill);
}
