// Shared test double: a surface that records every call with its arguments.

#![allow(dead_code)]

use glam::Vec2;
use liquid_core::{PoolFill, Rgba, Surface, SurfaceSize};

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Configure(SurfaceSize),
    Clear {
        width: f32,
        height: f32,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
    Halo {
        center: Vec2,
        radius: f32,
        gradient_radius: f32,
        inner: Rgba,
        outer: Rgba,
    },
    Pool {
        outline: Vec<Vec2>,
        fill: PoolFill,
    },
}

#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn configures(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Configure(_)))
            .count()
    }

    pub fn last_size(&self) -> Option<SurfaceSize> {
        self.calls.iter().rev().find_map(|c| match c {
            DrawCall::Configure(size) => Some(*size),
            _ => None,
        })
    }

    /// Every call except `configure`, in order.
    pub fn draws(&self) -> Vec<&DrawCall> {
        self.calls
            .iter()
            .filter(|c| !matches!(c, DrawCall::Configure(_)))
            .collect()
    }

    pub fn draw_calls(&self) -> usize {
        self.draws().len()
    }
}

impl Surface for RecordingSurface {
    fn configure(&mut self, size: SurfaceSize) {
        self.calls.push(DrawCall::Configure(size));
    }

    fn clear(&mut self, width: f32, height: f32) {
        self.calls.push(DrawCall::Clear { width, height });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.calls.push(DrawCall::Circle {
            center,
            radius,
            color,
        });
    }

    fn fill_circle_gradient(
        &mut self,
        center: Vec2,
        radius: f32,
        gradient_radius: f32,
        inner: Rgba,
        outer: Rgba,
    ) {
        self.calls.push(DrawCall::Halo {
            center,
            radius,
            gradient_radius,
            inner,
            outer,
        });
    }

    fn fill_pool(&mut self, outline: &[Vec2], fill: &PoolFill) {
        self.calls.push(DrawCall::Pool {
            outline: outline.to_vec(),
            fill: fill.clone(),
        });
    }
}
