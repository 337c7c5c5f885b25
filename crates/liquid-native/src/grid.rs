//! Character-grid surface: each cell covers `cell_px` x `cell_px` logical
//! pixels and keeps the strongest particle alpha drawn into it.

use glam::Vec2;
use liquid_core::{PoolFill, Rgba, Surface, SurfaceSize};

const RAMP: &[u8] = b" .:oO@";
const POOL_CHAR: u8 = b'~';

pub struct GridSurface {
    cell_px: f32,
    cols: usize,
    rows: usize,
    intensity: Vec<f32>,
    pool: Vec<bool>,
}

impl GridSurface {
    pub fn new(cell_px: f32) -> Self {
        Self {
            cell_px: cell_px.max(1.0),
            cols: 0,
            rows: 0,
            intensity: Vec::new(),
            pool: Vec::new(),
        }
    }

    pub fn dims(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    fn cell_index(&self, p: Vec2) -> Option<usize> {
        if p.x < 0.0 || p.y < 0.0 {
            return None;
        }
        let c = (p.x / self.cell_px) as usize;
        let r = (p.y / self.cell_px) as usize;
        (c < self.cols && r < self.rows).then(|| r * self.cols + c)
    }

    fn mark(&mut self, p: Vec2, alpha: f32) {
        if let Some(i) = self.cell_index(p) {
            self.intensity[i] = self.intensity[i].max(alpha);
        }
    }

    pub fn cell(&self, col: usize, row: usize) -> char {
        let i = row * self.cols + col;
        let a = self.intensity[i];
        if a > 0.0 {
            let last = RAMP.len() - 1;
            let idx = ((a * last as f32).ceil() as usize).clamp(1, last);
            RAMP[idx] as char
        } else if self.pool[i] {
            POOL_CHAR as char
        } else {
            ' '
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::with_capacity((self.cols + 1) * self.rows);
        for r in 0..self.rows {
            for c in 0..self.cols {
                out.push(self.cell(c, r));
            }
            out.push('\n');
        }
        out
    }
}

/// Height of the outline polyline at `x`, by linear interpolation.
fn outline_y_at(outline: &[Vec2], x: f32) -> Option<f32> {
    // skip the bottom-left corner; the bottom-right one closes the last span
    // when the width is not a whole number of crest steps
    let crest = outline.get(1..)?;
    crest.windows(2).find_map(|w| {
        let (a, b) = (w[0], w[1]);
        if x >= a.x && x <= b.x {
            let t = if b.x > a.x { (x - a.x) / (b.x - a.x) } else { 0.0 };
            Some(a.y + (b.y - a.y) * t)
        } else {
            None
        }
    })
}

impl Surface for GridSurface {
    fn configure(&mut self, size: SurfaceSize) {
        self.cols = (size.width / self.cell_px).ceil().max(0.0) as usize;
        self.rows = (size.height / self.cell_px).ceil().max(0.0) as usize;
        self.intensity = vec![0.0; self.cols * self.rows];
        self.pool = vec![false; self.cols * self.rows];
    }

    fn clear(&mut self, _width: f32, _height: f32) {
        self.intensity.iter_mut().for_each(|a| *a = 0.0);
        self.pool.iter_mut().for_each(|p| *p = false);
    }

    fn fill_circle(&mut self, center: Vec2, _radius: f32, color: Rgba) {
        self.mark(center, color.alpha);
    }

    fn fill_circle_gradient(
        &mut self,
        center: Vec2,
        _radius: f32,
        _gradient_radius: f32,
        inner: Rgba,
        _outer: Rgba,
    ) {
        self.mark(center, inner.alpha);
    }

    fn fill_pool(&mut self, outline: &[Vec2], _fill: &PoolFill) {
        for c in 0..self.cols {
            let x = (c as f32 + 0.5) * self.cell_px;
            let Some(top) = outline_y_at(outline, x) else {
                continue;
            };
            for r in 0..self.rows {
                if (r as f32 + 0.5) * self.cell_px >= top {
                    self.pool[r * self.cols + c] = true;
                }
            }
        }
    }
}
