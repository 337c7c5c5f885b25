use crate::constants::*;
use crate::surface::PoolFill;
use glam::Vec2;

/// Rebuild the wavy pool silhouette into `out`.
///
/// The outline starts on the bottom-left corner, samples the crest every
/// `POOL_WAVE_STEP` px across the width, then closes on the bottom-right
/// corner.
pub fn pool_outline(width: f32, height: f32, band_height: f32, now_ms: f64, out: &mut Vec<Vec2>) {
    out.clear();
    out.push(Vec2::new(0.0, height));
    let crest = height - band_height;
    let mut x = 0.0_f32;
    while x <= width {
        out.push(Vec2::new(x, crest + wave(x, now_ms)));
        x += POOL_WAVE_STEP;
    }
    out.push(Vec2::new(width.max(0.0), height));
}

#[inline]
fn wave(x: f32, now_ms: f64) -> f32 {
    let phase = x as f64 * POOL_WAVE_SPACE_FREQ + now_ms * POOL_WAVE_TIME_FREQ;
    phase.sin() as f32 * POOL_WAVE_AMPLITUDE
}

/// Gradient for a pool whose crest sits `band_height` above the bottom edge.
pub fn pool_fill(height: f32, band_height: f32) -> PoolFill {
    PoolFill::new(
        POOL_ACCENT,
        height - band_height - POOL_GRADIENT_OVERHANG,
        height,
        &POOL_GRADIENT_STOPS,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outline_closes_on_bottom_edge() {
        let mut pts = Vec::new();
        pool_outline(100.0, 300.0, 100.0, 0.0, &mut pts);
        // corners + samples at 0,20,...,100
        assert_eq!(pts.len(), 8);
        assert_eq!(pts[0], Vec2::new(0.0, 300.0));
        assert_eq!(*pts.last().unwrap(), Vec2::new(100.0, 300.0));
        // sin(0) at x=0, t=0
        assert!((pts[1].y - 200.0).abs() < 1e-4);
    }

    #[test]
    fn outline_buffer_is_reused() {
        let mut pts = Vec::with_capacity(64);
        pool_outline(400.0, 300.0, 100.0, 10.0, &mut pts);
        let n = pts.len();
        pool_outline(400.0, 300.0, 100.0, 20.0, &mut pts);
        assert_eq!(pts.len(), n);
    }

    #[test]
    fn fill_spans_bottom_150px() {
        let fill = pool_fill(400.0, 100.0);
        assert_eq!(fill.top_y, 250.0);
        assert_eq!(fill.bottom_y, 400.0);
        assert_eq!(fill.stops.len(), 3);
        assert_eq!(fill.stops[0].1.alpha, 0.0);
        assert!((fill.stops[2].1.alpha - 0.15).abs() < 1e-6);
    }

    #[test]
    fn fill_follows_retuned_band() {
        let fill = pool_fill(400.0, 60.0);
        assert_eq!(fill.top_y, 290.0);
        let mut pts = Vec::new();
        pool_outline(200.0, 400.0, 60.0, 0.0, &mut pts);
        // the lowest crest point stays below the gradient's transparent top
        for p in &pts[1..pts.len() - 1] {
            assert!(p.y > fill.top_y);
        }
    }
}
