use crate::constants::FALLBACK_PIXEL_RATIO;
use liquid_core::SurfaceSize;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn canvas_by_id(canvas_id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    let document = window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let el = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", canvas_id))?;
    el.dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("#{} is not a canvas: {:?}", canvas_id, e))
}

#[inline]
pub fn pixel_ratio() -> f64 {
    web::window()
        .map(|w| w.device_pixel_ratio())
        .filter(|r| r.is_finite() && *r > 0.0)
        .unwrap_or(FALLBACK_PIXEL_RATIO)
}

/// Viewport width in CSS px, used for the particle-count breakpoint.
pub fn viewport_width() -> f64 {
    web::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// Logical size of the canvas as laid out by CSS, plus the current DPR.
pub fn measure_canvas(canvas: &web::HtmlCanvasElement) -> SurfaceSize {
    let rect = canvas.get_bounding_client_rect();
    SurfaceSize::new(rect.width() as f32, rect.height() as f32, pixel_ratio())
}
