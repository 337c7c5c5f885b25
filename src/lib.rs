#![cfg(target_arch = "wasm32")]
use liquid_core::{FieldConfig, FieldDriver};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod constants;
mod dom;
mod frame;
mod render;

/// A particle field mounted on a canvas. Call `stop()` (or `free()`) when
/// the host element is torn down.
#[wasm_bindgen]
pub struct FooterParticles {
    handle: frame::LoopHandle,
}

#[wasm_bindgen]
impl FooterParticles {
    /// Cancel the pending frame and detach the resize listener. Idempotent.
    pub fn stop(&mut self) {
        self.handle.stop();
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.handle.driver().borrow().is_running()
    }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> usize {
        self.handle
            .driver()
            .borrow()
            .field()
            .map(|f| f.len())
            .unwrap_or(0)
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("liquid-footer-web loaded");
    Ok(())
}

/// Mount the field on `<canvas id=canvas_id>`. Returns `undefined` when the
/// canvas is missing or has no 2D context; the page then simply shows no
/// animation.
#[wasm_bindgen]
pub fn mount(canvas_id: &str) -> Option<FooterParticles> {
    match try_mount(canvas_id) {
        Ok(handle) => Some(FooterParticles { handle }),
        Err(e) => {
            log::warn!("particle field not mounted: {:?}", e);
            None
        }
    }
}

fn try_mount(canvas_id: &str) -> anyhow::Result<frame::LoopHandle> {
    let canvas = dom::canvas_by_id(canvas_id)?;
    let surface = render::CanvasSurface::new(canvas.clone())?;

    let config = FieldConfig::for_viewport(dom::viewport_width());
    let size = dom::measure_canvas(&canvas);
    let mut driver = FieldDriver::new(surface);
    driver.start(size, config, StdRng::from_entropy())?;

    Ok(frame::start_loop(Rc::new(RefCell::new(driver)), &canvas))
}
