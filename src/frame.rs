use crate::constants::STATS_LOG_INTERVAL_FRAMES;
use crate::dom;
use crate::render::CanvasSurface;
use liquid_core::FieldDriver;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedDriver = Rc<RefCell<FieldDriver<CanvasSurface>>>;

/// Owns the animation-frame and resize callbacks of one mounted field.
///
/// The frame closure reschedules itself through `tick`, so the closure and
/// its `Rc` form a cycle; `stop` cancels the pending frame and drops both
/// closures to break it.
pub struct LoopHandle {
    driver: SharedDriver,
    raf_id: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    on_resize: Option<Closure<dyn FnMut()>>,
}

impl LoopHandle {
    pub fn driver(&self) -> &SharedDriver {
        &self.driver
    }

    pub fn stop(&mut self) {
        if !self.driver.borrow_mut().stop() {
            return;
        }
        if let Some(window) = web::window() {
            if let Some(id) = self.raf_id.take() {
                _ = window.cancel_animation_frame(id);
            }
            if let Some(cb) = self.on_resize.as_ref() {
                _ = window
                    .remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
            }
        }
        self.on_resize = None;
        self.tick.borrow_mut().take();
    }
}

impl Drop for LoopHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>, raf_id: &Cell<Option<i32>>) {
    let Some(window) = web::window() else {
        raf_id.set(None);
        return;
    };
    let slot = tick.borrow();
    let Some(cb) = slot.as_ref() else {
        raf_id.set(None);
        return;
    };
    match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
        Ok(id) => raf_id.set(Some(id)),
        Err(e) => {
            log::error!("requestAnimationFrame failed: {:?}", e);
            raf_id.set(None);
        }
    }
}

fn wire_resize(canvas: &web::HtmlCanvasElement, driver: &SharedDriver) -> Option<Closure<dyn FnMut()>> {
    let canvas = canvas.clone();
    let driver = driver.clone();
    let closure = Closure::wrap(Box::new(move || {
        driver.borrow_mut().resize(dom::measure_canvas(&canvas));
    }) as Box<dyn FnMut()>);
    let window = web::window()?;
    if let Err(e) =
        window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
    {
        log::warn!("resize listener not attached: {:?}", e);
        return None;
    }
    Some(closure)
}

/// Start the `requestAnimationFrame` loop for an already started driver.
pub fn start_loop(driver: SharedDriver, canvas: &web::HtmlCanvasElement) -> LoopHandle {
    let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

    let tick_next = tick.clone();
    let raf_next = raf_id.clone();
    let driver_tick = driver.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let again = {
            let mut d = driver_tick.borrow_mut();
            let again = d.frame(js_sys::Date::now());
            if again && d.frames() % STATS_LOG_INTERVAL_FRAMES == 0 {
                if let Some(f) = d.field() {
                    log::debug!(
                        "[loop] frame={} settled={}/{} recycled_total={}",
                        d.frames(),
                        f.settled_count(),
                        f.len(),
                        f.recycled_total()
                    );
                }
            }
            again
        };
        if again {
            request_frame(&tick_next, &raf_next);
        } else {
            raf_next.set(None);
        }
    }) as Box<dyn FnMut()>));

    let on_resize = wire_resize(canvas, &driver);
    request_frame(&tick, &raf_id);

    LoopHandle {
        driver,
        raf_id,
        tick,
        on_resize,
    }
}
