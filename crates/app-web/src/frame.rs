//! requestAnimationFrame loop: snapshot the store, rebuild the ring
//! geometry, hand it to the renderer.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use instant::Instant;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use app_core::{build_frame, max_dots, NoiseField, ParameterStore, NOISE_SEED};

use crate::render::GpuState;

struct FrameContext {
    gpu: GpuState,
    store: Rc<RefCell<ParameterStore>>,
    noise: NoiseField,
    dots: Vec<Vec2>,
    width: f32,
    height: f32,
    started: Instant,
}

impl FrameContext {
    fn frame(&mut self) {
        let time_ms = self.started.elapsed().as_secs_f64() as f32 * 1000.0;
        // Copy out so a slider write during the loop cannot tear the frame
        let snapshot = *self.store.borrow();
        build_frame(
            &snapshot,
            &mut self.noise,
            time_ms,
            self.width,
            self.height,
            &mut self.dots,
        );
        self.dots.truncate(max_dots());
        if let Err(e) = self.gpu.render(&self.dots) {
            log::error!("render error: {:?}", e);
        }
    }
}

/// Initialize the GPU for `canvas` and drive the sketch forever via
/// requestAnimationFrame.
pub async fn start(
    canvas: web::HtmlCanvasElement,
    store: Rc<RefCell<ParameterStore>>,
) -> anyhow::Result<()> {
    let gpu = GpuState::new(&canvas).await?;
    let mut ctx = FrameContext {
        gpu,
        store,
        noise: NoiseField::new(NOISE_SEED),
        dots: Vec::with_capacity(max_dots()),
        width: canvas.width() as f32,
        height: canvas.height() as f32,
        started: Instant::now(),
    };
    log::info!("sketch running at {}x{}", ctx.width, ctx.height);

    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        ctx.frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ =
            w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
    Ok(())
}
