#![cfg(target_arch = "wasm32")]
//! Web frontend: DOM slider panel plus a WebGPU canvas running the sketch.
//!
//! Expects two mount points in the host page, `#sketch-root` for the canvas
//! and `#panel-root` for the sliders; missing mounts are fatal at startup.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use app_core::ParameterStore;

mod dom;
mod frame;
mod panel;
mod render;
mod value;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    if let Err(e) = run() {
        log::error!("startup error: {e:#}");
    }
}

fn run() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no window/document"))?;
    let sketch_root = dom::require_element(&document, "sketch-root")?;
    let panel_root = dom::require_element(&document, "panel-root")?;

    let canvas = dom::create_canvas(&document, app_core::CANVAS_SIZE)?;
    sketch_root
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Process-wide store: the panel writes through, the frame loop reads
    let store = Rc::new(RefCell::new(ParameterStore::new()));
    panel::mount(&document, &panel_root, &store)?;

    spawn_local(async move {
        if let Err(e) = frame::start(canvas, store).await {
            log::error!("init error: {e:#}");
        }
    });
    Ok(())
}
