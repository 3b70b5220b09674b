#![cfg(target_arch = "wasm32")]
use crate::core::{AnimationState, SceneParams};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod core;
mod dom;
mod events;
mod frame;
mod surface;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ddc-particles starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    // A second start (module evaluated twice) must not add another canvas.
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let surface = surface::Surface::create(&document)?;
    let viewport = surface.configure(dom::viewport());
    let state = AnimationState::new(SceneParams::default(), viewport, rand::random());
    log::info!(
        "[scene] nodes={} packets={} viewport={}x{}",
        state.nodes.len(),
        state.packets.len(),
        viewport.width,
        viewport.height
    );

    let state = Rc::new(RefCell::new(state));
    let surface = Rc::new(RefCell::new(surface));

    events::wire_resize(surface.clone(), state.clone());
    events::wire_pointer_handlers(state.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        state,
        surface: surface.clone(),
        stats: frame::FrameStats::default(),
    }));
    frame::start_loop(frame_ctx);

    dom::wrap_page_content(&document, surface.borrow().canvas())?;
    Ok(())
}
