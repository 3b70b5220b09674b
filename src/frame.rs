use crate::core::{driver, AnimationState};
use crate::surface::Surface;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// Frames between frame-rate log lines
const STATS_WINDOW_FRAMES: u32 = 600;

pub struct FrameContext {
    pub state: Rc<RefCell<AnimationState>>,
    pub surface: Rc<RefCell<Surface>>,
    pub stats: FrameStats,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let mut state = self.state.borrow_mut();
        let mut surface = self.surface.borrow_mut();
        driver::tick(&mut state, &mut *surface);
        self.stats.record(state.ripples.len());
    }

    /// The loop keeps going for as long as the canvas is in the document.
    pub fn keep_running(&self) -> bool {
        self.surface.borrow().canvas().is_connected()
    }
}

pub struct FrameStats {
    window_start: Instant,
    frames: u32,
}

impl Default for FrameStats {
    fn default() -> Self {
        Self {
            window_start: Instant::now(),
            frames: 0,
        }
    }
}

impl FrameStats {
    fn record(&mut self, ripples: usize) {
        self.frames += 1;
        if self.frames < STATS_WINDOW_FRAMES {
            return;
        }
        let secs = self.window_start.elapsed().as_secs_f32();
        if secs > 0.0 {
            log::debug!(
                "[frame] {:.1} fps over {} frames, ripples={}",
                self.frames as f32 / secs,
                self.frames,
                ripples
            );
        }
        self.frames = 0;
        self.window_start = Instant::now();
    }
}

/// Drive `frame_ctx` from requestAnimationFrame until it reports it should
/// stop.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !frame_ctx.borrow().keep_running() {
            log::warn!("[frame] canvas detached from the document, animation stopped");
            // not rescheduled; the closure stays parked in `tick`
            return;
        }
        frame_ctx.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
