use crate::core::AnimationState;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Track the pointer over the window. The canvas is fixed at the viewport
/// origin, so client coordinates are surface coordinates.
pub fn wire_pointer_handlers(state: Rc<RefCell<AnimationState>>) {
    wire_mousemove(state.clone());
    wire_mouseout(state);
}

fn wire_mousemove(state: Rc<RefCell<AnimationState>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let pos = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        state.borrow_mut().set_pointer(Some(pos));
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_mouseout(state: Rc<RefCell<AnimationState>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        // mouseout also fires when crossing between elements; only a missing
        // related target means the pointer left the page.
        if ev.related_target().is_none() {
            state.borrow_mut().set_pointer(None);
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("mouseout", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
