use crate::core::AnimationState;
use crate::dom;
use crate::surface::Surface;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// On every window resize, resize the canvas and rebuild the scene for the
/// new bounds. No attempt is made to keep existing entities.
pub fn wire_resize(surface: Rc<RefCell<Surface>>, state: Rc<RefCell<AnimationState>>) {
    let closure = Closure::wrap(Box::new(move || {
        let viewport = surface.borrow().configure(dom::viewport());
        state.borrow_mut().resize(viewport);
    }) as Box<dyn FnMut()>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
