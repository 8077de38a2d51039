use crate::input::{self, PointerInput};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Keep the canvas backing store matched to its CSS size on window resize.
pub fn wire_resize(window: &web::Window, canvas: &web::HtmlCanvasElement) {
    sync_canvas_backing_size(canvas);
    let canvas = canvas.clone();
    let closure = Closure::wrap(Box::new(move || {
        sync_canvas_backing_size(&canvas);
    }) as Box<dyn FnMut()>);
    let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Current document scroll progress in \[0, 1\].
pub fn read_scroll_progress(window: &web::Window) -> f32 {
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let inner_height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let scroll_height = window
        .document()
        .and_then(|d| d.document_element())
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0);
    input::scroll_progress(scroll_y, scroll_height, inner_height)
}

/// Write the latest scroll progress into `scroll` on every scroll and resize.
pub fn wire_scroll(window: &web::Window, scroll: Rc<Cell<f32>>) {
    scroll.set(read_scroll_progress(window));
    for event in ["scroll", "resize"] {
        let scroll = scroll.clone();
        let closure = Closure::wrap(Box::new(move || {
            if let Some(w) = web::window() {
                scroll.set(read_scroll_progress(&w));
            }
        }) as Box<dyn FnMut()>);
        let _ = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Track the pointer over the canvas; leaving clears it.
pub fn wire_pointer(canvas: &web::HtmlCanvasElement, pointer: Rc<RefCell<PointerInput>>) {
    {
        let pointer = pointer.clone();
        let canvas_move = canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let px = input::pointer_canvas_px(&ev, &canvas_move);
            pointer.borrow_mut().moved(px);
        }) as Box<dyn FnMut(web::PointerEvent)>);
        let _ = canvas
            .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    for event in ["pointerleave", "pointercancel"] {
        let pointer = pointer.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            pointer.borrow_mut().left();
        }) as Box<dyn FnMut(web::PointerEvent)>);
        let _ = canvas.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
