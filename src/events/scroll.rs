//! Resize and navigation wiring. Section visibility itself is measured every
//! frame by the loop, so no scroll listener is needed here.

use crate::audio::SoundBoard;
use crate::core::SECTION_IDS;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_resize(canvas: web::HtmlCanvasElement) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas);
    }) as Box<dyn FnMut()>);
    if let Some(wnd) = web::window() {
        let _ = wnd.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Each `#nav-{id}` link smooth-scrolls its section into view with a blip.
pub fn wire_nav_links(document: &web::Document, sound: Rc<RefCell<SoundBoard>>) {
    for id in SECTION_IDS {
        let sound = sound.clone();
        dom::add_click_listener(document, &format!("nav-{}", id), move || {
            if let Some(doc) = dom::window_document() {
                dom::smooth_scroll_to(&doc, id);
            }
            sound.borrow_mut().click_blip();
        });
    }
}

pub fn wire_sound_toggle(document: &web::Document, sound: Rc<RefCell<SoundBoard>>) {
    dom::add_click_listener(document, "sound-toggle", move || {
        let mut s = sound.borrow_mut();
        s.toggle();
        if s.enabled() {
            s.click_blip();
        }
        if let Some(doc) = dom::window_document() {
            dom::set_text(
                &doc,
                "sound-toggle",
                if s.enabled() { "SOUND: ON" } else { "SOUND: OFF" },
            );
        }
    });
}
