//! Pointer wiring: move updates the shared pointer slots and resolves the
//! hovered capsule by ray picking; up queues a click ripple and, over a
//! capsule, navigates through the capsule state machine. Handlers only write
//! state; the frame loop does all painting.

use crate::audio::SoundBoard;
use crate::camera;
use crate::core::{CapsuleWidget, PointerTrack, CAPSULE_PICK_RADIUS};
use crate::dom;
use crate::input;
use glam::Vec3;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub canvas: web::HtmlCanvasElement,
    pub pointer: Rc<RefCell<PointerTrack>>,
    pub mouse: Rc<RefCell<input::MouseState>>,
    pub hover_capsule: Rc<RefCell<Option<usize>>>,
    pub capsules: Rc<RefCell<Vec<CapsuleWidget>>>,
    pub sound: Rc<RefCell<SoundBoard>>,
    pub queued_ripples: Rc<RefCell<Vec<[f32; 2]>>>,
}

pub fn wire_pointer_handlers(w: PointerWiring) {
    wire_pointermove(&w);
    wire_pointerdown(&w);
    wire_pointerup(&w);
}

fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> (f32, f32) {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let sx = (x_css / rect.width().max(1.0) as f32) * canvas.width() as f32;
    let sy = (y_css / rect.height().max(1.0) as f32) * canvas.height() as f32;
    (sx, sy)
}

fn wire_pointermove(w: &PointerWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        w.pointer
            .borrow_mut()
            .set_raw(ev.client_x() as f32, ev.client_y() as f32);

        let (sx, sy) = pointer_canvas_px(&ev, &w.canvas);
        {
            let mut ms = w.mouse.borrow_mut();
            ms.x = sx;
            ms.y = sy;
        }

        let (ro, rd) = camera::screen_to_world_ray(
            w.canvas.width() as f32,
            w.canvas.height() as f32,
            sx,
            sy,
        );
        let centers: Vec<Vec3> = w.capsules.borrow().iter().map(|c| c.center()).collect();
        *w.hover_capsule.borrow_mut() =
            input::pick_nearest(&centers, CAPSULE_PICK_RADIUS, ro, rd);
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        let _ =
            wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerdown(w: &PointerWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        w.mouse.borrow_mut().down = true;
        let _ = w.canvas.set_pointer_capture(ev.pointer_id());
    }) as Box<dyn FnMut(_)>);
    let _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(w: &PointerWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        w.mouse.borrow_mut().down = false;

        // Every release spawns a ripple, capsule hit or not.
        w.queued_ripples
            .borrow_mut()
            .push([ev.client_x() as f32, ev.client_y() as f32]);

        if let Some(i) = *w.hover_capsule.borrow() {
            // The state machine guarantees the navigation side effect fires
            // exactly once even for same-tick double clicks.
            let slug = w
                .capsules
                .borrow_mut()
                .get_mut(i)
                .and_then(|c| c.click().map(str::to_string));
            if let Some(slug) = slug {
                log::info!("[capsule] navigating to project '{}'", slug);
                w.sound.borrow_mut().click_blip();
                dom::navigate_to(&format!("/projects/{}", slug));
            }
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        let _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
