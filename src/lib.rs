//! Interactive portfolio front-end: a WebGPU scene (hero ensemble, project
//! capsules, particle backdrop, bloom post chain) plus the DOM layers around
//! it (loading gate, scroll-driven sections, custom cursor, contact form).
//!
//! Everything animated runs off one requestAnimationFrame loop in [`frame`];
//! event handlers only write into shared state slots.

#![cfg(target_arch = "wasm32")]

pub mod core;

mod audio;
mod camera;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;

use crate::audio::SoundBoard;
use crate::constants::{CAPSULE_ROW_Y, CAPSULE_ROW_Z, CAPSULE_SPACING_X};
use crate::core::{
    CapsuleWidget, ContactForm, EmailConfig, HeroEnsemble, LoadingGate, ParticleCloud,
    PointerTrack, BACKDROP_PARTICLE_COUNT, PROJECTS,
};
use glam::Vec3;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

const ENSEMBLE_SEED: u64 = 42;
const BACKDROP_SEED: u64 = 7;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = document
        .get_element_by_id("scene-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #scene-canvas"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| anyhow::anyhow!("#scene-canvas is not a canvas"))?;
    dom::sync_canvas_backing_size(&canvas);
    events::wire_resize(canvas.clone());

    overlay::suppress_native_cursor(&document);
    wire_pagehide(&document);

    let config = Rc::new(EmailConfig::new(
        dom::meta_content(&document, "folio-access-key"),
        dom::meta_content(&document, "folio-to-email"),
        dom::meta_content(&document, "folio-from-name"),
    ));
    if !config.is_configured() {
        log::warn!("[contact] relay meta tags missing, submissions will be refused");
    }

    let gate = Rc::new(RefCell::new(LoadingGate::default()));
    let pointer = Rc::new(RefCell::new(PointerTrack::default()));
    let mouse = Rc::new(RefCell::new(input::MouseState::default()));
    let hover_capsule = Rc::new(RefCell::new(None));
    let capsules = Rc::new(RefCell::new(build_capsules()));
    let form = Rc::new(RefCell::new(ContactForm::default()));
    let sound = Rc::new(RefCell::new(SoundBoard::new()));
    let queued_ripples = Rc::new(RefCell::new(Vec::new()));

    // The gate waits for a user gesture, which also unlocks audio.
    {
        let gate = gate.clone();
        let sound = sound.clone();
        dom::add_click_listener(&document, "loading-gate", move || {
            sound.borrow_mut().unlock();
            if gate.borrow_mut().start() {
                log::info!("[gate] sequence started");
            }
        });
    }

    events::wire_pointer_handlers(events::PointerWiring {
        canvas: canvas.clone(),
        pointer: pointer.clone(),
        mouse: mouse.clone(),
        hover_capsule: hover_capsule.clone(),
        capsules: capsules.clone(),
        sound: sound.clone(),
        queued_ripples: queued_ripples.clone(),
    });
    events::wire_nav_links(&document, sound.clone());
    events::wire_sound_toggle(&document, sound.clone());
    events::wire_form_submit(&document, form.clone(), config);

    let gpu = frame::init_gpu(&canvas).await;
    if gpu.is_none() {
        log::warn!("WebGPU unavailable, DOM layers continue without the scene");
    }

    let ctx = frame::FrameContext::new(
        document,
        canvas,
        gate,
        pointer,
        mouse,
        hover_capsule,
        capsules,
        form,
        sound,
        queued_ripples,
        HeroEnsemble::new(ENSEMBLE_SEED),
        ParticleCloud::new(BACKDROP_PARTICLE_COUNT, BACKDROP_SEED),
        gpu,
    );
    frame::start_loop(Rc::new(RefCell::new(ctx)));
    Ok(())
}

/// One capsule per project, in a centered row.
fn build_capsules() -> Vec<CapsuleWidget> {
    let count = PROJECTS.len();
    PROJECTS
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let x = (i as f32 - (count as f32 - 1.0) * 0.5) * CAPSULE_SPACING_X;
            CapsuleWidget::new(
                p.slug,
                p.title,
                i,
                Vec3::new(x, CAPSULE_ROW_Y, CAPSULE_ROW_Z),
            )
        })
        .collect()
}

fn wire_pagehide(document: &web::Document) {
    let doc = document.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        overlay::restore_native_cursor(&doc);
    }) as Box<dyn FnMut()>);
    if let Some(wnd) = web::window() {
        let _ = wnd.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
