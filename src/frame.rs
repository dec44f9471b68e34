//! Per-frame orchestration: one `FrameContext` owns every piece of mutable
//! state and a single requestAnimationFrame loop drives it. DOM events only
//! write into the shared `Rc<RefCell<…>>` slots; all mutation and painting
//! happens here, in a fixed order.

use crate::camera;
use crate::constants::*;
use crate::core::{
    card_tilt, smoothing_alpha, ContactForm, HeroEnsemble, LoadingGate, ParticleCloud,
    PointerTrack, ScrollDirector, CapsuleWidget, RIPPLE_LIFETIME_SEC,
};
use crate::dom;
use crate::input;
use crate::overlay;
use crate::render::{self, MeshBatch, MeshInstance, MeshKind, SceneFrame, SpriteInstance};
use crate::audio::SoundBoard;
use glam::{EulerRot, Mat4, Vec3};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// Scene material palette
const BLOCK_COLOR: [f32; 3] = [0.75, 0.82, 0.92];
const BLOCK_ALPHA: f32 = 0.4;
const CORE_COLOR: [f32; 3] = [1.0, 0.341, 0.133];
const RING_COLOR: [f32; 3] = [0.0, 0.831, 1.0];
const CONNECTOR_COLOR: [f32; 3] = [1.0, 0.341, 0.133];
const CAPSULE_COLOR: [f32; 3] = [0.15, 0.17, 0.25];

pub struct FrameContext<'a> {
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,

    pub gate: Rc<RefCell<LoadingGate>>,
    pub pointer: Rc<RefCell<PointerTrack>>,
    pub mouse: Rc<RefCell<input::MouseState>>,
    pub hover_capsule: Rc<RefCell<Option<usize>>>,
    pub capsules: Rc<RefCell<Vec<CapsuleWidget>>>,
    pub form: Rc<RefCell<ContactForm>>,
    pub sound: Rc<RefCell<SoundBoard>>,
    pub queued_ripples: Rc<RefCell<Vec<[f32; 2]>>>,

    pub ensemble: HeroEnsemble,
    pub particles: ParticleCloud,
    pub director: ScrollDirector,
    pub gpu: Option<render::GpuState<'a>>,

    pub last_instant: Instant,
    pub elapsed: f32,
    cursor_light: Vec3,
    live_ripples: Vec<(web::Element, f32)>,
}

impl<'a> FrameContext<'a> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        document: web::Document,
        canvas: web::HtmlCanvasElement,
        gate: Rc<RefCell<LoadingGate>>,
        pointer: Rc<RefCell<PointerTrack>>,
        mouse: Rc<RefCell<input::MouseState>>,
        hover_capsule: Rc<RefCell<Option<usize>>>,
        capsules: Rc<RefCell<Vec<CapsuleWidget>>>,
        form: Rc<RefCell<ContactForm>>,
        sound: Rc<RefCell<SoundBoard>>,
        queued_ripples: Rc<RefCell<Vec<[f32; 2]>>>,
        ensemble: HeroEnsemble,
        particles: ParticleCloud,
        gpu: Option<render::GpuState<'a>>,
    ) -> Self {
        Self {
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
            ensemble,
            particles,
            director: ScrollDirector::default(),
            gpu,
            last_instant: Instant::now(),
            elapsed: 0.0,
            cursor_light: Vec3::new(0.0, 0.0, CURSOR_LIGHT_Z),
            live_ripples: Vec::new(),
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;
        self.elapsed += dt_sec;

        // The gate blocks everything else until its completion edge.
        if !self.gate.borrow().is_done() {
            let fired = self.gate.borrow_mut().advance(dt_sec);
            overlay::paint_gate(&self.document, &self.gate.borrow());
            if fired {
                log::info!("[gate] sequence complete, revealing page");
                overlay::reveal_main(&self.document);
                self.sound.borrow_mut().power_up();
            }
            return;
        }

        self.step_cursor_layer(dt_sec);
        self.step_sections(dt_sec);
        self.step_scene(dt_sec);
        self.step_contact(dt_sec);
        self.render_scene();
    }

    fn step_cursor_layer(&mut self, dt_sec: f32) {
        let (raw, displayed) = {
            let mut p = self.pointer.borrow_mut();
            p.step();
            (p.raw(), p.displayed())
        };
        overlay::paint_cursor(&self.document, raw, displayed, self.mouse.borrow().down);

        // Card tilt follows the raw pointer while it is over the card; CSS
        // transitions spring the card back once the transform resets.
        if let Ok(cards) = self.document.query_selector_all(".tilt-card") {
            for i in 0..cards.length() {
                let Some(el) = cards.item(i).and_then(|n| n.dyn_into::<web::Element>().ok())
                else {
                    continue;
                };
                let rect = el.get_bounding_client_rect();
                let inside = raw[0] >= rect.left() as f32
                    && raw[0] <= rect.right() as f32
                    && raw[1] >= rect.top() as f32
                    && raw[1] <= rect.bottom() as f32;
                if inside {
                    let center = [
                        (rect.left() + rect.width() * 0.5) as f32,
                        (rect.top() + rect.height() * 0.5) as f32,
                    ];
                    let [tx, ty] = card_tilt(raw, center);
                    let _ = el.set_attribute(
                        "style",
                        &format!(
                            "transform:perspective(600px) rotateX({:.2}deg) rotateY({:.2}deg)",
                            tx, ty
                        ),
                    );
                } else {
                    let _ = el.remove_attribute("style");
                }
            }
        }

        // Ripples: spawn queued, expire aged. Each element lives and dies on
        // this clock, independent of its siblings.
        for [x, y] in self.queued_ripples.borrow_mut().drain(..) {
            if let Some(el) = overlay::spawn_ripple(&self.document, x, y) {
                self.live_ripples.push((el, 0.0));
            }
        }
        for (_, age) in &mut self.live_ripples {
            *age += dt_sec;
        }
        self.live_ripples.retain(|(el, age)| {
            if *age >= RIPPLE_LIFETIME_SEC {
                el.remove();
                false
            } else {
                true
            }
        });
    }

    fn step_sections(&mut self, dt_sec: f32) {
        let rects = overlay::section_rects(&self.document);
        let (_, vh) = dom::viewport_size();
        self.director.observe(&rects, vh);
        let prev = self.director.active();
        let active = self.director.resolve_active(&rects, vh);
        if active != prev {
            self.sound.borrow_mut().whoosh();
        }
        self.director.step(dt_sec);
        overlay::paint_sections(&self.document, &self.director);
        overlay::paint_nav_active(&self.document, active);
    }

    fn step_scene(&mut self, dt_sec: f32) {
        let (vw, vh) = dom::viewport_size();
        let ndc = self.pointer.borrow().ndc(vw, vh);
        self.ensemble.update(dt_sec, ndc);
        self.particles.update(dt_sec, self.elapsed);

        let hovered = *self.hover_capsule.borrow();
        let mut capsules = self.capsules.borrow_mut();
        for (i, capsule) in capsules.iter_mut().enumerate() {
            capsule.set_hovered(hovered == Some(i));
            capsule.update(dt_sec, self.elapsed);
        }

        // Cursor point light eases toward the pointer's world position on the
        // light plane.
        let ms = *self.mouse.borrow();
        let (ro, rd) = camera::screen_to_world_ray(
            self.canvas.width() as f32,
            self.canvas.height() as f32,
            ms.x,
            ms.y,
        );
        if rd.z.abs() > 1e-6 {
            let t = (CURSOR_LIGHT_Z - ro.z) / rd.z;
            if t >= 0.0 {
                let target = ro + rd * t;
                let alpha = smoothing_alpha(dt_sec, CURSOR_LIGHT_EASE_RATE);
                self.cursor_light += (target - self.cursor_light) * alpha;
            }
        }
    }

    fn step_contact(&mut self, dt_sec: f32) {
        let mut form = self.form.borrow_mut();
        form.advance(dt_sec);
        overlay::paint_contact(&self.document, &form);
    }

    fn render_scene(&mut self) {
        if self.gpu.is_none() {
            return;
        }

        let group = Mat4::from_euler(
            EulerRot::XYZ,
            self.ensemble.group_rotation.x,
            self.ensemble.group_rotation.y,
            self.ensemble.group_rotation.z,
        ) * Mat4::from_scale(Vec3::splat(self.ensemble.group_scale));

        let mut cubes: Vec<MeshInstance> = Vec::new();
        let mut icosahedrons: Vec<MeshInstance> = Vec::new();
        let mut octahedrons: Vec<MeshInstance> = Vec::new();
        for block in self.ensemble.blocks() {
            let rot = block.rotation(self.elapsed);
            let model = group
                * Mat4::from_translation(block.position)
                * Mat4::from_euler(EulerRot::XYZ, rot.x, rot.y, rot.z)
                * Mat4::from_scale(Vec3::splat(block.scale));
            let instance = MeshInstance::new(model, BLOCK_COLOR, BLOCK_ALPHA, 0.0);
            match block.kind {
                crate::core::ShapeKind::Cube => cubes.push(instance),
                crate::core::ShapeKind::Icosahedron => icosahedrons.push(instance),
                crate::core::ShapeKind::Octahedron => octahedrons.push(instance),
            }
        }

        let mut spheres: Vec<MeshInstance> = Vec::new();
        spheres.push(MeshInstance::new(
            group * Mat4::from_scale(Vec3::splat(0.6)),
            CORE_COLOR,
            1.0,
            self.ensemble.core_glow,
        ));

        let ring_angle = HeroEnsemble::core_ring_angle(self.elapsed);
        let torus = vec![MeshInstance::new(
            group * Mat4::from_rotation_z(ring_angle) * Mat4::from_scale(Vec3::splat(2.0)),
            RING_COLOR,
            0.9,
            0.5,
        )];

        {
            let capsules = self.capsules.borrow();
            for capsule in capsules.iter() {
                let model = Mat4::from_translation(capsule.center())
                    * Mat4::from_rotation_y(capsule.rotation_y)
                    * Mat4::from_scale(Vec3::new(0.8, 1.6, 0.8) * capsule.scale);
                spheres.push(MeshInstance::new(
                    model,
                    CAPSULE_COLOR,
                    1.0,
                    capsule.glow_opacity,
                ));
            }
        }

        let mut sprites: Vec<SpriteInstance> =
            Vec::with_capacity(self.particles.len() + self.ensemble.connectors().len());
        let cloud_rot = Mat4::from_euler(
            EulerRot::XYZ,
            self.particles.rotation.x,
            self.particles.rotation.y,
            0.0,
        ) * Mat4::from_scale(Vec3::splat(self.particles.scale));
        for (pos, color) in self
            .particles
            .positions()
            .iter()
            .zip(self.particles.colors())
        {
            sprites.push(SpriteInstance::new(
                cloud_rot.transform_point3(*pos),
                PARTICLE_SPRITE_SIZE,
                *color,
                0.8,
            ));
        }
        for connector in self.ensemble.connectors() {
            sprites.push(SpriteInstance::new(
                group.transform_point3(*connector),
                0.12,
                CONNECTOR_COLOR,
                0.9,
            ));
        }

        let batches = [
            MeshBatch {
                kind: MeshKind::Cube,
                instances: &cubes,
            },
            MeshBatch {
                kind: MeshKind::Icosahedron,
                instances: &icosahedrons,
            },
            MeshBatch {
                kind: MeshKind::Octahedron,
                instances: &octahedrons,
            },
            MeshBatch {
                kind: MeshKind::Sphere,
                instances: &spheres,
            },
            MeshBatch {
                kind: MeshKind::Torus,
                instances: &torus,
            },
        ];
        let scene = SceneFrame {
            batches: &batches,
            sprites: &sprites,
            cursor_light: self.cursor_light,
            time: self.elapsed,
        };

        let w = self.canvas.width();
        let h = self.canvas.height();
        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(w, h);
            if let Err(e) = g.render(&scene) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
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
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
