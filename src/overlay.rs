//! DOM painting for the loading gate, section reveal, nav highlight, contact
//! status and the custom cursor. All functions are idempotent per frame; the
//! frame loop calls them with the latest core state and they write styles.

use crate::core::{
    exit_opacity, progress, typed_state, ContactError, ContactForm, FormPhase, GatePhase,
    LoadingGate, ScrollDirector, AnchorRect, SECTION_IDS, STATUS_MESSAGES,
};
use web_sys as web;

// ---------------- Loading gate ----------------

pub fn paint_gate(document: &web::Document, gate: &LoadingGate) {
    let elapsed = gate.elapsed();
    let (msg_idx, chars) = typed_state(elapsed);
    let text: String = STATUS_MESSAGES[msg_idx].chars().take(chars).collect();
    if let Some(el) = document.get_element_by_id("gate-status") {
        el.set_text_content(Some(&text));
    }

    let fill = progress(elapsed);
    if let Some(el) = document.get_element_by_id("gate-progress") {
        let _ = el.set_attribute("style", &format!("width:{:.1}%", fill * 100.0));
    }
    if let Some(el) = document.get_element_by_id("gate-percent") {
        el.set_text_content(Some(&format!("{:.0}%", fill * 100.0)));
    }

    if gate.phase() == GatePhase::Exiting {
        if let Some(el) = document.get_element_by_id("loading-gate") {
            let _ = el.set_attribute("style", &format!("opacity:{:.3}", exit_opacity(elapsed)));
        }
    }
}

/// Tear the gate down and reveal the page. Called exactly once, on the
/// completion edge.
pub fn reveal_main(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("loading-gate") {
        let _ = el.class_list().add_1("hidden");
        let _ = el.set_attribute("style", "display:none");
    }
    if let Some(el) = document.get_element_by_id("main-content") {
        let _ = el.class_list().remove_1("hidden");
        let _ = el.set_attribute("style", "");
    }
}

// ---------------- Sections & nav ----------------

/// Measure each section anchor relative to the viewport top.
pub fn section_rects(document: &web::Document) -> Vec<AnchorRect> {
    SECTION_IDS
        .iter()
        .map(|id| match document.get_element_by_id(id) {
            Some(el) => {
                let r = el.get_bounding_client_rect();
                AnchorRect {
                    top: r.top() as f32,
                    bottom: r.bottom() as f32,
                }
            }
            // A missing anchor never enters and never goes active.
            None => AnchorRect {
                top: f32::MAX,
                bottom: f32::MAX,
            },
        })
        .collect()
}

pub fn paint_sections(document: &web::Document, director: &ScrollDirector) {
    for (i, id) in SECTION_IDS.iter().enumerate().take(director.len()) {
        let anim = director.animator(i);
        let content_id = format!("{}-content", id);
        if let Some(el) = document.get_element_by_id(&content_id) {
            let _ = el.set_attribute(
                "style",
                &format!(
                    "opacity:{:.3};transform:translateY({:.1}px)",
                    anim.opacity(),
                    anim.translate_y()
                ),
            );
        }
    }
}

pub fn paint_nav_active(document: &web::Document, active: usize) {
    for (i, id) in SECTION_IDS.iter().enumerate() {
        if let Some(el) = document.get_element_by_id(&format!("nav-{}", id)) {
            let cl = el.class_list();
            if i == active {
                let _ = cl.add_1("active");
            } else {
                let _ = cl.remove_1("active");
            }
        }
    }
}

// ---------------- Contact form ----------------

pub fn paint_contact(document: &web::Document, form: &ContactForm) {
    let status = match (form.phase(), form.error()) {
        (FormPhase::Submitting, _) => "TRANSMITTING...".to_string(),
        (FormPhase::Success, _) => "MESSAGE DELIVERED".to_string(),
        (FormPhase::Idle, Some(ContactError::NotConfigured)) => {
            "EMAIL SERVICE NOT CONFIGURED".to_string()
        }
        (FormPhase::Idle, Some(e)) => format!("TRANSMISSION FAILED: {}", e),
        (FormPhase::Idle, None) => String::new(),
    };
    if let Some(el) = document.get_element_by_id("contact-status") {
        el.set_text_content(Some(&status));
    }
    if let Some(el) = document.get_element_by_id("contact-submit") {
        if form.phase() == FormPhase::Submitting {
            let _ = el.set_attribute("disabled", "");
        } else {
            let _ = el.remove_attribute("disabled");
        }
    }
}

// ---------------- Custom cursor ----------------

/// Hide the native cursor while the custom layer is mounted. The injected
/// style rule also covers links and buttons, which otherwise restore their
/// own cursor.
pub fn suppress_native_cursor(document: &web::Document) {
    if document.get_element_by_id("cursor-suppress").is_some() {
        return;
    }
    let Ok(style) = document.create_element("style") else {
        return;
    };
    style.set_id("cursor-suppress");
    style.set_text_content(Some("*, a, button { cursor: none !important; }"));
    if let Some(head) = document.head() {
        let _ = head.append_child(&style);
    }
}

pub fn restore_native_cursor(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("cursor-suppress") {
        el.remove();
    }
}

/// Place the dot at the raw position and the trailing ring at the smoothed
/// one. The ring contracts while a button is held.
pub fn paint_cursor(document: &web::Document, raw: [f32; 2], displayed: [f32; 2], pressed: bool) {
    if let Some(el) = document.get_element_by_id("cursor-dot") {
        let _ = el.set_attribute(
            "style",
            &format!("transform:translate3d({:.1}px,{:.1}px,0)", raw[0], raw[1]),
        );
    }
    if let Some(el) = document.get_element_by_id("cursor-ring") {
        let ring_scale = if pressed { 0.75 } else { 1.0 };
        let _ = el.set_attribute(
            "style",
            &format!(
                "transform:translate3d({:.1}px,{:.1}px,0) scale({:.2})",
                displayed[0], displayed[1], ring_scale
            ),
        );
    }
}

/// Spawn one ripple element at the click point. The caller owns expiry.
pub fn spawn_ripple(document: &web::Document, x: f32, y: f32) -> Option<web::Element> {
    let el = document.create_element("div").ok()?;
    let _ = el.class_list().add_1("cursor-ripple");
    let _ = el.set_attribute(
        "style",
        &format!("left:{:.1}px;top:{:.1}px", x, y),
    );
    let body = document.body()?;
    body.append_child(&el).ok()?;
    Some(el)
}
