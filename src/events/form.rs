//! Contact form wiring: intercepts the form's native submit event, reads the
//! input fields, runs the form state machine, and carries out the single
//! relay POST it requests. Riding the submit event means the browser's
//! required-field constraints have already passed before the handler runs;
//! a late relay response is folded back through `ContactForm::resolve`,
//! which ignores it unless a submission is still in flight.

use crate::core::{ContactForm, EmailConfig, RelayResponse, SubmitOutcome, RELAY_ENDPOINT};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

pub fn wire_form_submit(
    document: &web::Document,
    form: Rc<RefCell<ContactForm>>,
    config: Rc<EmailConfig>,
) {
    let Some(form_el) = document
        .get_element_by_id("contact-form")
        .and_then(|el| el.dyn_into::<web::HtmlFormElement>().ok())
    else {
        log::warn!("[contact] #contact-form missing, submissions disabled");
        return;
    };
    let listener_target = form_el.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::Event| {
        // We take over delivery; the page must not navigate.
        ev.prevent_default();
        // The submit event already implies native validation passed, but a
        // novalidate form skips it; report_validity re-runs the constraints
        // and surfaces the bubbles either way.
        if !form_el.report_validity() {
            return;
        }
        let Some(doc) = dom::window_document() else {
            return;
        };
        {
            let mut f = form.borrow_mut();
            f.fields.name = input_value(&doc, "contact-name");
            f.fields.email = input_value(&doc, "contact-email");
            f.fields.message = textarea_value(&doc, "contact-message");
        }
        let payload = form.borrow_mut().begin_submit(&config);
        let Some(payload) = payload else {
            return;
        };
        let body = match serde_json::to_string(&payload) {
            Ok(body) => body,
            Err(e) => {
                log::error!("[contact] payload serialization failed: {}", e);
                form.borrow_mut().resolve(SubmitOutcome::TransportFailed);
                return;
            }
        };
        let form = form.clone();
        spawn_local(async move {
            let outcome = post_relay(&body).await;
            form.borrow_mut().resolve(outcome);
        });
    }) as Box<dyn FnMut(_)>);
    let _ = listener_target
        .add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn input_value(document: &web::Document, id: &str) -> String {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
        .map(|el| el.value())
        .unwrap_or_default()
}

fn textarea_value(document: &web::Document, id: &str) -> String {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlTextAreaElement>().ok())
        .map(|el| el.value())
        .unwrap_or_default()
}

async fn post_relay(body_json: &str) -> SubmitOutcome {
    let Some(window) = web::window() else {
        return SubmitOutcome::TransportFailed;
    };
    let opts = web::RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&JsValue::from_str(body_json));
    let Ok(request) = web::Request::new_with_str_and_init(RELAY_ENDPOINT, &opts) else {
        return SubmitOutcome::TransportFailed;
    };
    if request
        .headers()
        .set("Content-Type", "application/json")
        .is_err()
    {
        return SubmitOutcome::TransportFailed;
    }
    let Ok(response) = JsFuture::from(window.fetch_with_request(&request)).await else {
        return SubmitOutcome::TransportFailed;
    };
    let Ok(response) = response.dyn_into::<web::Response>() else {
        return SubmitOutcome::TransportFailed;
    };
    let Ok(text_promise) = response.text() else {
        return SubmitOutcome::TransportFailed;
    };
    let Ok(text) = JsFuture::from(text_promise).await else {
        return SubmitOutcome::TransportFailed;
    };
    let text = text.as_string().unwrap_or_default();
    match serde_json::from_str::<RelayResponse>(&text) {
        Ok(r) if r.success => SubmitOutcome::Delivered,
        // An answer we can parse but that is not a success, or one we cannot
        // parse at all, both count as the relay declining the message.
        _ => SubmitOutcome::Rejected,
    }
}
