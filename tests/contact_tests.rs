// Host-side tests for the contact form state machine.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod config {
    include!("../src/core/config.rs");
}
mod contact {
    include!("../src/core/contact.rs");
}

use config::*;
use constants::SUCCESS_RESET_SEC;
use contact::*;

fn configured() -> EmailConfig {
    EmailConfig::new(
        Some("key-123".into()),
        Some("me@example.com".into()),
        Some("Hamza".into()),
    )
}

fn filled(form: &mut ContactForm) {
    form.fields = FormFields {
        name: "Ada".into(),
        email: "ada@example.com".into(),
        message: "Hello there".into(),
    };
}

#[test]
fn missing_config_short_circuits_before_any_payload() {
    let mut form = ContactForm::default();
    filled(&mut form);
    let payload = form.begin_submit(&EmailConfig::new(None, None, None));
    assert!(payload.is_none());
    assert_eq!(form.phase(), FormPhase::Idle);
    assert_eq!(form.error(), Some(ContactError::NotConfigured));
}

#[test]
fn blank_access_key_counts_as_missing() {
    let mut form = ContactForm::default();
    let config = EmailConfig::new(Some("   ".into()), Some("me@example.com".into()), None);
    assert!(form.begin_submit(&config).is_none());
    assert_eq!(form.error(), Some(ContactError::NotConfigured));
}

#[test]
fn begin_submit_builds_payload_and_enters_submitting() {
    let mut form = ContactForm::default();
    filled(&mut form);
    let payload = form.begin_submit(&configured()).unwrap();
    assert_eq!(form.phase(), FormPhase::Submitting);
    assert_eq!(payload.access_key, "key-123");
    assert_eq!(payload.name, "Ada");
    assert_eq!(payload.subject, "New Portfolio Message from Ada");
    assert_eq!(payload.from_name, "Hamza");
}

#[test]
fn default_from_name_applies() {
    let mut form = ContactForm::default();
    let config = EmailConfig::new(Some("k".into()), Some("me@example.com".into()), None);
    let payload = form.begin_submit(&config).unwrap();
    assert_eq!(payload.from_name, DEFAULT_FROM_NAME);
}

#[test]
fn double_submit_while_in_flight_is_refused() {
    let mut form = ContactForm::default();
    assert!(form.begin_submit(&configured()).is_some());
    assert!(form.begin_submit(&configured()).is_none());
    assert_eq!(form.phase(), FormPhase::Submitting);
}

#[test]
fn delivered_enters_success_and_clears_error() {
    let mut form = ContactForm::default();
    let _ = form.begin_submit(&configured());
    form.resolve(SubmitOutcome::Delivered);
    assert_eq!(form.phase(), FormPhase::Success);
    assert_eq!(form.error(), None);
}

#[test]
fn rejection_keeps_fields_for_correction() {
    let mut form = ContactForm::default();
    filled(&mut form);
    let _ = form.begin_submit(&configured());
    form.resolve(SubmitOutcome::Rejected);
    assert_eq!(form.phase(), FormPhase::Idle);
    assert_eq!(form.error(), Some(ContactError::Rejected));
    assert_eq!(form.fields.name, "Ada");
}

#[test]
fn transport_failure_maps_to_network_error() {
    let mut form = ContactForm::default();
    let _ = form.begin_submit(&configured());
    form.resolve(SubmitOutcome::TransportFailed);
    assert_eq!(form.error(), Some(ContactError::Network));
}

#[test]
fn success_resets_to_idle_with_cleared_fields() {
    let mut form = ContactForm::default();
    filled(&mut form);
    let _ = form.begin_submit(&configured());
    form.resolve(SubmitOutcome::Delivered);
    form.advance(SUCCESS_RESET_SEC - 0.1);
    assert_eq!(form.phase(), FormPhase::Success);
    form.advance(0.2);
    assert_eq!(form.phase(), FormPhase::Idle);
    assert_eq!(form.fields, FormFields::default());
}

#[test]
fn late_resolve_after_reset_is_a_no_op() {
    let mut form = ContactForm::default();
    let _ = form.begin_submit(&configured());
    form.resolve(SubmitOutcome::Delivered);
    form.advance(SUCCESS_RESET_SEC + 1.0);
    form.resolve(SubmitOutcome::Rejected);
    assert_eq!(form.phase(), FormPhase::Idle);
    assert_eq!(form.error(), None);
}

// Submission wiring listens on the form's submit event, which only fires
// once the browser's required-field constraints pass (and re-checks with
// report_validity), so begin_submit never sees empty fields in the page.
// The state machine itself stays field-agnostic; the payload mirrors the
// validated fields verbatim.
#[test]
fn payload_mirrors_fields_verbatim() {
    let mut form = ContactForm::default();
    form.fields = FormFields {
        name: "Grace".into(),
        email: "grace@example.com".into(),
        message: "Multi\nline body".into(),
    };
    let payload = form.begin_submit(&configured()).unwrap();
    assert_eq!(payload.name, form.fields.name);
    assert_eq!(payload.email, form.fields.email);
    assert_eq!(payload.message, form.fields.message);
}

#[test]
fn payload_serializes_with_expected_keys() {
    let mut form = ContactForm::default();
    filled(&mut form);
    let payload = form.begin_submit(&configured()).unwrap();
    let json = serde_json::to_string(&payload).unwrap();
    for key in [
        "access_key",
        "name",
        "email",
        "message",
        "subject",
        "from_name",
    ] {
        assert!(json.contains(key), "missing key {}", key);
    }
}

#[test]
fn relay_response_parses_both_ways() {
    let ok: RelayResponse = serde_json::from_str(r#"{"success":true}"#).unwrap();
    assert!(ok.success);
    let no: RelayResponse = serde_json::from_str(r#"{"success":false,"message":"nope"}"#).unwrap();
    assert!(!no.success);
}
