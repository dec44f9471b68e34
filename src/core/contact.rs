// Contact transmission widget: a tri-state form machine around exactly one
// outbound network call.
//
// The machine never talks to the network itself; `begin_submit` hands the
// caller a payload to send, `resolve` folds the outcome back in, and
// `advance` handles the timed success-to-idle reset. All transitions are
// explicit and host-testable.

use super::config::EmailConfig;
use super::constants::SUCCESS_RESET_SEC;
use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactError {
    /// Missing relay credential; detected before any network attempt and not
    /// retryable until the site is reconfigured.
    #[error("email service is not configured")]
    NotConfigured,
    /// The request could not complete; transient, retry immediately.
    #[error("network error, check your connection")]
    Network,
    /// The relay answered but flagged the message as not delivered.
    #[error("the relay rejected the message")]
    Rejected,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
    Success,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// JSON body for the relay POST.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct OutboundMessage {
    pub access_key: String,
    pub name: String,
    pub email: String,
    pub message: String,
    pub subject: String,
    pub from_name: String,
}

#[derive(Clone, Copy, Debug, Deserialize)]
pub struct RelayResponse {
    pub success: bool,
}

/// Terminal outcome of one submission attempt, as seen by the wire layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Delivered,
    Rejected,
    TransportFailed,
}

#[derive(Clone, Debug, Default)]
pub struct ContactForm {
    phase: FormPhase,
    pub fields: FormFields,
    error: Option<ContactError>,
    success_elapsed: f32,
}

impl ContactForm {
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn error(&self) -> Option<ContactError> {
        self.error
    }

    /// Attempt to begin a submission. Returns the payload to send, or `None`
    /// when the submit is disallowed (already in flight) or short-circuited
    /// by missing configuration.
    pub fn begin_submit(&mut self, config: &EmailConfig) -> Option<OutboundMessage> {
        if self.phase() == FormPhase::Submitting {
            return None;
        }
        let Some(access_key) = config.access_key().filter(|_| config.is_configured()) else {
            self.error = Some(ContactError::NotConfigured);
            self.phase = FormPhase::Idle;
            return None;
        };
        self.error = None;
        self.phase = FormPhase::Submitting;
        Some(OutboundMessage {
            access_key: access_key.to_string(),
            name: self.fields.name.clone(),
            email: self.fields.email.clone(),
            message: self.fields.message.clone(),
            subject: format!("New Portfolio Message from {}", self.fields.name),
            from_name: config.from_name().to_string(),
        })
    }

    /// Fold the network outcome back into the machine. On rejection or
    /// transport failure the fields are retained for correction; only a
    /// completed success display clears them.
    pub fn resolve(&mut self, outcome: SubmitOutcome) {
        if self.phase() != FormPhase::Submitting {
            // A late response after teardown/reset changes nothing.
            return;
        }
        match outcome {
            SubmitOutcome::Delivered => {
                self.phase = FormPhase::Success;
                self.success_elapsed = 0.0;
                self.error = None;
            }
            SubmitOutcome::Rejected => {
                self.phase = FormPhase::Idle;
                self.error = Some(ContactError::Rejected);
            }
            SubmitOutcome::TransportFailed => {
                self.phase = FormPhase::Idle;
                self.error = Some(ContactError::Network);
            }
        }
    }

    /// Per-frame clock: after the fixed success display window the form
    /// returns to idle with all fields cleared.
    pub fn advance(&mut self, dt_sec: f32) {
        if self.phase() == FormPhase::Success {
            self.success_elapsed += dt_sec.max(0.0);
            if self.success_elapsed >= SUCCESS_RESET_SEC {
                self.phase = FormPhase::Idle;
                self.fields = FormFields::default();
                self.success_elapsed = 0.0;
            }
        }
    }
}
