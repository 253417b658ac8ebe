//! Contact form submission
//!
//! The form is a small state machine:
//!
//! ```text
//! Idle --submit--> Sending --ok--> Sent ----+
//!                          --err-> Failed --+--(display timeout)--> Idle
//! ```
//!
//! Input is validated before anything is sent; rejected input never reaches
//! the [`MessageSender`].

use std::sync::OnceLock;

use async_trait::async_trait;
use folio_core::{Scheduler, StateMachine, TimerGuard, TimerId};
use folio_layout::{FormStatus, FormView};
use regex::Regex;
use serde::Serialize;

use super::IntegrationError;

pub const INVALID_EMAIL: &str = "Please enter a valid email address";
pub const EMPTY_MESSAGE: &str = "Please enter a message";

/// Message relayed to the site owner
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub from_email: String,
    pub message: String,
    pub to_name: String,
}

/// Delivers contact messages
#[async_trait]
pub trait MessageSender: Send + Sync {
    async fn send(&self, payload: &ContactPayload) -> Result<(), IntegrationError>;
}

/// Logs messages instead of delivering them
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSender;

#[async_trait]
impl MessageSender for TracingSender {
    async fn send(&self, payload: &ContactPayload) -> Result<(), IntegrationError> {
        tracing::info!(
            from = %payload.from_email,
            to = %payload.to_name,
            length = payload.message.len(),
            "contact message"
        );
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum FormEvent {
    Submit,
    Delivered,
    Rejected,
    Reset,
}

fn email_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok())
        .as_ref()
}

/// `local@domain.tld` with no whitespace
pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_some_and(|pattern| pattern.is_match(email.trim()))
}

pub struct ContactForm {
    machine: StateMachine<FormStatus, FormEvent>,
    email: String,
    message: String,
    validation_error: Option<String>,
    to_name: String,
    scheduler: Scheduler,
    display_ms: u64,
    revert: Option<TimerGuard>,
}

impl ContactForm {
    pub fn new(scheduler: Scheduler, display_ms: u64, to_name: impl Into<String>) -> Self {
        let machine = StateMachine::builder(FormStatus::Idle)
            .on(FormStatus::Idle, FormEvent::Submit, FormStatus::Sending)
            .on(FormStatus::Sending, FormEvent::Delivered, FormStatus::Sent)
            .on(FormStatus::Sending, FormEvent::Rejected, FormStatus::Failed)
            .on(FormStatus::Sent, FormEvent::Reset, FormStatus::Idle)
            .on(FormStatus::Failed, FormEvent::Reset, FormStatus::Idle)
            .build();

        Self {
            machine,
            email: String::new(),
            message: String::new(),
            validation_error: None,
            to_name: to_name.into(),
            scheduler,
            display_ms,
            revert: None,
        }
    }

    pub fn status(&self) -> FormStatus {
        self.machine.current_state()
    }

    /// Snapshot for the layout
    pub fn view(&self) -> FormView {
        FormView {
            email: self.email.clone(),
            message: self.message.clone(),
            status: self.status(),
            validation_error: self.validation_error.clone(),
        }
    }

    /// Edits are ignored while the fields are disabled
    pub fn set_email(&mut self, email: impl Into<String>) {
        if self.status().is_disabled() {
            return;
        }
        self.email = email.into();
        self.validation_error = None;
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        if self.status().is_disabled() {
            return;
        }
        self.message = message.into();
        self.validation_error = None;
    }

    /// Validate and move to `Sending`, returning what to send.
    ///
    /// `None` when the form is busy or the input was rejected; the rejection
    /// reason is kept for the view.
    pub fn begin_submit(&mut self) -> Option<ContactPayload> {
        if !self.machine.can_send(FormEvent::Submit) {
            tracing::debug!(status = ?self.status(), "submit ignored");
            return None;
        }
        if !is_valid_email(&self.email) {
            self.validation_error = Some(INVALID_EMAIL.to_string());
            return None;
        }
        if self.message.trim().is_empty() {
            self.validation_error = Some(EMPTY_MESSAGE.to_string());
            return None;
        }

        self.validation_error = None;
        self.machine.send(FormEvent::Submit);
        Some(ContactPayload {
            from_email: self.email.trim().to_string(),
            message: self.message.clone(),
            to_name: self.to_name.clone(),
        })
    }

    /// Record the outcome of a send started by [`begin_submit`](Self::begin_submit)
    pub fn finish_submit(&mut self, result: Result<(), IntegrationError>) -> FormStatus {
        let event = match &result {
            Ok(()) => FormEvent::Delivered,
            Err(err) => {
                tracing::warn!(error = %err, "contact message failed");
                FormEvent::Rejected
            }
        };
        if !self.machine.can_send(event) {
            return self.status();
        }

        let status = self.machine.send(event);
        if status == FormStatus::Sent {
            self.email.clear();
            self.message.clear();
        }
        self.revert = Some(
            self.scheduler
                .schedule_labeled(self.display_ms, None, "contact-status"),
        );
        tracing::debug!(?status, "contact form settled");
        status
    }

    /// Validate, send and settle in one step
    pub async fn submit(&mut self, sender: &dyn MessageSender) -> FormStatus {
        let Some(payload) = self.begin_submit() else {
            return self.status();
        };
        let result = sender.send(&payload).await;
        self.finish_submit(result)
    }

    /// Handle a fired timer; `false` when the timer is not the form's
    pub fn on_timer(&mut self, id: TimerId) -> bool {
        if !self.revert.as_ref().is_some_and(|guard| guard.id() == id) {
            return false;
        }
        self.revert = None;
        self.machine.send(FormEvent::Reset);
        true
    }
}

impl std::fmt::Debug for ContactForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactForm")
            .field("status", &self.status())
            .field("email", &self.email)
            .field("validation_error", &self.validation_error)
            .finish_non_exhaustive()
    }
}
