//! Contact form validation and mock submission.
//!
//! SYSTEM CONTEXT
//! ==============
//! The form's native submit is intercepted by the page binding and routed to
//! [`ContactForm::submit`]. Submission never touches the network: a valid
//! form builds a [`ContactPayload`], shows a sending status, and a scheduled
//! completion reports success and clears the form.
//!
//! ```text
//! Idle -> Validating -> Invalid -> Idle
//!                    -> Submitting -> Submitted -> Idle
//! ```
//!
//! Overlapping submissions are not debounced. Each pending send completes on
//! its own timer.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use serde::Serialize;

use crate::app::PageContext;
use crate::util::validate::{FieldValidators, ValidationReport};
use crate::view::{FormSnapshot, Scheduler, TextSlot, View};

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

pub const STATUS_INVALID: &str = "Please fix the errors above.";
pub const STATUS_SENDING: &str = "Sending...";
pub const STATUS_SENT: &str = "Thanks — your message was sent (mock).";

/// Resting state of the form between user actions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    /// At least one mock send is waiting on its delay.
    Submitting,
}

/// Message assembled from a fully valid form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    name: String,
    email: String,
    message: String,
}

impl ContactPayload {
    /// Build a payload from `snapshot`, only if `report` has no errors.
    pub fn from_valid(snapshot: &FormSnapshot, report: &ValidationReport) -> Option<Self> {
        if !report.is_valid() {
            return None;
        }
        Some(Self {
            name: snapshot.get("name").to_owned(),
            email: snapshot.get("email").to_owned(),
            message: snapshot.get("message").to_owned(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Result of one submit attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// At least one field failed; errors are on screen and nothing was sent.
    Rejected(ValidationReport),
    /// All fields passed; the mock send is scheduled.
    Sending(ContactPayload),
}

pub struct ContactForm<V: View> {
    view: Rc<V>,
    scheduler: Rc<dyn Scheduler>,
    validators: FieldValidators,
    delay: Duration,
    in_flight: Rc<Cell<u32>>,
}

impl<V: View + 'static> ContactForm<V> {
    pub fn new(ctx: &PageContext<V>) -> Self {
        Self {
            view: Rc::clone(&ctx.view),
            scheduler: Rc::clone(&ctx.scheduler),
            validators: FieldValidators::contact(),
            delay: Duration::from_millis(u64::from(ctx.config.submit_delay_ms)),
            in_flight: Rc::new(Cell::new(0)),
        }
    }

    pub fn phase(&self) -> FormPhase {
        if self.in_flight.get() > 0 { FormPhase::Submitting } else { FormPhase::Idle }
    }

    /// Validate the current form and, if every field passes, start a mock send.
    pub fn submit(&self) -> SubmitOutcome {
        self.set_status("");

        let snapshot = self.view.form_snapshot(&self.validators.fields());
        let report = self.validators.validate(&snapshot);
        for (field, result) in report.results() {
            if let Some(slot) = self.view.error_slot(field) {
                slot.set_text(result.err().unwrap_or(""));
            }
        }

        let Some(payload) = ContactPayload::from_valid(&snapshot, &report) else {
            log::debug!("contact form rejected: {:?}", report.errors());
            self.set_status(STATUS_INVALID);
            return SubmitOutcome::Rejected(report);
        };

        self.set_status(STATUS_SENDING);
        match serde_json::to_string(&payload) {
            Ok(json) => log::debug!("mock submit payload: {json}"),
            Err(e) => log::debug!("mock submit payload not serializable: {e}"),
        }
        self.schedule_completion();
        SubmitOutcome::Sending(payload)
    }

    fn schedule_completion(&self) {
        self.in_flight.set(self.in_flight.get() + 1);
        let view = Rc::clone(&self.view);
        let in_flight = Rc::clone(&self.in_flight);
        self.scheduler.schedule(
            self.delay,
            Box::new(move || {
                if let Some(slot) = view.status_slot() {
                    slot.set_text(STATUS_SENT);
                }
                view.reset_form();
                in_flight.set(in_flight.get().saturating_sub(1));
                log::info!("mock contact submission sent");
            }),
        );
    }

    fn set_status(&self, text: &str) {
        if let Some(slot) = self.view.status_slot() {
            slot.set_text(text);
        }
    }
}
