//! # Form controller
//!
//! [`SignupForm`] is a plain state container: the draft, which fields have been
//! touched, and whether a submission is in flight. It is mutated only through its
//! methods, and errors are always derived from the current draft rather than stored.
//!
//! Submitting is split in two so a reactive view can release its borrow while the
//! request is on the wire:
//!
//! ```text
//! begin_submit()  ── in flight ──▶ Err(InFlight), nothing changes
//!        ├─ invalid ──▶ Err(Invalid(errors)), every field touched
//!        │
//!        └─ valid ──▶ Ok(record) ──▶ Submitter::submit(record).await
//!                                          │
//!                              finish_submit(result) ──▶ SubmitOutcome
//! ```
//!
//! [`SignupForm::submit`] runs both halves back to back for callers that own the form
//! across the await.

use std::collections::HashSet;

use api::{RegistrationRecord, SignupResponse, SubmitError, Submitter};

use super::field::{Field, FormValues};
use super::rules::{self, ValidationErrors};

/// When the draft is cleared after a submission attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResetPolicy {
    /// Clear after every attempt that reached the submitter, successful or not.
    #[default]
    Always,
    /// Clear only when the server accepted the registration.
    OnSuccess,
}

/// Result of one submit.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The draft did not pass validation; nothing was sent.
    Invalid(ValidationErrors),
    /// The server accepted the registration.
    Sent(SignupResponse),
    /// The registration was sent but the submission failed.
    Failed(SubmitError),
    /// An earlier submission is still on the wire; nothing was sent.
    InFlight,
}

/// Why [`SignupForm::begin_submit`] did not hand out a record.
#[derive(Debug, Clone, PartialEq)]
pub enum NotStarted {
    Invalid(ValidationErrors),
    InFlight,
}

impl From<NotStarted> for SubmitOutcome {
    fn from(reason: NotStarted) -> Self {
        match reason {
            NotStarted::Invalid(errors) => SubmitOutcome::Invalid(errors),
            NotStarted::InFlight => SubmitOutcome::InFlight,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignupForm {
    values: FormValues,
    touched: HashSet<Field>,
    submitting: bool,
    policy: ResetPolicy,
}

impl SignupForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reset_policy(mut self, policy: ResetPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    /// Replace one field of the draft. Does not validate.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        *self.values.get_mut(field) = value.into();
    }

    /// Record that the user has left `field` at least once.
    pub fn mark_touched(&mut self, field: Field) {
        self.touched.insert(field);
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Errors for the current draft.
    pub fn errors(&self) -> ValidationErrors {
        rules::errors(&self.values)
    }

    /// The field's error, but only once the field has been touched.
    pub fn visible_error(&self, field: Field) -> Option<&'static str> {
        if !self.is_touched(field) {
            return None;
        }
        rules::check_field(field, self.values.get(field))
    }

    /// Clear the draft, the touched set and the in-flight flag.
    pub fn reset(&mut self) {
        self.values = FormValues::default();
        self.touched.clear();
        self.submitting = false;
    }

    /// Validate the whole draft. On failure every field becomes touched so all
    /// errors show; on success the form is marked as submitting. Refused while a
    /// previous submission has not been finished.
    pub fn begin_submit(&mut self) -> Result<RegistrationRecord, NotStarted> {
        if self.submitting {
            return Err(NotStarted::InFlight);
        }
        match rules::validate(&self.values) {
            Ok(record) => {
                self.submitting = true;
                tracing::debug!(
                    email = %record.email,
                    prefix = %record.prefix,
                    gender = %record.gender,
                    "Submitting signup"
                );
                Ok(record)
            }
            Err(errors) => {
                self.touched.extend(Field::ALL);
                Err(NotStarted::Invalid(errors))
            }
        }
    }

    /// Apply the submitter's result: log failures, reset per policy.
    pub fn finish_submit(&mut self, result: Result<SignupResponse, SubmitError>) -> SubmitOutcome {
        self.submitting = false;
        match result {
            Ok(response) => {
                tracing::info!("Signup accepted");
                self.reset();
                SubmitOutcome::Sent(response)
            }
            Err(e) => {
                tracing::error!("Signup failed: {}", e);
                if self.policy == ResetPolicy::Always {
                    self.reset();
                }
                SubmitOutcome::Failed(e)
            }
        }
    }

    /// Validate, send and reset in one go.
    pub async fn submit<S: Submitter>(&mut self, submitter: &S) -> SubmitOutcome {
        let record = match self.begin_submit() {
            Ok(record) => record,
            Err(reason) => return reason.into(),
        };
        let result = submitter.submit(&record).await;
        self.finish_submit(result)
    }
}
