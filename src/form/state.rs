//! Form state

use crate::error::SubmitError;
use crate::model::FieldErrors;
use crate::model::FieldName;

/// Where the current submission stands.
///
/// A single tagged variant instead of separate submitting/success/error
/// flags, so states like "succeeded and failed at once" cannot exist. The
/// failure message lives inside [`SubmissionStatus::Failed`], which means it
/// is present exactly in the failed state and starting a new submission
/// clears it by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    /// No submission has started, or the last one was cleaned up.
    #[default]
    Idle,
    /// A create call is in flight. The view must disable the submit
    /// affordance while this is the status.
    Submitting,
    /// The last submission stored the product.
    Succeeded,
    /// The last submission failed.
    Failed(SubmitError),
}

/// The state one form instance exposes to its view.
///
/// Created once per form mount and mutated only through the
/// [`FormController`](crate::form::FormController); the transition methods
/// are crate-private to keep it that way.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    status: SubmissionStatus,
    errors: FieldErrors,
}

impl FormState {
    /// Creates a fresh idle state with no field errors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current submission status.
    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    /// Returns `true` while a create call is in flight.
    pub fn is_submitting(&self) -> bool {
        matches!(self.status, SubmissionStatus::Submitting)
    }

    /// Returns `true` when the last submission succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self.status, SubmissionStatus::Succeeded)
    }

    /// Returns the user-facing failure message, present only when failed.
    pub fn error_message(&self) -> Option<String> {
        match &self.status {
            SubmissionStatus::Failed(error) => Some(error.to_string()),
            _ => None,
        }
    }

    /// Returns the full validation error map.
    pub fn field_errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Returns the validation error for one field, if any.
    pub fn field_error(&self, field: FieldName) -> Option<&str> {
        self.errors.get(field)
    }

    /// Replaces the error entry for one field.
    pub(crate) fn set_field_error(&mut self, field: FieldName, message: Option<String>) {
        self.errors.set(field, message);
    }

    /// Replaces the whole validation error map.
    pub(crate) fn set_field_errors(&mut self, errors: FieldErrors) {
        self.errors = errors;
    }

    /// Marks a submission as started, discarding any previous outcome.
    pub(crate) fn begin_submit(&mut self) {
        self.status = SubmissionStatus::Submitting;
    }

    /// Records a successful outcome.
    pub(crate) fn mark_success(&mut self) {
        self.status = SubmissionStatus::Succeeded;
    }

    /// Records a failed outcome.
    pub(crate) fn mark_failure(&mut self, error: SubmitError) {
        self.status = SubmissionStatus::Failed(error);
    }

    /// Closes out a submission.
    ///
    /// A resolved outcome is left in place; only a still-`Submitting` status
    /// falls back to `Idle`. Runs as the unconditional last step of every
    /// submission path, so the in-flight status can never leak.
    pub(crate) fn end_submit(&mut self) {
        if self.is_submitting() {
            self.status = SubmissionStatus::Idle;
        }
    }
}
