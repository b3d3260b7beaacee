//! Submission controller

use log::debug;
use log::warn;

use super::FormEvent;
use super::FormState;
use crate::error::SubmitError;
use crate::model::FieldName;
use crate::model::FieldValues;
use crate::service::ProductService;
use crate::service::SaveOutcome;
use crate::validate;

/// Drives the form: validates fields, runs the create call, updates state.
///
/// One controller per form instance. It owns the [`FormState`] and the
/// last-seen field values; the view renders from the accessors and feeds
/// events in through [`handle`](FormController::handle) or the per-event
/// methods.
///
/// At most one submission is in flight at a time: `on_submit` borrows the
/// controller mutably for the whole round trip, so a second call cannot
/// start until the first resolves. The view contract additionally requires
/// disabling the submit affordance while
/// [`is_submitting`](FormState::is_submitting) is true.
#[derive(Debug)]
pub struct FormController<S> {
    service: S,
    state: FormState,
    values: FieldValues,
}

impl<S: ProductService> FormController<S> {
    /// Creates a controller around the given service.
    pub fn new(service: S) -> Self {
        Self {
            service,
            state: FormState::new(),
            values: FieldValues::default(),
        }
    }

    /// Returns the current form state.
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Returns the field values as last seen by the core.
    ///
    /// Empty after a successful submission; the view re-renders its inputs
    /// from here to pick up that reset.
    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    /// Dispatches a view event.
    pub async fn handle(&mut self, event: FormEvent) {
        match event {
            FormEvent::Blur { field, value } => self.on_blur(field, value),
            FormEvent::Submit { values } => self.on_submit(values).await,
        }
    }

    /// Validates a single field when focus leaves it.
    ///
    /// Synchronous; touches only that field's error entry, never the
    /// submission status, so it may interleave with an in-flight submission.
    pub fn on_blur(&mut self, field: FieldName, value: String) {
        let error = validate::validate(field, &value);
        self.values.set(field, value);
        self.state.set_field_error(field, error);
    }

    /// Runs a full submission round trip.
    ///
    /// Validation errors are displayed but do not gate the create call: the
    /// request is sent even when fields are empty, matching the form's
    /// established behavior.
    pub async fn on_submit(&mut self, values: FieldValues) {
        self.state.begin_submit();
        debug!("submit started");

        self.values = values;
        self.state.set_field_errors(validate::validate_all(&self.values));

        match self.service.save_product(&self.values).await {
            Ok(SaveOutcome::Created) => {
                debug!("product stored");
                self.state.mark_success();
                self.values.clear();
            }
            Ok(SaveOutcome::ServerError { status }) => {
                warn!("server error (status {})", status);
                self.state.mark_failure(SubmitError::Server);
            }
            Ok(SaveOutcome::InvalidRequest { message }) => {
                warn!("request rejected: {}", message);
                self.state.mark_failure(SubmitError::InvalidRequest(message));
            }
            Ok(SaveOutcome::Other { status }) => {
                warn!("unclassified response (status {})", status);
                self.state.mark_failure(SubmitError::Connection);
            }
            Err(error) => {
                warn!("create call failed: {}", error);
                self.state.mark_failure(SubmitError::Connection);
            }
        }

        // Unconditional: every path above ends here, resolved or not.
        self.state.end_submit();
    }
}
