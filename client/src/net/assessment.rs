//! Assessment form controller: read, validate, post, render.
//!
//! SYSTEM CONTEXT
//! ==============
//! The form component hands each submit to [`AssessmentFormController`],
//! which owns the whole exchange with `/process`. The controller is built
//! from a [`Transport`] and a [`ResultsView`], so the same code drives the
//! browser page and in-memory tests.
//!
//! ERROR HANDLING
//! ==============
//! Invalid fields, non-2xx replies, transport failures and malformed bodies
//! all end the same way: one alert reading `An error occurred: <message>`
//! plus an error log line. Nothing is retried.

#[cfg(test)]
#[path = "assessment_test.rs"]
mod assessment_test;

use survey::{AssessmentInput, AssessmentResult, FieldError, PROCESS_ENDPOINT};

use super::api::{Transport, TransportError, interpret_reply};
use crate::state::results::{RenderedResult, render};
use crate::state::submission::SubmissionTracker;
use crate::util::form_fields::FormFields;

/// Why a submission did not render.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// A form field was missing or not an integer. No request was sent.
    #[error(transparent)]
    InvalidField(#[from] FieldError),
    /// Non-2xx reply; carries the server's message or the status text.
    #[error("{0}")]
    Server(String),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("Malformed response body: {0}")]
    MalformedBody(String),
    #[error("Could not encode request: {0}")]
    Encode(String),
}

impl SubmitError {
    /// Text shown in the blocking alert.
    #[must_use]
    pub fn alert_message(&self) -> String {
        format!("An error occurred: {self}")
    }
}

/// How one `submit` call ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Rendered,
    /// A newer submission was issued while this one was in flight.
    Stale,
    Failed(SubmitError),
}

/// DOM seam for the results region and user alerts.
pub trait ResultsView {
    /// Display a result, reveal the region, and bring it into view.
    fn show(&self, rendered: RenderedResult);
    /// Show a blocking message to the user.
    fn alert(&self, message: &str);
}

#[derive(Clone)]
pub struct AssessmentFormController<T, V> {
    transport: T,
    view: V,
    tracker: SubmissionTracker,
}

impl<T: Transport, V: ResultsView> AssessmentFormController<T, V> {
    pub fn new(transport: T, view: V) -> Self {
        Self::with_tracker(transport, view, SubmissionTracker::new())
    }

    pub fn with_tracker(transport: T, view: V, tracker: SubmissionTracker) -> Self {
        Self { transport, view, tracker }
    }

    /// Handle one form submission.
    ///
    /// Fields are read before the first await, so the caller may drop or
    /// reset the form as soon as this future is created and polled once.
    pub async fn submit<F: FormFields + ?Sized>(&self, form: &F) -> SubmitOutcome {
        let input = match AssessmentInput::from_fields(|name| form.field(name)) {
            Ok(input) => input,
            Err(e) => {
                log::warn!("rejected form field {}", e.field());
                return self.fail(e.into());
            }
        };

        let token = self.tracker.issue();
        let result = self.exchange(&input).await;
        if !self.tracker.is_current(token) {
            log::debug!("discarding stale assessment response {token:?}");
            return SubmitOutcome::Stale;
        }

        match result {
            Ok(result) => {
                self.view.show(render(&result));
                SubmitOutcome::Rendered
            }
            Err(e) => self.fail(e),
        }
    }

    async fn exchange(&self, input: &AssessmentInput) -> Result<AssessmentResult, SubmitError> {
        let body = serde_json::to_string(input).map_err(|e| SubmitError::Encode(e.to_string()))?;
        let reply = self.transport.post_json(PROCESS_ENDPOINT, &body).await?;
        interpret_reply(&reply)
    }

    fn fail(&self, error: SubmitError) -> SubmitOutcome {
        log::error!("assessment submission failed: {error:?}");
        self.view.alert(&error.alert_message());
        SubmitOutcome::Failed(error)
    }
}
