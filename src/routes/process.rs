//! `POST /process` — score validation and assessment.
//!
//! ERROR HANDLING
//! ==============
//! Every rejection is a JSON `{"error": "..."}` body so the page can show the
//! server's message verbatim. Fields are checked in wire order and the first
//! failure wins.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::Value;
use survey::{AssessmentInput, ErrorBody, FIELD_NAMES};

use crate::services::scoring::Assessment;
use crate::state::AppState;

pub const MIN_SCORE: i64 = 0;
pub const MAX_SCORE: i64 = 100;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ProcessError {
    /// The body could not be read as JSON at all.
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },
    #[error("Request body must be a JSON object.")]
    NotAnObject,
    #[error("Missing field: {0}")]
    MissingField(&'static str),
    #[error("Invalid value for {0}. Must be an integer between 0 and 100.")]
    InvalidValue(&'static str),
}

impl ProcessError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Rejected { status, .. } => *status,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<JsonRejection> for ProcessError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Rejected { status: rejection.status(), message: rejection.body_text() }
    }
}

impl IntoResponse for ProcessError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorBody::new(self.to_string()))).into_response()
    }
}

/// Validate a decoded request body into scores.
///
/// # Errors
///
/// See [`ProcessError`].
pub fn validate_input(body: &Value) -> Result<AssessmentInput, ProcessError> {
    let object = body.as_object().ok_or(ProcessError::NotAnObject)?;

    let mut scores = [0_i64; 4];
    for (slot, field) in scores.iter_mut().zip(FIELD_NAMES) {
        let value = object.get(field).ok_or(ProcessError::MissingField(field))?;
        // `as_i64` is `None` for booleans, floats and strings.
        *slot = value
            .as_i64()
            .filter(|score| (MIN_SCORE..=MAX_SCORE).contains(score))
            .ok_or(ProcessError::InvalidValue(field))?;
    }

    let [cognitive_bias_awareness, persuasion_receptivity, deception_susceptibility, emotional_response_bias] = scores;
    Ok(AssessmentInput {
        cognitive_bias_awareness,
        persuasion_receptivity,
        deception_susceptibility,
        emotional_response_bias,
    })
}

/// `POST /process` — validate scores and return the adjusted response.
pub async fn process(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Assessment>, ProcessError> {
    let result = body.map_err(ProcessError::from).and_then(|Json(body)| validate_input(&body));
    let scores = match result {
        Ok(scores) => scores,
        Err(e) => {
            tracing::warn!(error = %e, status = %e.status(), "assessment rejected");
            return Err(e);
        }
    };

    let assessment = state.agent.assess(&scores);
    tracing::info!(
        agent = state.agent.name(),
        group = %assessment.user_group.name,
        cognitive_bias_awareness = scores.cognitive_bias_awareness,
        persuasion_receptivity = scores.persuasion_receptivity,
        deception_susceptibility = scores.deception_susceptibility,
        emotional_response_bias = scores.emotional_response_bias,
        "assessment processed"
    );
    Ok(Json(assessment))
}

#[cfg(test)]
#[path = "process_test.rs"]
mod tests;
