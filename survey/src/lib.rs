//! Shared assessment wire model for the `/process` exchange.
//!
//! This crate owns the JSON shapes used by both the server and the client:
//! the four-score request, the adjusted-response result, and the error body.
//! It also owns form-field parsing so both sides agree on what a valid score
//! looks like before it reaches the wire.

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Path of the assessment endpoint.
pub const PROCESS_ENDPOINT: &str = "/process";

pub const COGNITIVE_BIAS_AWARENESS: &str = "cognitive_bias_awareness";
pub const PERSUASION_RECEPTIVITY: &str = "persuasion_receptivity";
pub const DECEPTION_SUSCEPTIBILITY: &str = "deception_susceptibility";
pub const EMOTIONAL_RESPONSE_BIAS: &str = "emotional_response_bias";

/// Required score fields, in wire order.
pub const FIELD_NAMES: [&str; 4] =
    [COGNITIVE_BIAS_AWARENESS, PERSUASION_RECEPTIVITY, DECEPTION_SUSCEPTIBILITY, EMOTIONAL_RESPONSE_BIAS];

/// Error returned when a form field cannot become a score.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// The form did not carry the field at all.
    #[error("Missing field: {0}")]
    Missing(&'static str),
    /// The field was present but did not parse as an integer.
    #[error("Invalid value for {field}: {value:?}")]
    Invalid { field: &'static str, value: String },
}

impl FieldError {
    /// Name of the offending field.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::Missing(field) | Self::Invalid { field, .. } => field,
        }
    }
}

/// The four self-reported scores sent to `/process`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentInput {
    pub cognitive_bias_awareness: i64,
    pub persuasion_receptivity: i64,
    pub deception_susceptibility: i64,
    pub emotional_response_bias: i64,
}

impl AssessmentInput {
    /// Build an input by looking up each field through `get`.
    ///
    /// Fields are read in wire order and the first failure wins.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::Missing`] when `get` yields `None` and
    /// [`FieldError::Invalid`] when the text is not an integer.
    pub fn from_fields<F>(mut get: F) -> Result<Self, FieldError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut read = |field: &'static str| parse_field(field, get(field).as_deref());
        Ok(Self {
            cognitive_bias_awareness: read(COGNITIVE_BIAS_AWARENESS)?,
            persuasion_receptivity: read(PERSUASION_RECEPTIVITY)?,
            deception_susceptibility: read(DECEPTION_SUSCEPTIBILITY)?,
            emotional_response_bias: read(EMOTIONAL_RESPONSE_BIAS)?,
        })
    }
}

/// Parse one form field into an integer score.
///
/// Surrounding whitespace is ignored. Number inputs also hand over forms such
/// as `50.0` or `1e1`; those are accepted when they denote a whole number.
/// Range is not checked here; the server owns the `0..=100` rule.
///
/// # Errors
///
/// See [`AssessmentInput::from_fields`].
pub fn parse_field(field: &'static str, raw: Option<&str>) -> Result<i64, FieldError> {
    let raw = raw.ok_or(FieldError::Missing(field))?;
    let text = raw.trim();
    text.parse::<i64>()
        .ok()
        .or_else(|| whole_number(text))
        .ok_or_else(|| FieldError::Invalid { field, value: raw.to_owned() })
}

/// Decimal or exponent notation that lands exactly on an `i64`.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss, clippy::float_cmp)]
fn whole_number(text: &str) -> Option<i64> {
    let value = text.parse::<f64>().ok()?;
    // 2^63 is exact in f64; anything at or past it overflows i64.
    let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
    (value.is_finite() && value.fract() == 0.0 && in_range).then_some(value as i64)
}

/// Named classification returned alongside the adjusted response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserGroup {
    pub name: String,
    pub description: String,
}

/// Successful `/process` response body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResult {
    /// Response dimensions keyed by name, in the order the server sent them.
    pub adjusted_response: Map<String, Value>,
    pub user_group: UserGroup,
}

/// Error body returned with non-2xx statuses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorBody {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self { error: Some(message.into()) }
    }
}
