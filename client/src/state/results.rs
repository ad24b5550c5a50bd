//! Results region state and the response-to-view transformation.
//!
//! DESIGN
//! ======
//! `render` turns a server result into plain label/value strings. Components
//! insert those strings as text nodes, so nothing the server returns is ever
//! parsed as markup.

#[cfg(test)]
#[path = "results_test.rs"]
mod results_test;

use serde_json::Value;
use survey::AssessmentResult;

use crate::util::label::format_label;

/// One line of the adjusted response list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResponseItem {
    pub label: String,
    pub value: String,
}

/// Everything the results region displays for one response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedResult {
    /// Adjusted response entries, in the order the server sent them.
    pub items: Vec<ResponseItem>,
    pub group_name: String,
    pub group_description: String,
}

/// Results region: hidden until the first successful submission.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResultsState {
    pub visible: bool,
    pub rendered: Option<RenderedResult>,
}

impl ResultsState {
    /// Replace the displayed result and reveal the region.
    pub fn show(&mut self, rendered: RenderedResult) {
        self.rendered = Some(rendered);
        self.visible = true;
    }
}

#[must_use]
pub fn render(result: &AssessmentResult) -> RenderedResult {
    let items = result
        .adjusted_response
        .iter()
        .map(|(key, value)| ResponseItem { label: format_label(key), value: display_value(value) })
        .collect();

    RenderedResult {
        items,
        group_name: result.user_group.name.clone(),
        group_description: result.user_group.description.clone(),
    }
}

/// Strings render bare; anything else renders as its JSON text.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
