//! Assessment form with the four score inputs.
//!
//! SYSTEM CONTEXT
//! ==============
//! Native submission is suppressed; the submitted `FormData` is handed to the
//! page's [`AssessmentFormController`], which runs the exchange in a local
//! task so the UI stays responsive while the request is in flight.

use leptos::prelude::*;
use survey::{COGNITIVE_BIAS_AWARENESS, DECEPTION_SUSCEPTIBILITY, EMOTIONAL_RESPONSE_BIAS, PERSUASION_RECEPTIVITY};

use super::results_panel::SignalResultsView;
use crate::net::api::GlooTransport;
use crate::net::assessment::AssessmentFormController;

/// Input name and visible label for each score, in form order.
pub const SCORE_FIELDS: [(&str, &str); 4] = [
    (COGNITIVE_BIAS_AWARENESS, "Cognitive Bias Awareness"),
    (PERSUASION_RECEPTIVITY, "Persuasion Receptivity"),
    (DECEPTION_SUSCEPTIBILITY, "Deception Susceptibility"),
    (EMOTIONAL_RESPONSE_BIAS, "Emotional Response Bias"),
];

pub type PageController = AssessmentFormController<GlooTransport, SignalResultsView>;

#[component]
pub fn AssessmentForm(controller: PageController) -> impl IntoView {
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let Some(form) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlFormElement>().ok()) else {
                log::error!("submit event without a form target");
                return;
            };
            let form_data = match web_sys::FormData::new_with_form(&form) {
                Ok(data) => data,
                Err(e) => {
                    log::error!("failed to read form data: {e:?}");
                    return;
                }
            };
            let controller = controller.clone();
            leptos::task::spawn_local(async move {
                controller.submit(&form_data).await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &controller;
        }
    };

    view! {
        <form id="assessment-form" class="assessment-form" on:submit=on_submit>
            {SCORE_FIELDS
                .iter()
                .map(|(name, label)| {
                    view! {
                        <div class="assessment-form__field">
                            <label for=*name>{format!("{label} (0-100)")}</label>
                            <input type="number" id=*name name=*name min="0" max="100" step="1" required=true/>
                        </div>
                    }
                })
                .collect_view()}
            <button class="assessment-form__submit" type="submit">
                "Submit Assessment"
            </button>
        </form>
    }
}
