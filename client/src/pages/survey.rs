//! Survey page: theme toggle, assessment form, and results.
//!
//! ARCHITECTURE
//! ============
//! The page builds one [`AssessmentFormController`] from the browser
//! transport and the results signal, then hands it to the form. The theme
//! toggle shares nothing with the form.

use leptos::prelude::*;

use crate::components::assessment_form::AssessmentForm;
use crate::components::results_panel::{ResultsPanel, SignalResultsView};
use crate::components::theme_toggle::ThemeToggle;
use crate::net::api::GlooTransport;
use crate::net::assessment::AssessmentFormController;
use crate::state::results::ResultsState;

#[component]
pub fn SurveyPage() -> impl IntoView {
    let results = expect_context::<RwSignal<ResultsState>>();
    let section_ref = NodeRef::<leptos::html::Section>::new();
    let controller = AssessmentFormController::new(GlooTransport, SignalResultsView { results, section: section_ref });

    view! {
        <header class="survey-header">
            <h1>"Bias Assessment"</h1>
            <ThemeToggle/>
        </header>
        <main class="survey">
            <p class="survey__intro">
                "Rate yourself from 0 to 100 on each dimension to see how an assistant would adapt its answers to you."
            </p>
            <AssessmentForm controller=controller/>
            <ResultsPanel section_ref=section_ref/>
        </main>
    }
}
