//! Results region: adjusted response list and user group.
//!
//! All server-provided strings are rendered as text nodes.

#[cfg(test)]
#[path = "results_panel_test.rs"]
mod results_panel_test;

use leptos::prelude::*;

use crate::net::assessment::ResultsView;
use crate::state::results::{RenderedResult, ResultsState};

/// [`ResultsView`] backed by the shared results signal.
#[derive(Clone, Copy)]
pub struct SignalResultsView {
    pub results: RwSignal<ResultsState>,
    pub section: NodeRef<leptos::html::Section>,
}

impl ResultsView for SignalResultsView {
    fn show(&self, rendered: RenderedResult) {
        self.results.update(|r| r.show(rendered));

        // Scroll on the next frame, after the `hidden` class is gone.
        #[cfg(feature = "hydrate")]
        {
            let section = self.section;
            request_animation_frame(move || {
                if let Some(el) = section.get_untracked() {
                    let options = web_sys::ScrollIntoViewOptions::new();
                    options.set_behavior(web_sys::ScrollBehavior::Smooth);
                    el.scroll_into_view_with_scroll_into_view_options(&options);
                }
            });
        }
    }

    fn alert(&self, message: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(message);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = message;
        }
    }
}

#[component]
pub fn ResultsPanel(section_ref: NodeRef<leptos::html::Section>) -> impl IntoView {
    let results = expect_context::<RwSignal<ResultsState>>();

    let items = move || {
        results
            .get()
            .rendered
            .map(|r| r.items)
            .unwrap_or_default()
            .into_iter()
            .map(|item| {
                view! {
                    <li>
                        <strong>{format!("{}:", item.label)}</strong>
                        " "
                        {item.value}
                    </li>
                }
            })
            .collect_view()
    };

    let group = move || {
        results.get().rendered.map(|r| {
            view! {
                <p>
                    <strong>{format!("{}:", r.group_name)}</strong>
                    " "
                    {r.group_description}
                </p>
            }
        })
    };

    view! {
        <section id="results" class="results" class:hidden=move || !results.get().visible node_ref=section_ref>
            <h2>"Your Results"</h2>
            <div class="results__panel">
                <h3>"AI Response Style"</h3>
                <div id="ai-response">
                    <ul>{items}</ul>
                </div>
            </div>
            <div class="results__panel">
                <h3>"User Group"</h3>
                <div id="user-group">{group}</div>
            </div>
        </section>
    }
}
