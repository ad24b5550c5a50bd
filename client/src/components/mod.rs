//! UI components for the survey page.

pub mod assessment_form;
pub mod results_panel;
pub mod theme_toggle;
