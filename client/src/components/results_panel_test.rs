use super::*;
use crate::state::results::ResponseItem;

fn rendered(group: &str) -> RenderedResult {
    RenderedResult {
        items: vec![ResponseItem { label: "Tone".to_owned(), value: "neutral".to_owned() }],
        group_name: group.to_owned(),
        group_description: "Questions claims.".to_owned(),
    }
}

#[test]
fn show_reveals_region_and_replaces_result() {
    let owner = Owner::new();
    owner.with(|| {
        let view = SignalResultsView { results: RwSignal::new(ResultsState::default()), section: NodeRef::new() };

        view.show(rendered("Skeptic"));
        let state = view.results.get_untracked();
        assert!(state.visible);
        assert_eq!(state.rendered, Some(rendered("Skeptic")));

        view.show(rendered("Group D"));
        let state = view.results.get_untracked();
        assert!(state.visible);
        assert_eq!(state.rendered.map(|r| r.group_name).as_deref(), Some("Group D"));
    });
}

#[test]
fn alert_leaves_results_untouched() {
    let owner = Owner::new();
    owner.with(|| {
        let view = SignalResultsView { results: RwSignal::new(ResultsState::default()), section: NodeRef::new() };

        view.alert("An error occurred: Invalid input");

        assert_eq!(view.results.get_untracked(), ResultsState::default());
    });
}
