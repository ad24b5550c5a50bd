use super::*;

fn parse(raw: &str) -> AssessmentResult {
    serde_json::from_str(raw).expect("valid result")
}

#[test]
fn results_state_starts_hidden() {
    let state = ResultsState::default();
    assert!(!state.visible);
    assert!(state.rendered.is_none());
}

#[test]
fn render_single_entry_and_group() {
    let result = parse(
        r#"{"adjusted_response": {"tone": "neutral"},
            "user_group": {"name": "Skeptic", "description": "Questions claims."}}"#,
    );
    let rendered = render(&result);
    assert_eq!(rendered.items, vec![ResponseItem { label: "Tone".to_owned(), value: "neutral".to_owned() }]);
    assert_eq!(rendered.group_name, "Skeptic");
    assert_eq!(rendered.group_description, "Questions claims.");
}

#[test]
fn render_keeps_received_order() {
    let result = parse(
        r#"{"adjusted_response": {"tone": "t", "deception_usage": "d", "format": "f"},
            "user_group": {"name": "n", "description": "d"}}"#,
    );
    let labels: Vec<String> = render(&result).items.into_iter().map(|item| item.label).collect();
    assert_eq!(labels, ["Tone", "Deception usage", "Format"]);
}

#[test]
fn render_leaves_markup_as_plain_text() {
    let result = parse(
        r#"{"adjusted_response": {"tone": "<b>bold</b>"},
            "user_group": {"name": "<script>x</script>", "description": "&amp;"}}"#,
    );
    let rendered = render(&result);
    assert_eq!(rendered.items[0].value, "<b>bold</b>");
    assert_eq!(rendered.group_name, "<script>x</script>");
    assert_eq!(rendered.group_description, "&amp;");
}

#[test]
fn render_non_string_values_as_json_text() {
    let result = parse(
        r#"{"adjusted_response": {"score": 42, "flag": true, "nothing": null},
            "user_group": {"name": "n", "description": "d"}}"#,
    );
    let values: Vec<String> = render(&result).items.into_iter().map(|item| item.value).collect();
    assert_eq!(values, ["42", "true", "null"]);
}

#[test]
fn show_reveals_and_replaces() {
    let mut state = ResultsState::default();
    let first = RenderedResult { items: vec![], group_name: "A".to_owned(), group_description: String::new() };
    let second = RenderedResult { items: vec![], group_name: "B".to_owned(), group_description: String::new() };
    state.show(first);
    state.show(second.clone());
    assert!(state.visible);
    assert_eq!(state.rendered, Some(second));
}
