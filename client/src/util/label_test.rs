use super::*;

#[test]
fn single_word_is_capitalized() {
    assert_eq!(format_label("tone"), "Tone");
    assert_eq!(format_label("format"), "Format");
}

#[test]
fn only_first_underscore_is_replaced() {
    assert_eq!(format_label("deception_usage"), "Deception usage");
    assert_eq!(format_label("persuasion_strategy"), "Persuasion strategy");
    assert_eq!(format_label("a_b_c"), "A b_c");
    assert_eq!(format_label("emotional_response_bias"), "Emotional response_bias");
}

#[test]
fn leading_underscore_is_kept_as_first_character() {
    assert_eq!(format_label("_a_b"), "_a b");
}

#[test]
fn empty_and_non_ascii_keys() {
    assert_eq!(format_label(""), "");
    assert_eq!(format_label("é_x"), "É x");
    assert_eq!(format_label("ßig"), "SSig");
}
