//! Display labels for adjusted-response keys.

#[cfg(test)]
#[path = "label_test.rs"]
mod label_test;

/// Turn a response key into a list label.
///
/// The first character is uppercased and only the first underscore after it
/// becomes a space: `tone` → `Tone`, `a_b_c` → `A b_c`.
#[must_use]
pub fn format_label(key: &str) -> String {
    let mut chars = key.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut label: String = first.to_uppercase().collect();
    label.push_str(&chars.as_str().replacen('_', " ", 1));
    label
}
