//! Test fixtures and factory functions for creating test data.

use serde_json::{json, Value};

/// Generate tab-separated flashcard text with a number of rows.
///
/// # Arguments
/// * `num_cards` - Number of rows to generate
/// * `row_separator` - String placed between rows
pub fn sample_cards(num_cards: usize, row_separator: &str) -> String {
    (0..num_cards)
        .map(|i| format!("Term {}\tDefinition {}", i + 1, i + 1))
        .collect::<Vec<_>>()
        .join(row_separator)
}

/// Form body with the default separators (tab, newline).
pub fn default_form(flashcards: &str) -> Value {
    json!({ "flashcards": flashcards })
}

/// Form body with explicit selectors and optional custom values.
pub fn form(
    flashcards: &str,
    term_separator: &str,
    custom_term_separator: Option<&str>,
    row_separator: &str,
    custom_row_separator: Option<&str>,
) -> Value {
    json!({
        "flashcards": flashcards,
        "term_separator": term_separator,
        "custom_term_separator": custom_term_separator,
        "row_separator": row_separator,
        "custom_row_separator": custom_row_separator,
    })
}
