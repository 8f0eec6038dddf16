//! Core types for deck conversion.

use serde::{Deserialize, Serialize};

/// Fallback term delimiter for a custom selection with no value.
pub const DEFAULT_CUSTOM_TERM_DELIMITER: &str = " - ";

/// Fallback row delimiter for a custom selection with no value.
pub const DEFAULT_CUSTOM_ROW_DELIMITER: &str = "\n\n";

const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Trim whitespace and byte-order marks from both ends of pasted text.
pub fn trim_text(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK)
}

/// One parsed flashcard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub question: String,
    pub answer: String,
}

impl Record {
    /// Create a record, trimming both sides.
    pub fn new(question: &str, answer: &str) -> Self {
        Self {
            question: trim_text(question).to_string(),
            answer: trim_text(answer).to_string(),
        }
    }
}

/// Separator between a question and its answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermDelimiter {
    Tab,
    Comma,
    Custom(String),
}

impl Default for TermDelimiter {
    fn default() -> Self {
        Self::Tab
    }
}

impl TermDelimiter {
    /// The literal string to split on.
    pub fn resolve(&self) -> &str {
        match self {
            Self::Tab => "\t",
            Self::Comma => ",",
            Self::Custom(s) if s.is_empty() => DEFAULT_CUSTOM_TERM_DELIMITER,
            Self::Custom(s) => s.as_str(),
        }
    }
}

/// Separator between rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowDelimiter {
    Newline,
    Semicolon,
    Custom(String),
}

impl Default for RowDelimiter {
    fn default() -> Self {
        Self::Newline
    }
}

impl RowDelimiter {
    /// The literal string to split on.
    pub fn resolve(&self) -> &str {
        match self {
            Self::Newline => "\n",
            Self::Semicolon => ";",
            Self::Custom(s) if s.is_empty() => DEFAULT_CUSTOM_ROW_DELIMITER,
            Self::Custom(s) => s.as_str(),
        }
    }
}

/// Delimiter configuration for one parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Delimiters {
    pub term: TermDelimiter,
    pub row: RowDelimiter,
}

impl Delimiters {
    pub fn new(term: TermDelimiter, row: RowDelimiter) -> Self {
        Self { term, row }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_delimiters_resolve() {
        assert_eq!(TermDelimiter::Tab.resolve(), "\t");
        assert_eq!(TermDelimiter::Comma.resolve(), ",");
        assert_eq!(RowDelimiter::Newline.resolve(), "\n");
        assert_eq!(RowDelimiter::Semicolon.resolve(), ";");
    }

    #[test]
    fn custom_delimiters_resolve_to_value() {
        assert_eq!(TermDelimiter::Custom("::".into()).resolve(), "::");
        assert_eq!(RowDelimiter::Custom("|".into()).resolve(), "|");
    }

    #[test]
    fn empty_custom_falls_back() {
        assert_eq!(TermDelimiter::Custom(String::new()).resolve(), " - ");
        assert_eq!(RowDelimiter::Custom(String::new()).resolve(), "\n\n");
    }

    #[test]
    fn whitespace_custom_is_kept() {
        assert_eq!(TermDelimiter::Custom(" ".into()).resolve(), " ");
    }

    #[test]
    fn defaults_are_tab_and_newline() {
        let delimiters = Delimiters::default();
        assert_eq!(delimiters.term, TermDelimiter::Tab);
        assert_eq!(delimiters.row, RowDelimiter::Newline);
    }

    #[test]
    fn trim_text_strips_byte_order_mark() {
        assert_eq!(trim_text("\u{FEFF} cat\t"), "cat");
        assert_eq!(trim_text("\u{FEFF}"), "");
        assert_eq!(trim_text("a\u{FEFF}b"), "a\u{FEFF}b");
    }

    #[test]
    fn record_new_trims() {
        let record = Record::new("  cat ", "\tmeow\n");
        assert_eq!(record.question, "cat");
        assert_eq!(record.answer, "meow");
    }
}
