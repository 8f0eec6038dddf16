//! Delimited-text parser for pasted flashcards.
//!
//! # Format
//! ```text
//! term 1<TAB>definition 1
//! term 2<TAB>definition 2
//! ```
//!
//! Rows are separated by the row delimiter and each row is split on the
//! first occurrence of the term delimiter. Both delimiters are literal
//! strings. Rows without a term delimiter keep an empty answer; blank rows
//! are skipped.

use crate::types::{trim_text, Delimiters, Record};

/// Parse pasted text into records.
pub fn parse(content: &str, delimiters: &Delimiters) -> Vec<Record> {
    let term = delimiters.term.resolve();

    split_rows(trim_text(content), delimiters.row.resolve())
        .map(|row| split_record(row, term))
        .collect()
}

/// Split text into its non-blank rows, untrimmed.
pub fn split_rows<'a>(content: &'a str, row_delimiter: &'a str) -> impl Iterator<Item = &'a str> {
    content
        .split(row_delimiter)
        .filter(|row| !trim_text(row).is_empty())
}

/// Split one row into a record on the first term delimiter.
pub fn split_record(row: &str, term_delimiter: &str) -> Record {
    match row.split_once(term_delimiter) {
        Some((question, answer)) => Record::new(question, answer),
        None => Record::new(row, ""),
    }
}
