//! Flashcard text conversion shared by the backend.
//!
//! Provides:
//! - Delimited-text parser for pasted flashcards
//! - Form validation for delimiter selections
//! - CSV export of parsed records
//! - Share sheet / clipboard fallback chain
//! - Shared types (Record, Delimiters, etc.)

pub mod error;
pub mod export;
pub mod form;
pub mod parser;
pub mod share;
pub mod types;

pub use error::{ExportError, FieldError, Result, ShareError, ValidationErrors};
pub use export::{to_csv, write_csv, CSV_CONTENT_TYPE, EXPORT_FILE_NAME};
pub use form::{convert, ConvertForm, RowSelector, TermSelector, ValidatedForm};
pub use parser::{parse, split_record, split_rows};
pub use share::{share_link, Clipboard, ShareOutcome, ShareSheet};
pub use types::{trim_text, Delimiters, Record, RowDelimiter, TermDelimiter};
