//! Conversion form and its validation.
//!
//! The form mirrors what a user submits: the pasted text, one selector per
//! delimiter and an optional custom value for each. Validation turns it into
//! a [`ValidatedForm`], the only input [`ValidatedForm::convert`] accepts.

use crate::error::{FieldError, ValidationErrors};
use crate::parser::parse;
use crate::types::{trim_text, Delimiters, Record, RowDelimiter, TermDelimiter};
use serde::{Deserialize, Serialize};

pub const FLASHCARDS_FIELD: &str = "flashcards";
pub const CUSTOM_TERM_FIELD: &str = "custom_term_separator";
pub const CUSTOM_ROW_FIELD: &str = "custom_row_separator";

const FLASHCARDS_REQUIRED: &str = "Please enter your flashcards";
const CUSTOM_TERM_EMPTY: &str = "Custom term separator cannot be empty";
const CUSTOM_ROW_EMPTY: &str = "Custom row separator cannot be empty";

/// Term separator choice as submitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TermSelector {
    #[default]
    Tab,
    Comma,
    Custom,
}

/// Row separator choice as submitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowSelector {
    #[default]
    Newline,
    Semicolon,
    Custom,
}

/// Unvalidated conversion request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertForm {
    pub flashcards: String,
    pub term_separator: TermSelector,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_term_separator: Option<String>,
    pub row_separator: RowSelector,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_row_separator: Option<String>,
}

impl ConvertForm {
    /// Create a form with default separators (tab, newline).
    pub fn new(flashcards: impl Into<String>) -> Self {
        Self {
            flashcards: flashcards.into(),
            ..Self::default()
        }
    }

    /// Select a custom term separator.
    pub fn with_custom_term(mut self, separator: impl Into<String>) -> Self {
        self.term_separator = TermSelector::Custom;
        self.custom_term_separator = Some(separator.into());
        self
    }

    /// Select a custom row separator.
    pub fn with_custom_row(mut self, separator: impl Into<String>) -> Self {
        self.row_separator = RowSelector::Custom;
        self.custom_row_separator = Some(separator.into());
        self
    }

    /// Check every field, reporting all failures at once.
    pub fn validate(self) -> Result<ValidatedForm, ValidationErrors> {
        let mut errors = Vec::new();

        if trim_text(&self.flashcards).is_empty() {
            errors.push(FieldError::new(FLASHCARDS_FIELD, FLASHCARDS_REQUIRED));
        }

        let term = match self.term_separator {
            TermSelector::Tab => TermDelimiter::Tab,
            TermSelector::Comma => TermDelimiter::Comma,
            TermSelector::Custom => {
                let value = self.custom_term_separator.unwrap_or_default();
                if value.is_empty() {
                    errors.push(FieldError::new(CUSTOM_TERM_FIELD, CUSTOM_TERM_EMPTY));
                }
                TermDelimiter::Custom(value)
            }
        };

        let row = match self.row_separator {
            RowSelector::Newline => RowDelimiter::Newline,
            RowSelector::Semicolon => RowDelimiter::Semicolon,
            RowSelector::Custom => {
                let value = self.custom_row_separator.unwrap_or_default();
                if value.is_empty() {
                    errors.push(FieldError::new(CUSTOM_ROW_FIELD, CUSTOM_ROW_EMPTY));
                }
                RowDelimiter::Custom(value)
            }
        };

        match ValidationErrors::from_errors(errors) {
            Some(errors) => Err(errors),
            None => Ok(ValidatedForm {
                flashcards: self.flashcards,
                delimiters: Delimiters::new(term, row),
            }),
        }
    }
}

/// A form that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedForm {
    flashcards: String,
    delimiters: Delimiters,
}

impl ValidatedForm {
    pub fn flashcards(&self) -> &str {
        &self.flashcards
    }

    pub fn delimiters(&self) -> &Delimiters {
        &self.delimiters
    }

    /// Parse the pasted text into records.
    pub fn convert(&self) -> Vec<Record> {
        parse(&self.flashcards, &self.delimiters)
    }
}

/// Validate and parse in one step.
pub fn convert(form: ConvertForm) -> Result<Vec<Record>, ValidationErrors> {
    Ok(form.validate()?.convert())
}
