//! Conversion service: input limits, validation, parsing and export.

use deck_convert::{to_csv, ConvertForm, Record};

use crate::config::ServerConfig;
use crate::error::{ApiError, Result};

/// Validate a submitted form and parse it into records.
pub fn convert_form(config: &ServerConfig, form: ConvertForm) -> Result<Vec<Record>> {
    check_input_size(config, &form.flashcards)?;

    let validated = form.validate().map_err(|errors| {
        tracing::debug!("Rejected conversion form: {}", errors);
        ApiError::from(errors)
    })?;

    let records = validated.convert();
    tracing::info!(
        "Converted {} bytes into {} cards",
        validated.flashcards().len(),
        records.len()
    );

    Ok(records)
}

/// Validate, parse and render the records as CSV.
pub fn export_form(config: &ServerConfig, form: ConvertForm) -> Result<String> {
    let records = convert_form(config, form)?;
    Ok(to_csv(&records)?)
}

fn check_input_size(config: &ServerConfig, flashcards: &str) -> Result<()> {
    if flashcards.len() > config.max_input_bytes {
        return Err(ApiError::PayloadTooLarge(format!(
            "flashcards is {} bytes, limit is {}",
            flashcards.len(),
            config.max_input_bytes
        )));
    }
    Ok(())
}
