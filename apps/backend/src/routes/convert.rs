//! Conversion endpoints

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use deck_convert::{CSV_CONTENT_TYPE, EXPORT_FILE_NAME};

use crate::error::{ApiError, Result};
use crate::models::{ConvertForm, ConvertResponse};
use crate::services::convert::{convert_form, export_form};
use crate::AppState;

/// POST /api/convert
/// Returns the parsed cards as a table
pub async fn convert(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ConvertForm>, JsonRejection>,
) -> Result<Json<ConvertResponse>> {
    let Json(form) = payload.map_err(rejection_error)?;
    let cards = convert_form(&state.config, form)?;
    Ok(Json(ConvertResponse::new(cards)))
}

/// POST /api/convert/csv
/// Returns the parsed cards as a CSV download
pub async fn download(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ConvertForm>, JsonRejection>,
) -> Result<Response> {
    let Json(form) = payload.map_err(rejection_error)?;
    let csv = export_form(&state.config, form)?;

    let headers = [
        (header::CONTENT_TYPE, CSV_CONTENT_TYPE.to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", EXPORT_FILE_NAME),
        ),
    ];

    Ok((headers, csv).into_response())
}

/// Map a body rejection, keeping oversized bodies distinct from bad JSON.
fn rejection_error(rejection: JsonRejection) -> ApiError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::PayloadTooLarge(rejection.body_text())
    } else {
        ApiError::BadRequest(rejection.body_text())
    }
}
