//! Share link endpoint

use axum::{extract::State, Json};

use crate::models::ShareLinkResponse;
use crate::AppState;

/// Title shown alongside the shared link.
pub const SHARE_TITLE: &str = "Flashcard to CSV Converter";

/// GET /api/share
/// Returns the public link for a client's share sheet or clipboard
pub async fn link(State(state): State<AppState>) -> Json<ShareLinkResponse> {
    Json(ShareLinkResponse {
        url: state.config.public_url.clone(),
        title: SHARE_TITLE.to_string(),
    })
}
