//! API request and response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Re-export shared types from deck-convert
pub use deck_convert::{ConvertForm, Record, RowSelector, TermSelector};

/// Parsed table returned by the JSON convert endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertResponse {
    pub cards: Vec<Record>,
    pub count: usize,
    pub converted_at: DateTime<Utc>,
}

impl ConvertResponse {
    pub fn new(cards: Vec<Record>) -> Self {
        Self {
            count: cards.len(),
            cards,
            converted_at: Utc::now(),
        }
    }
}

/// Link and title a client passes to its share sheet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareLinkResponse {
    pub url: String,
    pub title: String,
}
