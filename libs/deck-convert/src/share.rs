//! Link sharing with a clipboard fallback.
//!
//! Sharing tries the platform share sheet first. If the sheet is missing,
//! refuses the link, or fails, the link is copied to the clipboard instead.
//! A share the user cancels is final and nothing is copied.

use crate::error::ShareError;
use serde::{Deserialize, Serialize};

/// Native share capability.
pub trait ShareSheet {
    /// Whether the sheet can share this link at all.
    fn can_share(&self, url: &str) -> bool;

    fn share(&self, url: &str) -> Result<(), ShareError>;
}

/// Clipboard write capability.
pub trait Clipboard {
    fn write_text(&self, text: &str) -> Result<(), ShareError>;
}

/// How a share request ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShareOutcome {
    Shared,
    Cancelled,
    Copied,
}

/// Share `url` through the share sheet, falling back to the clipboard.
pub fn share_link(
    url: &str,
    share_sheet: Option<&dyn ShareSheet>,
    clipboard: &dyn Clipboard,
) -> Result<ShareOutcome, ShareError> {
    if let Some(sheet) = share_sheet.filter(|sheet| sheet.can_share(url)) {
        match sheet.share(url) {
            Ok(()) => return Ok(ShareOutcome::Shared),
            Err(ShareError::Cancelled) => return Ok(ShareOutcome::Cancelled),
            Err(_) => {}
        }
    }

    clipboard.write_text(url)?;
    Ok(ShareOutcome::Copied)
}
