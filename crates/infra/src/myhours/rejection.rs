//! Classification of MyHours insert rejections
//!
//! Compatibility shim against the provider's untyped error schema: a
//! 400-class insert rejection mentioning an archived project must be
//! tolerated, and the only signal is a substring in the free-text `message`
//! or in the `validationErrors` array. Keeping the match in one function
//! makes the shim easy to update when the provider changes its error shape.

use reqwest::StatusCode;
use serde::Deserialize;

const ARCHIVED_MARKER: &str = "archived project";

/// What a rejected insert turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertRejection {
    /// The target project is archived; the entry is skippable.
    ArchivedProject(String),
    /// Anything else; fatal for the submission.
    Other,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    validation_errors: Vec<ValidationMessage>,
}

#[derive(Debug, Deserialize)]
struct ValidationMessage {
    #[serde(default)]
    message: Option<String>,
}

/// Classify a failed insert response.
///
/// Only 4xx responses are candidates; a matching message wins whether it
/// sits in `message`, in `validationErrors`, or in a plain-text body.
#[must_use]
pub fn classify_insert_rejection(status: StatusCode, body: &str) -> InsertRejection {
    if !status.is_client_error() {
        return InsertRejection::Other;
    }

    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();

    if let Some(message) = parsed.message.as_deref().filter(|m| mentions_archived(m)) {
        return InsertRejection::ArchivedProject(message.to_string());
    }

    for validation in &parsed.validation_errors {
        if let Some(message) = validation.message.as_deref().filter(|m| mentions_archived(m)) {
            return InsertRejection::ArchivedProject(message.to_string());
        }
    }

    // Some error shapes are plain text
    if mentions_archived(body) {
        return InsertRejection::ArchivedProject(body.trim().to_string());
    }

    InsertRejection::Other
}

fn mentions_archived(text: &str) -> bool {
    text.to_lowercase().contains(ARCHIVED_MARKER)
}
