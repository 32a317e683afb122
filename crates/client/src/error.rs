//! Client error taxonomy.

use thiserror::Error;

/// Maximum length of a response body preserved in a status error.
pub const ERROR_BODY_LIMIT: usize = 512;

/// Errors surfaced by the data-access layer.
///
/// Resource services convert `Network`, `Status`, `OfflineWrite` and
/// `Decode` into fallback-data successes; `RefreshFailed` always propagates
/// so the UI can prompt for login, and `Fallback` is the terminal
/// "both tiers failed" condition.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Network failure: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Session refresh failed")]
    RefreshFailed,

    #[error("Write not supported in local mode: {path}")]
    OfflineWrite { path: String },

    #[error("Response decode failed: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Fallback data unavailable: {0}")]
    Fallback(String),
}

impl ClientError {
    /// Builds a status error, truncating the preserved body.
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        let mut body = body.into();
        if body.len() > ERROR_BODY_LIMIT {
            let mut end = ERROR_BODY_LIMIT;
            while !body.is_char_boundary(end) {
                end -= 1;
            }
            body.truncate(end);
        }
        ClientError::Status { status, body }
    }

    /// True for the auth failure that must reach the UI untouched.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, ClientError::RefreshFailed)
    }
}

impl From<validator::ValidationErrors> for ClientError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let details: Vec<String> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| {
                    let message = e
                        .message
                        .clone()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string());
                    format!("{}: {}", field, message)
                })
            })
            .collect();
        ClientError::Validation(details.join("; "))
    }
}
