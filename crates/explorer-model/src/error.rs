//! Backend error payloads and their user-facing classification.
//!
//! Errors arrive from the clustering backend as a loose HTTP-ish shape
//! ([`ErrorPayload`]). They are classified exactly once, at the boundary
//! where the response is received, into the tagged [`ClusteringFailure`]
//! taxonomy; everything downstream dispatches on the tag.

use serde::Deserialize;
use thiserror::Error;

/// Errors produced while decoding engine responses.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("malformed engine response: {0}")]
    EngineResponse(#[from] serde_json::Error),
}

/// Error payload as received from the clustering backend.
///
/// Field names follow the wire format (`statusText`, `bodyParsed`); every
/// field is optional because the backend populates whichever subset applies.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorPayload {
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub status_text: Option<String>,
    #[serde(default)]
    pub body_parsed: Option<EngineErrorBody>,
}

/// Structured error body returned by the clustering engine itself.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EngineErrorBody {
    #[serde(default)]
    pub stacktrace: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Why a clustering request failed, as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClusteringFailure {
    /// The demo server refused the request (HTTP 429).
    #[error("clustering rate limit exceeded")]
    RateLimited,

    /// The request body exceeded the server's size limit (HTTP 413).
    #[error("clustering request too large")]
    RequestTooLarge,

    /// The engine threw; the first stacktrace line is the summary.
    #[error("clustering engine exception: {}", first_line(.stacktrace))]
    EngineException { stacktrace: String },

    /// The engine rejected the request with a plain message.
    #[error("clustering engine error: {message}")]
    EngineMessage { message: String },

    /// Anything else; only the raw HTTP status text is available.
    #[error("clustering failed: {status_text}")]
    Generic { status_text: String },
}

impl ClusteringFailure {
    /// Classify a backend payload.
    ///
    /// Dispatch is by priority: status codes first, then body shape, then
    /// the generic fallback. Unknown shapes always land in [`Self::Generic`]
    /// rather than failing.
    pub fn from_payload(payload: &ErrorPayload) -> Self {
        match payload.status {
            Some(429) => return Self::RateLimited,
            Some(413) => return Self::RequestTooLarge,
            _ => {}
        }

        if let Some(body) = &payload.body_parsed {
            if let Some(stacktrace) = &body.stacktrace {
                return Self::EngineException {
                    stacktrace: stacktrace.clone(),
                };
            }
            if let Some(message) = &body.message {
                return Self::EngineMessage {
                    message: message.clone(),
                };
            }
        }

        Self::Generic {
            status_text: payload.status_text.clone().unwrap_or_default(),
        }
    }

    /// First line of the stacktrace, for exception failures.
    pub fn exception_summary(&self) -> Option<&str> {
        match self {
            Self::EngineException { stacktrace } => Some(first_line(stacktrace)),
            _ => None,
        }
    }
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or("")
}
