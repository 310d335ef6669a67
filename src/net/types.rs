//! Wire types for the answering backend.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body of `POST /ask`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AskRequest {
    pub video_id: String,
    /// Playback position in seconds.
    pub current_time: f64,
    pub question: String,
}

/// Successful `POST /ask` reply. Only `response` is rendered; the rest is diagnostics.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AskResponse {
    pub response: String,
    #[serde(default)]
    pub video_id: Option<String>,
    #[serde(default)]
    pub timestamp: Option<f64>,
    #[serde(default)]
    pub analysis: Option<AnswerAnalysis>,
}

/// How the backend classified the question.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct AnswerAnalysis {
    #[serde(default)]
    pub question_type: Option<String>,
    #[serde(default)]
    pub strategy: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
}

/// Error body the backend sends with 4xx/5xx replies.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct BackendErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
}

impl BackendErrorBody {
    /// One-line summary for logs.
    #[must_use]
    pub fn summary(&self) -> Option<String> {
        match (&self.error, &self.details) {
            (Some(error), Some(details)) => Some(format!("{error}: {details}")),
            (Some(error), None) => Some(error.clone()),
            (None, Some(details)) => Some(details.clone()),
            (None, None) => None,
        }
    }
}

/// Any failure of a backend call. Logged, never shown to the viewer.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RelayError {
    #[error("request could not be encoded: {0}")]
    Encode(String),
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("backend returned status {status}{}", detail_suffix(.detail))]
    Status { status: u16, detail: Option<String> },
    #[error("response could not be decoded: {0}")]
    Decode(String),
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail.as_deref().map(|d| format!(" ({d})")).unwrap_or_default()
}
