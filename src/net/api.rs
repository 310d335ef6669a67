//! HTTP client for the answering backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: stubs that report a transport failure, since there is no
//! browser `fetch` to call.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is folded into [`RelayError`]; status codes and the
//! backend's `{error, details}` body are kept for logging only.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;

use crate::config::WidgetConfig;
use crate::net::relay::AnswerBackend;
#[cfg(any(test, feature = "csr"))]
use crate::net::types::BackendErrorBody;
use crate::net::types::{AskRequest, AskResponse, RelayError};

/// Backend reached over HTTP at the configured base URL.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    ask_url: String,
    health_url: String,
}

impl HttpBackend {
    #[must_use]
    pub fn new(config: &WidgetConfig) -> Self {
        Self { ask_url: config.ask_url(), health_url: config.health_url() }
    }

    #[must_use]
    pub fn ask_url(&self) -> &str {
        &self.ask_url
    }

    /// `POST` the question and decode the answer.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError`] on transport failure, non-2xx status, or an
    /// undecodable body.
    pub async fn post_question(&self, request: &AskRequest) -> Result<AskResponse, RelayError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&self.ask_url)
                .json(request)
                .map_err(|e| RelayError::Encode(e.to_string()))?
                .send()
                .await
                .map_err(|e| RelayError::Transport(e.to_string()))?;
            if !resp.ok() {
                let body = resp.text().await.unwrap_or_default();
                return Err(status_error(resp.status(), &body));
            }
            resp.json::<AskResponse>()
                .await
                .map_err(|e| RelayError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(RelayError::Transport("not available outside the browser".to_owned()))
        }
    }

    /// Probe `GET /health`. Diagnostics only.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError`] when the backend is unreachable or unhealthy.
    pub async fn check_health(&self) -> Result<(), RelayError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(&self.health_url)
                .send()
                .await
                .map_err(|e| RelayError::Transport(e.to_string()))?;
            if resp.ok() {
                Ok(())
            } else {
                let body = resp.text().await.unwrap_or_default();
                Err(status_error(resp.status(), &body))
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = &self.health_url;
            Err(RelayError::Transport("not available outside the browser".to_owned()))
        }
    }
}

impl AnswerBackend for HttpBackend {
    fn ask(&self, request: &AskRequest) -> impl Future<Output = Result<AskResponse, RelayError>> {
        self.post_question(request)
    }
}

/// Build a status error, keeping the backend's own explanation when it sent one.
#[cfg(any(test, feature = "csr"))]
fn status_error(status: u16, body: &str) -> RelayError {
    let detail = serde_json::from_str::<BackendErrorBody>(body)
        .ok()
        .and_then(|b| b.summary())
        .or_else(|| {
            let trimmed = body.trim();
            (!trimmed.is_empty()).then(|| trimmed.chars().take(200).collect())
        });
    RelayError::Status { status, detail }
}
