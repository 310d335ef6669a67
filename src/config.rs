//! Widget configuration.
//!
//! The content script has no runtime environment, so everything here is
//! either a compiled-in default or a build-time override. The backend base
//! URL may be set with `VIDEO_QA_BACKEND_URL` when the wasm bundle is built.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::consts::{
    DEFAULT_ASK_PATH, DEFAULT_BACKEND_BASE_URL, DEFAULT_HEALTH_PATH, DEFAULT_INSERT_SETTLE_DELAY_MS,
    DEFAULT_INSERT_TIMEOUT_MS, DEFAULT_NAVIGATION_DEBOUNCE_MS,
};

/// Build-time override for the backend base URL.
const BACKEND_URL_OVERRIDE: Option<&str> = option_env!("VIDEO_QA_BACKEND_URL");

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid backend base url {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("endpoint path must start with '/': {0:?}")]
    InvalidPath(String),
    #[error("{name} must be greater than zero")]
    ZeroDuration { name: &'static str },
}

/// What to do with an answer that arrives after the viewer moved to another video.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StaleResponsePolicy {
    /// Drop the answer; it belongs to a conversation that no longer exists.
    #[default]
    Discard,
    /// Append the answer to whatever conversation is current.
    Render,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    pub backend_base_url: String,
    pub ask_path: String,
    pub health_path: String,
    pub insert_timeout_ms: u32,
    pub insert_settle_delay_ms: u32,
    pub navigation_debounce_ms: u32,
    pub stale_policy: StaleResponsePolicy,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            backend_base_url: DEFAULT_BACKEND_BASE_URL.to_owned(),
            ask_path: DEFAULT_ASK_PATH.to_owned(),
            health_path: DEFAULT_HEALTH_PATH.to_owned(),
            insert_timeout_ms: DEFAULT_INSERT_TIMEOUT_MS,
            insert_settle_delay_ms: DEFAULT_INSERT_SETTLE_DELAY_MS,
            navigation_debounce_ms: DEFAULT_NAVIGATION_DEBOUNCE_MS,
            stale_policy: StaleResponsePolicy::default(),
        }
    }
}

impl WidgetConfig {
    /// Defaults plus any build-time override.
    ///
    /// An override that fails validation is ignored with a warning so a bad
    /// build flag never leaves the widget without a backend.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::with_base_url_override(BACKEND_URL_OVERRIDE)
    }

    fn with_base_url_override(raw: Option<&str>) -> Self {
        let mut config = Self::default();
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return config;
        };

        let candidate = Self {
            backend_base_url: normalize_base_url(raw),
            ..config.clone()
        };
        match candidate.validate() {
            Ok(()) => config = candidate,
            Err(e) => log::warn!("ignoring backend url override: {e}"),
        }
        config
    }

    /// Check that the URLs and timings are usable.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let parsed = url::Url::parse(&self.backend_base_url).map_err(|e| ConfigError::InvalidBaseUrl {
            url: self.backend_base_url.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidBaseUrl {
                url: self.backend_base_url.clone(),
                reason: format!("unsupported scheme {}", parsed.scheme()),
            });
        }
        for path in [&self.ask_path, &self.health_path] {
            if !path.starts_with('/') {
                return Err(ConfigError::InvalidPath(path.clone()));
            }
        }
        if self.insert_timeout_ms == 0 {
            return Err(ConfigError::ZeroDuration { name: "insert_timeout_ms" });
        }
        Ok(())
    }

    /// Full URL of the question endpoint.
    #[must_use]
    pub fn ask_url(&self) -> String {
        format!("{}{}", self.backend_base_url, self.ask_path)
    }

    /// Full URL of the health probe.
    #[must_use]
    pub fn health_url(&self) -> String {
        format!("{}{}", self.backend_base_url, self.health_path)
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim_end_matches('/').to_owned()
}
