//! Content identity parsed from the host page address.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use std::fmt;

use url::Url;

use crate::consts::{IDENTITY_QUERY_PARAM, WATCH_PATH_MARKER};

/// Opaque token naming the video currently on screen.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ContentIdentity(String);

impl ContentIdentity {
    /// Wrap a raw token. Empty tokens are not identities.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.is_empty() { None } else { Some(Self(raw)) }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whether `href` is a content-viewing page.
#[must_use]
pub fn is_content_page(href: &str) -> bool {
    match Url::parse(href) {
        Ok(url) => url.path().contains(WATCH_PATH_MARKER),
        Err(_) => href.contains(WATCH_PATH_MARKER),
    }
}

/// Read the identity from the query string of `href`.
///
/// Only the query is consulted, so any page carrying the parameter yields an
/// identity; callers decide whether the page shape matters.
#[must_use]
pub fn extract_identity(href: &str) -> Option<ContentIdentity> {
    let url = Url::parse(href).ok()?;
    let (_, value) = url.query_pairs().find(|(key, _)| key == IDENTITY_QUERY_PARAM)?;
    ContentIdentity::new(value.into_owned())
}
