//! Paged collection listings.

use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

/// Opaque continuation token issued by the collection API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageToken(String);

impl PageToken {
    /// Query parameter that carries the token.
    pub const QUERY_KEY: &'static str = "pageToken";

    /// Wraps a token string.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the raw token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Extracts the token from the query string of a `next` link.
    #[must_use]
    pub fn from_next_link(link: &Url) -> Option<Self> {
        link.query_pairs()
            .find(|(key, _)| key == Self::QUERY_KEY)
            .map(|(_, value)| Self::new(value.into_owned()))
    }

    /// Sets this token on a collection request URL, replacing any token
    /// the URL already carries.
    #[must_use]
    pub fn apply_to(&self, base: &Url) -> Url {
        let kept: Vec<(String, String)> = base
            .query_pairs()
            .filter(|(key, _)| key != Self::QUERY_KEY)
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();

        let mut url = base.clone();
        url.query_pairs_mut()
            .clear()
            .extend_pairs(kept)
            .append_pair(Self::QUERY_KEY, &self.0);
        url
    }
}

impl fmt::Display for PageToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One page of the collection listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionPage {
    /// Detail URLs in listing order.
    pub urls: Vec<Url>,
    /// Token for the following page; `None` on the last page.
    pub next_page_token: Option<PageToken>,
}
