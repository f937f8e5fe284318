//! Collection listing pages.

use rijks_domain::{CollectionPage, PageToken, Url};
use serde::Deserialize;

use super::ParseError;
use crate::serialization::from_json_bytes;

/// Maps a listing page to its detail URLs and continuation token.
#[derive(Debug, Clone, Copy, Default)]
pub struct CollectionPageMapper;

impl CollectionPageMapper {
    /// Parses one listing page.
    ///
    /// The token is read from the `pageToken` query parameter of the `next`
    /// link; a missing or unparseable link means there is no next page.
    ///
    /// # Errors
    /// Returns [`ParseError::InvalidData`] if the body is not a listing page.
    pub fn map(bytes: &[u8]) -> Result<CollectionPage, ParseError> {
        let root: Root = from_json_bytes(bytes)?;

        let next_page_token = root
            .next
            .and_then(|next| next.id)
            .and_then(|id| Url::parse(&id).ok())
            .and_then(|link| PageToken::from_next_link(&link));

        Ok(CollectionPage {
            urls: root.ordered_items.into_iter().map(|item| item.id).collect(),
            next_page_token,
        })
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Root {
    ordered_items: Vec<Item>,
    next: Option<Next>,
}

#[derive(Deserialize)]
struct Item {
    id: Url,
}

#[derive(Deserialize)]
struct Next {
    id: Option<String>,
}
