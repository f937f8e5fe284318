//! Pieces loader over HTTP.
//!
//! This adapter implements the `PiecesLoader` port on top of any
//! `HttpClient`. Loading a piece takes up to three requests: the detail
//! document, then its visual item, then the digital object that carries the
//! IIIF image URL. The image hops are best effort.

use async_trait::async_trait;
use rijks_application::ports::{HttpClient, LoaderError, PiecesLoader};
use rijks_domain::{CollectionPage, LocalizedPiece, PageToken, Url};

use crate::mapping::{CollectionPageMapper, ParseError, PieceDetails, PieceDetailsMapper};

impl From<ParseError> for LoaderError {
    fn from(error: ParseError) -> Self {
        match error {
            ParseError::InvalidData(message) => Self::InvalidData(message),
        }
    }
}

/// Loads collection pages and pieces from the museum API.
pub struct RemotePiecesLoader<C> {
    collection_url: Url,
    client: C,
}

impl<C: HttpClient> RemotePiecesLoader<C> {
    /// Creates a loader for the listing endpoint at `collection_url`.
    #[must_use]
    pub const fn new(collection_url: Url, client: C) -> Self {
        Self {
            collection_url,
            client,
        }
    }

    /// Returns the HTTP client.
    pub const fn client(&self) -> &C {
        &self.client
    }

    /// Builds the listing request URL for `token`.
    #[must_use]
    pub fn page_url(&self, token: Option<&PageToken>) -> Url {
        token.map_or_else(
            || self.collection_url.clone(),
            |token| token.apply_to(&self.collection_url),
        )
    }

    async fn resolve_image_url(&self, visual_item_url: Option<Url>) -> Option<Url> {
        let visual_item_url = visual_item_url?;
        let digital_object_url = self.fetch_digital_object_url(&visual_item_url).await?;
        self.fetch_iiif_image_url(&digital_object_url).await
    }

    async fn fetch_digital_object_url(&self, visual_item_url: &Url) -> Option<Url> {
        let body = self
            .client
            .get(visual_item_url)
            .await
            .inspect_err(|e| {
                tracing::debug!(
                    url = %visual_item_url,
                    error = %e,
                    "visual item request failed"
                );
            })
            .ok()?;
        PieceDetailsMapper::map_visual_item(&body)
    }

    async fn fetch_iiif_image_url(&self, digital_object_url: &Url) -> Option<Url> {
        let body = self
            .client
            .get(digital_object_url)
            .await
            .inspect_err(|e| {
                tracing::debug!(
                    url = %digital_object_url,
                    error = %e,
                    "digital object request failed"
                );
            })
            .ok()?;
        PieceDetailsMapper::map_digital_object(&body)
    }
}

#[async_trait]
impl<C: HttpClient> PiecesLoader for RemotePiecesLoader<C> {
    async fn load_page(&self, token: Option<&PageToken>) -> Result<CollectionPage, LoaderError> {
        let url = self.page_url(token);
        tracing::debug!(%url, "loading collection page");

        let body = self.client.get(&url).await?;
        Ok(CollectionPageMapper::map(&body)?)
    }

    async fn load_detail(&self, url: &Url) -> Result<LocalizedPiece, LoaderError> {
        let body = self.client.get(url).await?;
        let PieceDetails {
            piece,
            visual_item_url,
        } = PieceDetailsMapper::map(&body)?;

        let image_url = self.resolve_image_url(visual_item_url).await;
        if image_url.is_none() {
            tracing::trace!(id = %piece.id, "piece has no image");
        }
        Ok(piece.with_image_url(image_url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rijks_application::ports::HttpClientError;
    use rijks_domain::Language;
    use std::collections::HashMap;
    use std::sync::Mutex;

    const COLLECTION: &str = "https://data.rijksmuseum.nl/search/collection";
    const DETAIL: &str = "https://id.rijksmuseum.nl/200107928";
    const VISUAL_ITEM: &str = "https://id.rijksmuseum.nl/202107928";
    const DIGITAL_OBJECT: &str = "https://id.rijksmuseum.nl/50010";
    const IMAGE: &str = "https://iiif.micr.io/PJEZO/full/max/0/default.jpg";

    /// Client double that answers from a URL → body table and records requests.
    #[derive(Default)]
    struct StubClient {
        responses: Mutex<HashMap<String, Result<Vec<u8>, HttpClientError>>>,
        requested: Mutex<Vec<String>>,
    }

    impl StubClient {
        fn respond(&self, url: &str, body: &str) {
            self.responses
                .lock()
                .expect("Lock poisoned")
                .insert(url.to_string(), Ok(body.as_bytes().to_vec()));
        }

        fn fail(&self, url: &str) {
            self.responses.lock().expect("Lock poisoned").insert(
                url.to_string(),
                Err(HttpClientError::ConnectionFailed("offline".to_string())),
            );
        }

        fn requested(&self) -> Vec<String> {
            self.requested.lock().expect("Lock poisoned").clone()
        }
    }

    #[async_trait]
    impl HttpClient for StubClient {
        async fn get(&self, url: &Url) -> Result<Vec<u8>, HttpClientError> {
            self.requested
                .lock()
                .expect("Lock poisoned")
                .push(url.to_string());
            self.responses
                .lock()
                .expect("Lock poisoned")
                .get(url.as_str())
                .cloned()
                .unwrap_or(Err(HttpClientError::Status { status: 404 }))
        }
    }

    fn url(s: &str) -> Url {
        Url::parse(s).expect("valid url")
    }

    fn sut() -> RemotePiecesLoader<StubClient> {
        RemotePiecesLoader::new(url(COLLECTION), StubClient::default())
    }

    fn detail_body() -> String {
        format!(
            r#"{{
                "id": "{DETAIL}",
                "identified_by": [
                    {{"type": "Name", "content": "Night Watch", "language": [{{"id": "http://vocab.getty.edu/aat/300388277"}}]}},
                    {{"type": "Name", "content": "Nachtwacht", "language": [{{"id": "http://vocab.getty.edu/aat/300388256"}}]}}
                ],
                "shows": [{{"id": "{VISUAL_ITEM}", "type": "VisualItem"}}]
            }}"#
        )
    }

    fn stub_image_chain(client: &StubClient) {
        client.respond(
            VISUAL_ITEM,
            &format!(r#"{{"digitally_shown_by": [{{"id": "{DIGITAL_OBJECT}"}}]}}"#),
        );
        client.respond(
            DIGITAL_OBJECT,
            &format!(r#"{{"access_point": [{{"id": "{IMAGE}"}}]}}"#),
        );
    }

    #[tokio::test]
    async fn test_load_page_requests_collection_url() {
        let sut = sut();
        let _ = sut.load_page(None).await;
        assert_eq!(sut.client().requested(), vec![COLLECTION.to_string()]);
    }

    #[tokio::test]
    async fn test_load_page_appends_page_token() {
        let sut = sut();
        let _ = sut.load_page(Some(&PageToken::new("any-token"))).await;
        assert_eq!(
            sut.client().requested(),
            vec![format!("{COLLECTION}?pageToken=any-token")]
        );
    }

    #[tokio::test]
    async fn test_load_page_transport_failure_is_network_error() {
        let sut = sut();
        sut.client().fail(COLLECTION);

        let result = sut.load_page(None).await;

        assert!(matches!(result, Err(LoaderError::Network(_))));
    }

    #[tokio::test]
    async fn test_load_page_invalid_body_is_invalid_data() {
        let sut = sut();
        sut.client().respond(COLLECTION, "");

        let result = sut.load_page(None).await;

        assert!(matches!(result, Err(LoaderError::InvalidData(_))));
    }

    #[tokio::test]
    async fn test_load_page_delivers_urls_and_token() {
        let sut = sut();
        sut.client().respond(
            COLLECTION,
            &format!(
                r#"{{"orderedItems": [{{"id": "{DETAIL}"}}], "next": {{"id": "{COLLECTION}?pageToken=abc"}}}}"#
            ),
        );

        let page = sut.load_page(None).await.expect("valid page");

        assert_eq!(page.urls, vec![url(DETAIL)]);
        assert_eq!(page.next_page_token, Some(PageToken::new("abc")));
    }

    #[tokio::test]
    async fn test_load_detail_transport_failure_is_network_error() {
        let sut = sut();
        sut.client().fail(DETAIL);

        let result = sut.load_detail(&url(DETAIL)).await;

        assert!(matches!(result, Err(LoaderError::Network(_))));
    }

    #[tokio::test]
    async fn test_load_detail_invalid_body_is_invalid_data() {
        let sut = sut();
        sut.client().respond(DETAIL, "{}");

        let result = sut.load_detail(&url(DETAIL)).await;

        assert!(matches!(result, Err(LoaderError::InvalidData(_))));
        assert_eq!(sut.client().requested(), vec![DETAIL.to_string()]);
    }

    #[tokio::test]
    async fn test_load_detail_follows_image_chain_in_order() {
        let sut = sut();
        sut.client().respond(DETAIL, &detail_body());
        stub_image_chain(sut.client());

        let piece = sut.load_detail(&url(DETAIL)).await.expect("valid piece");

        assert_eq!(piece.id, DETAIL);
        assert_eq!(piece.image_url, Some(url(IMAGE)));
        assert_eq!(
            piece.title.as_ref().and_then(|t| t.get(Language::Dutch)),
            Some("Nachtwacht")
        );
        assert_eq!(
            sut.client().requested(),
            vec![
                DETAIL.to_string(),
                VISUAL_ITEM.to_string(),
                DIGITAL_OBJECT.to_string()
            ]
        );
    }

    #[tokio::test]
    async fn test_load_detail_without_visual_item_skips_image_chain() {
        let sut = sut();
        sut.client()
            .respond(DETAIL, &format!(r#"{{"id": "{DETAIL}"}}"#));

        let piece = sut.load_detail(&url(DETAIL)).await.expect("valid piece");

        assert_eq!(piece.image_url, None);
        assert_eq!(sut.client().requested().len(), 1);
    }

    #[tokio::test]
    async fn test_visual_item_failure_still_delivers_piece() {
        let sut = sut();
        sut.client().respond(DETAIL, &detail_body());
        sut.client().fail(VISUAL_ITEM);

        let piece = sut.load_detail(&url(DETAIL)).await.expect("piece delivered");

        assert_eq!(piece.image_url, None);
        assert_eq!(sut.client().requested().len(), 2);
    }

    #[tokio::test]
    async fn test_digital_object_failure_still_delivers_piece() {
        let sut = sut();
        sut.client().respond(DETAIL, &detail_body());
        stub_image_chain(sut.client());
        sut.client().respond(DIGITAL_OBJECT, "not json");

        let piece = sut.load_detail(&url(DETAIL)).await.expect("piece delivered");

        assert_eq!(piece.image_url, None);
        assert!(piece.title.is_some());
    }
}
