//! Piece detail documents and the image reference chain.
//!
//! A detail document names the piece in several languages and points at a
//! `VisualItem`. The visual item points at a `DigitalObject`, whose access
//! point is the IIIF image URL.

use rijks_domain::{Language, LocalizedPiece, LocalizedText, Url};
use serde::Deserialize;

use super::ParseError;
use crate::serialization::from_json_bytes;

/// Getty AAT term for Dutch.
const DUTCH_TERM: &str = "http://vocab.getty.edu/aat/300388256";
/// Getty AAT term for English.
const ENGLISH_TERM: &str = "http://vocab.getty.edu/aat/300388277";

const NAME_TYPE: &str = "Name";
const STATEMENT_TYPE: &str = "LinguisticObject";
const VISUAL_ITEM_TYPE: &str = "VisualItem";

/// Result of mapping a detail document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceDetails {
    /// The piece, without an image URL.
    pub piece: LocalizedPiece,
    /// First hop of the image chain, if the piece shows a visual item.
    pub visual_item_url: Option<Url>,
}

/// Maps detail, visual item and digital object documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct PieceDetailsMapper;

impl PieceDetailsMapper {
    /// Parses a piece detail document.
    ///
    /// Title, date and creator are each optional; entries without content
    /// are skipped and the first entry per language wins.
    ///
    /// # Errors
    /// Returns [`ParseError::InvalidData`] if the document cannot be decoded.
    pub fn map(bytes: &[u8]) -> Result<PieceDetails, ParseError> {
        let root: Root = from_json_bytes(bytes)?;

        let produced_by = root.produced_by.as_ref();
        let piece = LocalizedPiece {
            title: extract_localized(root.identified_by.as_deref(), NAME_TYPE),
            date: extract_localized(
                produced_by
                    .and_then(|p| p.timespan.as_ref())
                    .and_then(|t| t.identified_by.as_deref()),
                NAME_TYPE,
            ),
            creator: extract_localized(
                produced_by.and_then(|p| p.referred_to_by.as_deref()),
                STATEMENT_TYPE,
            ),
            image_url: None,
            id: root.id,
        };

        let visual_item_url = root
            .shows
            .unwrap_or_default()
            .into_iter()
            .find(|reference| reference.kind.as_deref() == Some(VISUAL_ITEM_TYPE))
            .and_then(|reference| Url::parse(&reference.id).ok());

        Ok(PieceDetails {
            piece,
            visual_item_url,
        })
    }

    /// Returns the digital object URL from a visual item document.
    #[must_use]
    pub fn map_visual_item(bytes: &[u8]) -> Option<Url> {
        let item: VisualItem = from_json_bytes(bytes).ok()?;
        first_url(item.digitally_shown_by)
    }

    /// Returns the IIIF image URL from a digital object document.
    #[must_use]
    pub fn map_digital_object(bytes: &[u8]) -> Option<Url> {
        let object: DigitalObject = from_json_bytes(bytes).ok()?;
        first_url(object.access_point)
    }
}

fn first_url(references: Option<Vec<Reference>>) -> Option<Url> {
    let reference = references?.into_iter().next()?;
    Url::parse(&reference.id).ok()
}

fn extract_localized(items: Option<&[LocalizedContent]>, kind: &str) -> Option<LocalizedText> {
    let text = LocalizedText::from_entries(
        items?
            .iter()
            .filter(|item| item.kind.as_deref() == Some(kind))
            .filter_map(|item| {
                let content = item.content.as_deref().filter(|c| !c.is_empty())?;
                Some((item.language(), content))
            }),
    );
    (!text.is_empty()).then_some(text)
}

fn language_for_term(term: &str) -> Language {
    match term {
        DUTCH_TERM => Language::Dutch,
        ENGLISH_TERM => Language::English,
        _ => Language::Unknown,
    }
}

#[derive(Deserialize)]
struct Reference {
    id: String,
    #[serde(rename = "type")]
    kind: Option<String>,
}

/// A field that holds either a single value or a list of them.
#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    fn first(&self) -> Option<&T> {
        match self {
            Self::One(value) => Some(value),
            Self::Many(values) => values.first(),
        }
    }
}

#[derive(Deserialize)]
struct LocalizedContent {
    #[serde(rename = "type")]
    kind: Option<String>,
    content: Option<String>,
    language: Option<OneOrMany<Reference>>,
}

impl LocalizedContent {
    fn language(&self) -> Language {
        self.language
            .as_ref()
            .and_then(OneOrMany::first)
            .map_or(Language::Unknown, |reference| language_for_term(&reference.id))
    }
}

#[derive(Deserialize)]
struct Root {
    id: String,
    identified_by: Option<Vec<LocalizedContent>>,
    produced_by: Option<ProducedBy>,
    shows: Option<Vec<Reference>>,
}

#[derive(Deserialize)]
struct ProducedBy {
    timespan: Option<Timespan>,
    referred_to_by: Option<Vec<LocalizedContent>>,
}

#[derive(Deserialize)]
struct Timespan {
    identified_by: Option<Vec<LocalizedContent>>,
}

#[derive(Deserialize)]
struct VisualItem {
    digitally_shown_by: Option<Vec<Reference>>,
}

#[derive(Deserialize)]
struct DigitalObject {
    access_point: Option<Vec<Reference>>,
}
