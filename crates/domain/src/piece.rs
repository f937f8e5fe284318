//! Collection pieces.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::image::IiifImageResizer;
use crate::language::LocalizedText;
use crate::policy::LanguageResolutionPolicy;

/// A piece as described by the collection API, with every text field still
/// available in all of its languages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedPiece {
    /// Identifier taken from the detail document.
    pub id: String,
    /// Title per language.
    pub title: Option<LocalizedText>,
    /// Production date per language.
    pub date: Option<LocalizedText>,
    /// Creator statement per language.
    pub creator: Option<LocalizedText>,
    /// Resolved IIIF image URL, if the image chain could be followed.
    pub image_url: Option<Url>,
}

impl LocalizedPiece {
    /// Returns a copy of this piece with the given image URL.
    #[must_use]
    pub fn with_image_url(mut self, image_url: Option<Url>) -> Self {
        self.image_url = image_url;
        self
    }

    /// Resolves every text field to a single language.
    #[must_use]
    pub fn localize(&self, policy: &LanguageResolutionPolicy) -> Piece {
        Piece {
            id: self.id.clone(),
            title: policy.resolve_field(self.title.as_ref()),
            date: policy.resolve_field(self.date.as_ref()),
            creator: policy.resolve_field(self.creator.as_ref()),
            image_url: self.image_url.clone(),
        }
    }
}

/// A display-ready piece.
///
/// Two pieces are equal when their identifiers are equal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Piece {
    /// Identifier taken from the detail document.
    pub id: String,
    /// Title in the preferred language.
    pub title: Option<String>,
    /// Production date in the preferred language.
    pub date: Option<String>,
    /// Creator statement in the preferred language.
    pub creator: Option<String>,
    /// Full-size IIIF image URL.
    pub image_url: Option<Url>,
}

impl Piece {
    /// Image URL scaled to `width` x `height` pixels.
    #[must_use]
    pub fn image_url_sized(&self, width: u32, height: u32) -> Option<Url> {
        IiifImageResizer::new().resize(self.image_url.as_ref(), width, height)
    }
}

impl PartialEq for Piece {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Piece {}

impl Hash for Piece {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
