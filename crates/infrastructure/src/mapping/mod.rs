//! Wire mappers for the collection API.
//!
//! The API speaks Linked Art JSON-LD. Mappers decode only the fields the
//! client needs and never perform I/O.

mod collection_page;
mod piece_details;

pub use collection_page::CollectionPageMapper;
pub use piece_details::{PieceDetails, PieceDetailsMapper};

use crate::serialization::SerializationError;

/// Error raised when a response body does not have the expected shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The document is not valid JSON or is missing required fields.
    #[error("invalid data: {0}")]
    InvalidData(String),
}

impl From<SerializationError> for ParseError {
    fn from(error: SerializationError) -> Self {
        Self::InvalidData(error.to_string())
    }
}
