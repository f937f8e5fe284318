//! Rijks Domain - Core collection types
//!
//! This crate defines the domain model for the museum collection client.
//! All types here are pure Rust with no I/O dependencies.

pub mod collection;
pub mod image;
pub mod language;
pub mod piece;
pub mod policy;
pub mod settings;
pub mod state;

pub use collection::{CollectionPage, PageToken};
pub use image::IiifImageResizer;
pub use language::{Language, LocalizedText};
pub use piece::{LocalizedPiece, Piece};
pub use policy::LanguageResolutionPolicy;
pub use settings::{CollectionSettings, DEFAULT_BATCH_SIZE, DEFAULT_COLLECTION_URL};
pub use state::{FeedState, GENERIC_FAILURE_MESSAGE};
pub use url::Url;
