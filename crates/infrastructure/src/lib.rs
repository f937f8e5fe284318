//! Rijks Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer.

pub mod adapters;
pub mod loader;
pub mod mapping;
pub mod persistence;
pub mod serialization;

pub use adapters::ReqwestHttpClient;
pub use loader::RemotePiecesLoader;
pub use mapping::{CollectionPageMapper, ParseError, PieceDetails, PieceDetailsMapper};
pub use persistence::{SettingsError, SettingsRepository};
pub use serialization::{
    SerializationError, from_json_bytes, to_json_stable, to_json_stable_bytes,
};
