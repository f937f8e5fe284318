//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the application core and external systems.
//! Each port is a trait that can be implemented by adapters in the infrastructure layer.

mod http_client;
mod pieces_loader;

pub use http_client::{HttpClient, HttpClientError};
pub use pieces_loader::{LoaderError, PiecesLoader};
