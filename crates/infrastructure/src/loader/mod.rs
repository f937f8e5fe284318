//! Remote loaders backed by the collection API.

mod remote_pieces_loader;

pub use remote_pieces_loader::RemotePiecesLoader;
