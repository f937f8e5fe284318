//! Application use cases (business logic orchestration).

mod browse_collection;
mod paginate_pieces;

pub use browse_collection::*;
pub use paginate_pieces::*;
