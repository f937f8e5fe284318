//! JSON helpers shared by the wire mappers and settings persistence.
//!
//! Output is stable:
//! - 2-space indentation
//! - Trailing newline
//! - Field order as declared on the serialized type

mod json;

pub use json::*;
