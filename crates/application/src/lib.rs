//! Rijks Application - Ports and use cases
//!
//! This crate defines the ports the collection client depends on and the
//! use cases that orchestrate them: paging through the collection and
//! driving a list feed.

pub mod error;
pub mod ports;
pub mod use_cases;

pub use error::{ApplicationResult, PaginationError};
