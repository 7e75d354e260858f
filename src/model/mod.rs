//! Core data model: verse references and book-name resolution.

pub mod book;
pub mod types;

pub use book::normalize_book;
pub use types::{Reference, ReferenceParseError};
