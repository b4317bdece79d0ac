//! scripture-text
//!
//! Tantivy-backed verse indexing and the full-text search provider used by
//! the search flow. See `index` and `search`.

pub mod tantivy_utils;
pub mod index;
pub mod search;

pub use index::VerseIndexer;
pub use search::VerseSearchEngine;
