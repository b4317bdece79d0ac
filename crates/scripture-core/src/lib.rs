//! scripture-core
//!
//! Book catalog, reference parsing, chapter navigation and multi-version
//! alignment. Everything here is pure and immutable once built; I/O lives
//! behind the provider traits and in `loader`.

#![deny(unused_variables)]
#![deny(unused_imports)]

pub mod alignment;
pub mod catalog;
pub mod config;
pub mod error;
pub mod loader;
pub mod navigation;
pub mod provider;
pub mod reference;
pub mod registry;
pub mod traits;
pub mod types;

pub use alignment::{align_versions, assemble_search_matches, flatten, split_view, verse_range, SearchMatches};
pub use catalog::{Book, BookCatalog, Testament};
pub use error::{Error, Result};
pub use navigation::{Cursor, Navigator};
pub use provider::MemoryVersion;
pub use reference::{parse_search_label, parse_verse_line, VerseRef};
pub use registry::VersionRegistry;
pub use traits::{bound_query, SearchProvider, VersionProvider};
pub use types::{AlignedRow, Cell, Heading, PassageContent, SearchHit};
