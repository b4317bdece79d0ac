use crate::catalog::BookCatalog;
use crate::error::Result;
use crate::navigation::{Cursor, Navigator};
use crate::types::{PassageContent, SearchHit};

/// Longest query handed to a search provider. The longest KJV verse is 528
/// characters.
pub const DEFAULT_MAX_QUERY_CHARS: usize = 700;

/// One translation's chapter source.
///
/// Navigation defaults delegate to [`Navigator`] over the provider's own
/// catalog, so providers and the engine always agree on canonical order.
pub trait VersionProvider: Send + Sync {
    fn name(&self) -> &str;
    fn catalog(&self) -> &BookCatalog;
    fn has_passage(&self, book: &str, chapter: u32) -> bool;
    /// Fails with `PassageInvalid` when the chapter is not available.
    fn get_passage(&self, book: &str, chapter: u32) -> Result<PassageContent>;

    fn next_passage(&self, book: &str, chapter: u32) -> Result<Cursor> {
        Navigator::new(self.catalog()).next_chapter(book, chapter)
    }

    fn previous_passage(&self, book: &str, chapter: u32) -> Result<Cursor> {
        Navigator::new(self.catalog()).previous_chapter(book, chapter)
    }
}

pub trait SearchProvider: Send + Sync {
    fn versions(&self) -> Vec<String>;
    fn search(&self, query: &str, version: &str, max_results: usize) -> anyhow::Result<Vec<SearchHit>>;
}

/// Cut `query` to at most `max_chars` characters, on a char boundary.
pub fn bound_query(query: &str, max_chars: usize) -> &str {
    match query.char_indices().nth(max_chars) {
        Some((idx, _)) => &query[..idx],
        None => query,
    }
}
