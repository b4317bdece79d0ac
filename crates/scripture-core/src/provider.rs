use std::collections::HashMap;
use std::sync::Arc;

use crate::catalog::BookCatalog;
use crate::error::{Error, Result};
use crate::navigation::Navigator;
use crate::traits::VersionProvider;
use crate::types::PassageContent;

/// A translation held fully in memory, keyed by `(book, chapter)`.
#[derive(Debug, Clone)]
pub struct MemoryVersion {
    name: String,
    catalog: Arc<BookCatalog>,
    passages: HashMap<(String, u32), PassageContent>,
}

impl MemoryVersion {
    pub fn new(name: impl Into<String>, catalog: Arc<BookCatalog>) -> Self {
        Self { name: name.into(), catalog, passages: HashMap::new() }
    }

    /// Add or replace a chapter. The chapter must exist in the catalog.
    pub fn insert(&mut self, passage: PassageContent) -> Result<()> {
        if !Navigator::new(&self.catalog).has_passage(&passage.book, passage.chapter) {
            return Err(Error::invalid_reference(&passage.book, passage.chapter));
        }
        self.passages.insert((passage.book.clone(), passage.chapter), passage);
        Ok(())
    }

    pub fn with_passage(mut self, passage: PassageContent) -> Result<Self> {
        self.insert(passage)?;
        Ok(self)
    }

    pub fn passage_count(&self) -> usize {
        self.passages.len()
    }
}

impl VersionProvider for MemoryVersion {
    fn name(&self) -> &str {
        &self.name
    }

    fn catalog(&self) -> &BookCatalog {
        &self.catalog
    }

    fn has_passage(&self, book: &str, chapter: u32) -> bool {
        self.passages.contains_key(&(book.to_string(), chapter))
    }

    fn get_passage(&self, book: &str, chapter: u32) -> Result<PassageContent> {
        self.passages
            .get(&(book.to_string(), chapter))
            .cloned()
            .ok_or_else(|| Error::PassageInvalid { book: book.to_string(), chapter })
    }
}
