//! Chapter-by-chapter navigation over the catalog.
//!
//! The cursor is owned by the caller; every operation validates it and
//! returns a fresh one. Traversal is a closed loop: stepping past Revelation
//! lands on Genesis 1, stepping back from Genesis 1 lands on Revelation 22.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::catalog::{Book, BookCatalog};
use crate::error::{Error, Result};
use crate::reference::parse_positive;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cursor {
    pub book: String,
    pub chapter: u32,
}

impl Cursor {
    pub fn new(book: impl Into<String>, chapter: u32) -> Self {
        Self { book: book.into(), chapter }
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.book, self.chapter)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Navigator<'c> {
    catalog: &'c BookCatalog,
}

impl<'c> Navigator<'c> {
    pub fn new(catalog: &'c BookCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'c BookCatalog {
        self.catalog
    }

    pub fn has_passage(&self, book: &str, chapter: u32) -> bool {
        self.catalog
            .chapter_count(book)
            .is_ok_and(|count| (1..=count).contains(&chapter))
    }

    pub fn next_chapter(&self, book: &str, chapter: u32) -> Result<Cursor> {
        let current = self.checked(book, chapter)?;
        if chapter < current.chapter_count {
            return Ok(Cursor::new(current.name.as_str(), chapter + 1));
        }
        let next = self.catalog.book_at((current.order + 1) % self.catalog.book_count())?;
        Ok(Cursor::new(next.name.as_str(), 1))
    }

    pub fn previous_chapter(&self, book: &str, chapter: u32) -> Result<Cursor> {
        let current = self.checked(book, chapter)?;
        if chapter > 1 {
            return Ok(Cursor::new(current.name.as_str(), chapter - 1));
        }
        let count = self.catalog.book_count();
        let previous = self.catalog.book_at((current.order + count - 1) % count)?;
        Ok(Cursor::new(previous.name.as_str(), previous.chapter_count))
    }

    /// Rebuild a cursor from untrusted text, e.g. values kept in a session.
    ///
    /// The chapter must be a plain positive integer and the pair must exist in
    /// the catalog; anything else is `InvalidReference`.
    pub fn restore(&self, book: &str, chapter: &str) -> Result<Cursor> {
        let number = parse_positive(chapter).ok_or_else(|| Error::invalid_reference(book, chapter))?;
        let current = self.checked(book, number)?;
        Ok(Cursor::new(current.name.as_str(), number))
    }

    /// First chapter of the first book.
    pub fn start(&self) -> Cursor {
        Cursor::new(self.catalog.first().name.as_str(), 1)
    }

    fn checked(&self, book: &str, chapter: u32) -> Result<&'c Book> {
        let found = self
            .catalog
            .book(book)
            .map_err(|_| Error::invalid_reference(book, chapter))?;
        if chapter == 0 || chapter > found.chapter_count {
            return Err(Error::invalid_reference(book, chapter));
        }
        Ok(found)
    }
}
