//! Immutable table of canonical books.
//!
//! The catalog is built once at startup and shared (`Arc<BookCatalog>`) by
//! every navigator, provider and index. Lookups are exact: callers normalize
//! book names before asking, and a miss is always `Error::NotFound`.

use serde::Serialize;
use std::collections::HashMap;

use crate::error::{Error, Result};

/// Protestant canon with KJV chapter counts, Genesis through Revelation.
const CANONICAL_BOOKS: [(&str, u32); 66] = [
    ("Genesis", 50),
    ("Exodus", 40),
    ("Leviticus", 27),
    ("Numbers", 36),
    ("Deuteronomy", 34),
    ("Joshua", 24),
    ("Judges", 21),
    ("Ruth", 4),
    ("1 Samuel", 31),
    ("2 Samuel", 24),
    ("1 Kings", 22),
    ("2 Kings", 25),
    ("1 Chronicles", 29),
    ("2 Chronicles", 36),
    ("Ezra", 10),
    ("Nehemiah", 13),
    ("Esther", 10),
    ("Job", 42),
    ("Psalms", 150),
    ("Proverbs", 31),
    ("Ecclesiastes", 12),
    ("Song of Solomon", 8),
    ("Isaiah", 66),
    ("Jeremiah", 52),
    ("Lamentations", 5),
    ("Ezekiel", 48),
    ("Daniel", 12),
    ("Hosea", 14),
    ("Joel", 3),
    ("Amos", 9),
    ("Obadiah", 1),
    ("Jonah", 4),
    ("Micah", 7),
    ("Nahum", 3),
    ("Habakkuk", 3),
    ("Zephaniah", 3),
    ("Haggai", 2),
    ("Zechariah", 14),
    ("Malachi", 4),
    ("Matthew", 28),
    ("Mark", 16),
    ("Luke", 24),
    ("John", 21),
    ("Acts", 28),
    ("Romans", 16),
    ("1 Corinthians", 16),
    ("2 Corinthians", 13),
    ("Galatians", 6),
    ("Ephesians", 6),
    ("Philippians", 4),
    ("Colossians", 4),
    ("1 Thessalonians", 5),
    ("2 Thessalonians", 3),
    ("1 Timothy", 6),
    ("2 Timothy", 4),
    ("Titus", 3),
    ("Philemon", 1),
    ("Hebrews", 13),
    ("James", 5),
    ("1 Peter", 5),
    ("2 Peter", 3),
    ("1 John", 5),
    ("2 John", 1),
    ("3 John", 1),
    ("Jude", 1),
    ("Revelation", 22),
];

/// Order of Matthew in the canonical table.
const CANONICAL_NEW_TESTAMENT_AT: usize = 39;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Book {
    pub name: String,
    pub order: usize,
    pub chapter_count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Testament {
    Old,
    New,
}

impl Testament {
    pub fn label(self) -> &'static str {
        match self {
            Testament::Old => "Old Testament",
            Testament::New => "New Testament",
        }
    }
}

#[derive(Debug, Clone)]
pub struct BookCatalog {
    books: Vec<Book>,
    by_name: HashMap<String, usize>,
    new_testament_at: usize,
}

impl BookCatalog {
    /// The 66-book canon.
    pub fn canonical() -> Self {
        let books = CANONICAL_BOOKS
            .iter()
            .enumerate()
            .map(|(order, (name, chapter_count))| Book {
                name: (*name).to_string(),
                order,
                chapter_count: *chapter_count,
            })
            .collect::<Vec<_>>();
        let by_name = books.iter().map(|b| (b.name.clone(), b.order)).collect();
        Self { books, by_name, new_testament_at: CANONICAL_NEW_TESTAMENT_AT }
    }

    /// Build a custom catalog from `(name, chapter_count)` pairs in canonical order.
    ///
    /// Every book is treated as Old Testament until
    /// [`with_new_testament_at`](Self::with_new_testament_at) says otherwise.
    pub fn new<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        let mut books = Vec::new();
        let mut by_name = HashMap::new();
        for (order, (name, chapter_count)) in entries.into_iter().enumerate() {
            let name: String = name.into();
            if name.trim().is_empty() {
                return Err(Error::InvalidCatalog(format!("book #{order} has an empty name")));
            }
            // Search labels are split on the last colon.
            if name.contains(':') {
                return Err(Error::InvalidCatalog(format!("book name '{name}' contains ':'")));
            }
            if chapter_count == 0 {
                return Err(Error::InvalidCatalog(format!("book '{name}' has no chapters")));
            }
            if by_name.insert(name.clone(), order).is_some() {
                return Err(Error::InvalidCatalog(format!("duplicate book '{name}'")));
            }
            books.push(Book { name, order, chapter_count });
        }
        if books.is_empty() {
            return Err(Error::InvalidCatalog("catalog has no books".to_string()));
        }
        let new_testament_at = books.len();
        Ok(Self { books, by_name, new_testament_at })
    }

    pub fn with_new_testament_at(mut self, order: usize) -> Result<Self> {
        if order > self.books.len() {
            return Err(Error::InvalidCatalog(format!(
                "testament split {order} is past the last book ({})",
                self.books.len()
            )));
        }
        self.new_testament_at = order;
        Ok(self)
    }

    pub fn book(&self, name: &str) -> Result<&Book> {
        self.by_name
            .get(name)
            .map(|&order| &self.books[order])
            .ok_or_else(|| Error::NotFound(format!("book '{name}'")))
    }

    pub fn chapter_count(&self, name: &str) -> Result<u32> {
        self.book(name).map(|b| b.chapter_count)
    }

    pub fn order(&self, name: &str) -> Result<usize> {
        self.book(name).map(|b| b.order)
    }

    pub fn book_at(&self, order: usize) -> Result<&Book> {
        self.books
            .get(order)
            .ok_or_else(|| Error::NotFound(format!("book at order {order}")))
    }

    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn first(&self) -> &Book {
        &self.books[0]
    }

    pub fn last(&self) -> &Book {
        &self.books[self.books.len() - 1]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Book> {
        self.books.iter()
    }

    pub fn testament(&self, name: &str) -> Result<Testament> {
        let order = self.order(name)?;
        Ok(if order < self.new_testament_at { Testament::Old } else { Testament::New })
    }
}

impl Default for BookCatalog {
    fn default() -> Self {
        Self::canonical()
    }
}
