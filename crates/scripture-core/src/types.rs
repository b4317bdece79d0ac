//! Values exchanged between providers and the engine.

use serde::{Deserialize, Serialize};

/// One section of a chapter. `verses` are raw verse lines such as
/// `"4 Love is patient"`, numbered in increasing order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    #[serde(default)]
    pub heading: String,
    pub verses: Vec<String>,
}

/// The content of one chapter in one translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassageContent {
    pub book: String,
    pub chapter: u32,
    pub headings: Vec<Heading>,
}

impl PassageContent {
    pub fn new(book: impl Into<String>, chapter: u32) -> Self {
        Self { book: book.into(), chapter, headings: Vec::new() }
    }

    pub fn with_heading<I, S>(mut self, heading: impl Into<String>, verses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.headings.push(Heading {
            heading: heading.into(),
            verses: verses.into_iter().map(Into::into).collect(),
        });
        self
    }

    pub fn verse_lines(&self) -> impl Iterator<Item = &str> {
        self.headings.iter().flat_map(|h| h.verses.iter().map(String::as_str))
    }
}

/// A search result as produced by a search provider.
///
/// `label` reads `"<book> <chapter>:<verse>"`. `score` is provider-specific;
/// higher is better.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub label: String,
    #[serde(default)]
    pub score: f32,
}

impl SearchHit {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into(), score: 0.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cell {
    Verse(String),
    /// The version has no further verses in this chapter.
    Empty,
}

impl Cell {
    pub fn as_str(&self) -> &str {
        match self {
            Cell::Verse(text) => text,
            Cell::Empty => "",
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// One display row of a split view; cell `j` belongs to version `j`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignedRow {
    pub cells: Vec<Cell>,
}
