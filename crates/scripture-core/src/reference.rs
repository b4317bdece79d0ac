//! Verse reference and verse-line parsing.
//!
//! Search providers hand back labels such as `"1 Corinthians 13:4"`. Book
//! names may carry digits and spaces of their own, so labels are read from
//! the right: the last colon separates the verse, the last space before it
//! separates the chapter, and whatever remains is the book.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Marks a verse token that should match by prefix (`"John 3:1*"`).
pub const PARTIAL_MARKER: char = '*';

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VerseRef {
    pub book: String,
    pub chapter: u32,
    /// `None` for a chapter-level reference.
    pub verse: Option<u32>,
    #[serde(default)]
    pub partial: bool,
}

impl VerseRef {
    pub fn chapter(book: impl Into<String>, chapter: u32) -> Self {
        Self { book: book.into(), chapter, verse: None, partial: false }
    }

    pub fn verse(book: impl Into<String>, chapter: u32, verse: u32) -> Self {
        Self { book: book.into(), chapter, verse: Some(verse), partial: false }
    }

    /// Whether `line` is the verse this reference points at.
    ///
    /// Exact references compare verse numbers; partial references compare the
    /// line's verse-number text by prefix. Heading lines never match.
    pub fn matches_line(&self, line: &str) -> bool {
        let Some(verse) = self.verse else { return false };
        let Some((number, _)) = line.split_once(' ') else { return false };
        if parse_positive(number).is_none() {
            return false;
        }
        if self.partial {
            number.starts_with(&verse.to_string())
        } else {
            number.parse::<u32>().is_ok_and(|n| n == verse)
        }
    }
}

impl fmt::Display for VerseRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.book, self.chapter)?;
        if let Some(verse) = self.verse {
            write!(f, ":{verse}")?;
            if self.partial {
                write!(f, "{PARTIAL_MARKER}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for VerseRef {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_search_label(s)
    }
}

/// Parse a `"<book> <chapter>:<verse>"` label.
pub fn parse_search_label(label: &str) -> Result<VerseRef> {
    let colon = label
        .rfind(':')
        .ok_or_else(|| Error::Parse(format!("label '{label}' has no ':'")))?;
    let (head, verse_text) = (&label[..colon], &label[colon + 1..]);
    let space = head
        .rfind(' ')
        .ok_or_else(|| Error::Parse(format!("label '{label}' has no chapter")))?;
    let book = head[..space].trim();
    if book.is_empty() {
        return Err(Error::Parse(format!("label '{label}' has no book")));
    }
    let chapter = parse_positive(&head[space + 1..])
        .ok_or_else(|| Error::Parse(format!("label '{label}' has an invalid chapter")))?;

    let (verse_digits, partial) = match verse_text.strip_suffix(PARTIAL_MARKER) {
        Some(digits) => (digits, true),
        None => (verse_text, false),
    };
    let verse = parse_positive(verse_digits)
        .ok_or_else(|| Error::Parse(format!("label '{label}' has an invalid verse")))?;

    Ok(VerseRef { book: book.to_string(), chapter, verse: Some(verse), partial })
}

/// Split `"4 Love is patient"` into `(4, "Love is patient")`.
///
/// Only the single separating space is consumed; the text is otherwise
/// returned untouched.
pub fn parse_verse_line(line: &str) -> Result<(u32, &str)> {
    let (number, text) = line
        .split_once(' ')
        .ok_or_else(|| Error::Parse(format!("verse line '{line}' has no verse number")))?;
    let number = parse_positive(number)
        .ok_or_else(|| Error::Parse(format!("verse line '{line}' has no verse number")))?;
    Ok((number, text))
}

/// Positive decimal integer with no sign, padding or other characters.
pub(crate) fn parse_positive(text: &str) -> Option<u32> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse::<u32>().ok().filter(|&n| n > 0)
}
