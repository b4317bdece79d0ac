//! Row alignment for split view and verse-text assembly for search hits.
//!
//! Alignment is positional: row `i` holds the `i`-th verse line of every
//! version. Translations that split or merge verses drift apart; that is an
//! accepted approximation, not a verse-for-verse guarantee.

use serde::Serialize;
use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::navigation::Cursor;
use crate::reference::{parse_search_label, parse_verse_line};
use crate::registry::VersionRegistry;
use crate::traits::VersionProvider;
use crate::types::{AlignedRow, Cell, PassageContent, SearchHit};

/// All verse lines of a chapter in heading order, headings dropped.
pub fn flatten(passage: &PassageContent) -> Vec<&str> {
    passage.verse_lines().collect()
}

/// One row per position up to the longest column; short columns pad with
/// [`Cell::Empty`].
pub fn align_versions<S: AsRef<str>>(columns: &[Vec<S>]) -> Vec<AlignedRow> {
    let max_len = columns.iter().map(Vec::len).max().unwrap_or(0);
    (0..max_len)
        .map(|i| AlignedRow {
            cells: columns
                .iter()
                .map(|column| {
                    column
                        .get(i)
                        .map_or(Cell::Empty, |line| Cell::Verse(line.as_ref().to_string()))
                })
                .collect(),
        })
        .collect()
}

/// Fetch `cursor`'s chapter from each named version and align the columns.
///
/// An unknown version or a provider failure fails the whole view.
pub fn split_view<S: AsRef<str>>(
    registry: &VersionRegistry,
    versions: &[S],
    cursor: &Cursor,
) -> Result<Vec<AlignedRow>> {
    let passages = versions
        .iter()
        .map(|name| registry.get(name.as_ref())?.get_passage(&cursor.book, cursor.chapter))
        .collect::<Result<Vec<_>>>()?;
    let columns = passages.iter().map(flatten).collect::<Vec<_>>();
    Ok(align_versions(&columns))
}

/// Verse lines numbered `start..=end` (`end` defaults to `start`).
pub fn verse_range(passage: &PassageContent, start: u32, end: Option<u32>) -> Vec<&str> {
    let end = end.unwrap_or(start);
    passage
        .verse_lines()
        .filter(|line| parse_verse_line(line).is_ok_and(|(n, _)| (start..=end).contains(&n)))
        .collect()
}

/// Search labels mapped to verse text, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchMatches {
    entries: Vec<(String, String)>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl SearchMatches {
    pub fn get(&self, label: &str) -> Option<&str> {
        self.index.get(label).map(|&i| self.entries[i].1.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(label, text)| (label.as_str(), text.as_str()))
    }

    pub fn into_vec(self) -> Vec<(String, String)> {
        self.entries
    }

    /// Later text for an existing label is appended, never overwritten.
    fn append(&mut self, label: &str, text: &str) {
        match self.index.get(label) {
            Some(&i) => self.entries[i].1.push_str(text),
            None => {
                self.index.insert(label.to_string(), self.entries.len());
                self.entries.push((label.to_string(), text.to_string()));
            }
        }
    }
}

/// Resolve each hit to its full verse text through `provider`.
///
/// A hit that cannot be parsed or located is logged and left out; the rest
/// of the batch is unaffected.
pub fn assemble_search_matches<P>(hits: &[SearchHit], provider: &P) -> SearchMatches
where
    P: VersionProvider + ?Sized,
{
    let mut matches = SearchMatches::default();
    for hit in hits {
        match resolve_hit(&hit.label, provider) {
            Ok(texts) => {
                for text in texts {
                    matches.append(&hit.label, &text);
                }
            }
            Err(e) => tracing::debug!(label = %hit.label, error = %e, "skipping search hit"),
        }
    }
    matches
}

fn resolve_hit<P>(label: &str, provider: &P) -> Result<Vec<String>>
where
    P: VersionProvider + ?Sized,
{
    let reference = parse_search_label(label)?;
    let passage = provider.get_passage(&reference.book, reference.chapter)?;
    let texts = passage
        .verse_lines()
        .filter(|line| reference.matches_line(line))
        .filter_map(|line| parse_verse_line(line).ok().map(|(_, text)| text.to_string()))
        .collect::<Vec<_>>();
    if texts.is_empty() {
        return Err(Error::ReferenceNotFound(label.to_string()));
    }
    Ok(texts)
}
