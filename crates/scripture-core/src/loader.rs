//! Loading translations from JSON on disk.
//!
//! Two layouts are understood:
//! - a directory of version files, `{ "name": "KJV", "passages": [PassageContent, ...] }`;
//! - a single bundle, `{ "versions": [...], "data": { version: { book: { "1": ["text", ...] } } } }`,
//!   whose verses carry no numbers and are numbered in order.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::catalog::BookCatalog;
use crate::provider::MemoryVersion;
use crate::reference::parse_positive;
use crate::registry::VersionRegistry;
use crate::types::{Heading, PassageContent};

#[derive(Debug, Clone, Deserialize)]
pub struct VersionFile {
    pub name: String,
    pub passages: Vec<PassageContent>,
}

#[derive(Debug, Deserialize)]
struct Bundle {
    #[serde(default)]
    versions: Vec<String>,
    data: BTreeMap<String, BTreeMap<String, BTreeMap<String, Vec<String>>>>,
}

pub fn load_version_file(path: &Path, catalog: &Arc<BookCatalog>) -> Result<MemoryVersion> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let file: VersionFile =
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?;
    let mut version = MemoryVersion::new(file.name.as_str(), Arc::clone(catalog));
    for passage in file.passages {
        let (book, chapter) = (passage.book.clone(), passage.chapter);
        if let Err(e) = version.insert(passage) {
            tracing::warn!(version = %file.name, %book, chapter, error = %e, "skipping passage");
        }
    }
    tracing::info!(version = %file.name, passages = version.passage_count(), path = %path.display(), "loaded version");
    Ok(version)
}

/// Every `*.json` version file under `dir`, in path order.
pub fn load_versions_dir(dir: &Path, catalog: &Arc<BookCatalog>) -> Result<Vec<MemoryVersion>> {
    list_json_files(dir)
        .iter()
        .map(|path| load_version_file(path, catalog))
        .collect()
}

pub fn load_bundle(path: &Path, catalog: &Arc<BookCatalog>) -> Result<Vec<MemoryVersion>> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let bundle: Bundle =
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?;
    let names = if bundle.versions.is_empty() {
        bundle.data.keys().cloned().collect()
    } else {
        bundle.versions.clone()
    };

    let mut versions = Vec::new();
    for name in names {
        let Some(books) = bundle.data.get(&name) else {
            tracing::warn!(version = %name, "bundle lists a version without data");
            continue;
        };
        let mut version = MemoryVersion::new(name.as_str(), Arc::clone(catalog));
        for (book, chapters) in books {
            for (chapter, texts) in chapters {
                let Some(chapter) = parse_positive(chapter) else {
                    tracing::warn!(version = %name, %book, %chapter, "skipping non-numeric chapter");
                    continue;
                };
                let verses = texts
                    .iter()
                    .enumerate()
                    .map(|(i, text)| format!("{} {}", i + 1, text))
                    .collect();
                let passage = PassageContent {
                    book: book.clone(),
                    chapter,
                    headings: vec![Heading { heading: String::new(), verses }],
                };
                if let Err(e) = version.insert(passage) {
                    tracing::warn!(version = %name, %book, chapter, error = %e, "skipping passage");
                }
            }
        }
        tracing::info!(version = %name, passages = version.passage_count(), "loaded version from bundle");
        versions.push(version);
    }
    Ok(versions)
}

/// Load a directory of version files straight into a registry.
pub fn load_registry(dir: &Path, catalog: &Arc<BookCatalog>) -> Result<VersionRegistry> {
    let mut builder = VersionRegistry::builder();
    for version in load_versions_dir(dir, catalog)? {
        builder = builder.register(version)?;
    }
    Ok(builder.build())
}

fn list_json_files(root: &Path) -> Vec<PathBuf> {
    let mut files = walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path().to_path_buf())
        .filter(|p| p.extension().and_then(|s| s.to_str()) == Some("json"))
        .collect::<Vec<_>>();
    files.sort();
    files
}
