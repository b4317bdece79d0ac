use std::path::PathBuf;
use std::sync::Arc;

use scripture_core::alignment::assemble_search_matches;
use scripture_core::loader::load_versions_dir;
use scripture_core::{BookCatalog, MemoryVersion, SearchProvider, VersionProvider};
use scripture_text::{VerseIndexer, VerseSearchEngine};

fn versions_dir() -> PathBuf {
    // crates/scripture-text -> crates -> repo root
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).ancestors().nth(2).unwrap().to_path_buf();
    root.join("test_data/versions")
}

fn load_fixtures() -> Vec<MemoryVersion> {
    let catalog = Arc::new(BookCatalog::canonical());
    load_versions_dir(&versions_dir(), &catalog).expect("fixtures")
}

fn in_memory_engine(versions: &[MemoryVersion]) -> VerseSearchEngine {
    let indexer = VerseIndexer::in_memory().expect("indexer");
    for version in versions {
        let count = indexer.index_version(version).expect("index version");
        assert_eq!(count, 20, "{} fixture verses", version.name());
    }
    VerseSearchEngine::from_index(indexer.index().clone()).expect("engine")
}

#[test]
fn search_is_scoped_to_one_version() {
    let versions = load_fixtures();
    let engine = in_memory_engine(&versions);
    assert_eq!(engine.versions(), vec!["KJV".to_string(), "WEB".to_string()]);

    let kjv = engine.search("charity", "KJV", 10).expect("search");
    assert_eq!(kjv.len(), 1);
    assert_eq!(kjv[0].label, "1 Corinthians 13:4");
    assert!(engine.search("charity", "WEB", 10).expect("search").is_empty());

    let labels: Vec<String> = engine.search("wept", "WEB", 10).expect("search").into_iter().map(|h| h.label).collect();
    assert_eq!(labels, vec!["John 11:35".to_string()]);
}

#[test]
fn results_are_ranked_and_limited() {
    let versions = load_fixtures();
    let engine = in_memory_engine(&versions);
    let hits = engine.search("light", "KJV", 10).expect("search");
    assert_eq!(hits.len(), 3);
    assert!(hits.windows(2).all(|w| w[0].score >= w[1].score));
    assert!(hits.iter().all(|h| h.label.starts_with("Genesis 1:")));

    assert_eq!(engine.search("light", "KJV", 2).expect("search").len(), 2);
    assert!(engine.search("light", "KJV", 0).expect("search").is_empty());
    assert!(engine.search("   ", "KJV", 10).expect("search").is_empty());
}

#[test]
fn malformed_queries_do_not_fail() {
    let versions = load_fixtures();
    let engine = in_memory_engine(&versions);
    let hits = engine.search("shepherd AND (", "KJV", 10).expect("lenient search");
    assert!(hits.len() <= 1);
}

#[test]
fn hits_resolve_to_full_verse_text() {
    let versions = load_fixtures();
    let engine = in_memory_engine(&versions);
    let kjv = versions.iter().find(|v| v.name() == "KJV").expect("kjv");

    let hits = engine.search("shepherd", "KJV", 10).expect("search");
    let matches = assemble_search_matches(&hits, kjv);
    assert_eq!(matches.get("Psalms 23:1"), Some("The LORD is my shepherd; I shall not want."));
}

#[test]
fn book_counts_group_hits_by_book() {
    let versions = load_fixtures();
    let engine = in_memory_engine(&versions);
    let counts = engine.book_counts("Jesus", "KJV").expect("facets");
    assert_eq!(counts, vec![("Revelation".to_string(), 2), ("John".to_string(), 1)]);
}

#[test]
fn on_disk_index_can_be_reopened() {
    let versions = load_fixtures();
    let tmp = tempfile::tempdir().unwrap();
    let index_dir = tmp.path().join("tantivy");
    {
        let indexer = VerseIndexer::new(index_dir.clone()).expect("indexer");
        let total: usize = versions.iter().map(|v| indexer.index_version(v).expect("index")).sum();
        assert_eq!(total, 40);
    }
    let engine = VerseSearchEngine::open(&index_dir).expect("engine");
    let hits = engine.search("shepherd", "WEB", 5).expect("search");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].label, "Psalms 23:1");
}
