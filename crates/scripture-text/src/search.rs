use anyhow::Result;
use std::collections::BTreeSet;
use std::path::Path;
use tantivy::collector::{FacetCollector, TopDocs};
use tantivy::query::{BooleanQuery, Occur, Query, QueryParser, TermQuery};
use tantivy::schema::{Facet, IndexRecordOption, Value};
use tantivy::{Index, IndexReader, TantivyDocument, Term};

use scripture_core::catalog::Testament;
use scripture_core::traits::SearchProvider;
use scripture_core::types::SearchHit;

use crate::tantivy_utils::{register_tokenizer, VerseFields};

/// Ranked verse search restricted to one version at a time.
pub struct VerseSearchEngine {
	index: Index,
	reader: IndexReader,
	fields: VerseFields,
}

impl VerseSearchEngine {
	pub fn open(index_dir: &Path) -> Result<Self, anyhow::Error> {
		Self::from_index(Index::open_in_dir(index_dir)?)
	}

	pub fn from_index(index: Index) -> Result<Self, anyhow::Error> {
		register_tokenizer(&index);
		let reader = index.reader()?;
		let fields = VerseFields::from_schema(&index.schema())?;
		Ok(Self { index, reader, fields })
	}

	fn query_for(&self, query_text: &str, version: &str) -> BooleanQuery {
		let query_parser = QueryParser::for_index(&self.index, vec![self.fields.text]);
		let (text_query, errors) = query_parser.parse_query_lenient(query_text);
		if !errors.is_empty() {
			tracing::debug!(query = %query_text, dropped = errors.len(), "lenient query parse dropped clauses");
		}
		let version_query: Box<dyn Query> = Box::new(TermQuery::new(
			Term::from_field_text(self.fields.version, version),
			IndexRecordOption::Basic,
		));
		BooleanQuery::new(vec![(Occur::Must, text_query), (Occur::Must, version_query)])
	}

	/// Hit counts per book for `query_text` in `version`, largest first.
	pub fn book_counts(&self, query_text: &str, version: &str) -> Result<Vec<(String, u64)>, anyhow::Error> {
		let searcher = self.reader.searcher();
		let query = self.query_for(query_text, version);
		let testaments = [Testament::Old, Testament::New].map(|t| Facet::from_path([t.label()]));
		let mut facet_collector = FacetCollector::for_field("category");
		for testament in &testaments { facet_collector.add_facet(testament.clone()); }
		let facet_counts = searcher.search(&query, &facet_collector)?;
		let mut counts = Vec::new();
		for testament in testaments {
			for (facet, count) in facet_counts.get(testament) {
				if let Some(book) = facet.to_path().last() { counts.push(((*book).to_string(), count)); }
			}
		}
		counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
		Ok(counts)
	}
}

impl SearchProvider for VerseSearchEngine {
	fn versions(&self) -> Vec<String> {
		let searcher = self.reader.searcher();
		let mut versions = BTreeSet::new();
		for segment_reader in searcher.segment_readers() {
			let inverted_index = match segment_reader.inverted_index(self.fields.version) {
				Ok(inverted_index) => inverted_index,
				Err(e) => { tracing::warn!(error = %e, "cannot read version terms"); continue; }
			};
			let mut terms = match inverted_index.terms().stream() {
				Ok(terms) => terms,
				Err(e) => { tracing::warn!(error = %e, "cannot stream version terms"); continue; }
			};
			while terms.advance() { versions.insert(String::from_utf8_lossy(terms.key()).into_owned()); }
		}
		versions.into_iter().collect()
	}

	fn search(&self, query: &str, version: &str, max_results: usize) -> anyhow::Result<Vec<SearchHit>> {
		if max_results == 0 || query.trim().is_empty() { return Ok(Vec::new()); }
		let searcher = self.reader.searcher();
		let query = self.query_for(query, version);
		let top_docs = searcher.search(&query, &TopDocs::with_limit(max_results))?;
		let mut hits = Vec::with_capacity(top_docs.len());
		for (score, doc_address) in top_docs {
			let doc: TantivyDocument = searcher.doc(doc_address)?;
			match doc.get_first(self.fields.label).and_then(|v| v.as_str()) {
				Some(label) => hits.push(SearchHit { label: label.to_string(), score }),
				None => tracing::warn!(?doc_address, "indexed verse has no label"),
			}
		}
		Ok(hits)
	}
}
