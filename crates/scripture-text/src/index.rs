use anyhow::Result;
use std::path::PathBuf;
use tantivy::schema::Facet;
use tantivy::{doc, Index, IndexWriter};

use scripture_core::alignment::flatten;
use scripture_core::reference::{parse_verse_line, VerseRef};
use scripture_core::traits::VersionProvider;

use crate::tantivy_utils::{build_schema, register_tokenizer, VerseFields};

/// Writes one document per verse line of every chapter a provider carries.
pub struct VerseIndexer {
	index: Index,
	fields: VerseFields,
}

impl VerseIndexer {
	/// Create a fresh on-disk index, replacing anything already in `index_dir`.
	pub fn new(index_dir: PathBuf) -> Result<Self, anyhow::Error> {
		let schema = build_schema();
		if index_dir.exists() { std::fs::remove_dir_all(&index_dir)?; }
		std::fs::create_dir_all(&index_dir)?;
		let index = Index::create_in_dir(&index_dir, schema.clone())?;
		register_tokenizer(&index);
		let fields = VerseFields::from_schema(&schema)?;
		Ok(Self { index, fields })
	}

	pub fn in_memory() -> Result<Self, anyhow::Error> {
		let schema = build_schema();
		let index = Index::create_in_ram(schema.clone());
		register_tokenizer(&index);
		let fields = VerseFields::from_schema(&schema)?;
		Ok(Self { index, fields })
	}

	pub fn index(&self) -> &Index { &self.index }

	/// Index every chapter `provider` has, walking its catalog in canonical order.
	/// Returns the number of verses written.
	pub fn index_version(&self, provider: &dyn VersionProvider) -> Result<usize, anyhow::Error> {
		let mut index_writer: IndexWriter = self.index.writer(50_000_000)?;
		let catalog = provider.catalog();
		let version = provider.name().to_string();
		let mut verse_count = 0;
		for book in catalog.iter() {
			let facet = Facet::from_path([catalog.testament(&book.name)?.label(), book.name.as_str()]);
			for chapter in 1..=book.chapter_count {
				if !provider.has_passage(&book.name, chapter) { continue; }
				let passage = provider.get_passage(&book.name, chapter)?;
				for line in flatten(&passage) {
					let (verse, text) = match parse_verse_line(line) {
						Ok(parsed) => parsed,
						Err(e) => { tracing::debug!(%version, book = %book.name, chapter, error = %e, "skipping unnumbered line"); continue; }
					};
					let label = VerseRef::verse(book.name.as_str(), chapter, verse).to_string();
					index_writer.add_document(doc!(
						self.fields.label => label,
						self.fields.version => version.clone(),
						self.fields.book => book.name.clone(),
						self.fields.chapter => u64::from(chapter),
						self.fields.verse => u64::from(verse),
						self.fields.text => text.to_string(),
						self.fields.category => facet.clone(),
					))?;
					verse_count += 1;
				}
			}
		}
		index_writer.commit()?;
		tracing::info!(%version, verses = verse_count, "committed verse index");
		Ok(verse_count)
	}
}
