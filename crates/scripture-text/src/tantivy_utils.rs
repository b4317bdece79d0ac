use tantivy::schema::{Field, FacetOptions, IndexRecordOption, Schema, TextFieldIndexing, TextOptions, INDEXED, STORED, STRING};
use tantivy::tokenizer::{LowerCaser, SimpleTokenizer, StopWordFilter, TextAnalyzer};
use tantivy::Index;

pub const VERSE_TOKENIZER: &str = "verse_text";

pub fn build_schema() -> Schema {
	let mut schema_builder = Schema::builder();
	schema_builder.add_text_field("label", STRING | STORED);
	schema_builder.add_text_field("version", STRING | STORED);
	schema_builder.add_text_field("book", STRING | STORED);
	schema_builder.add_u64_field("chapter", INDEXED | STORED);
	schema_builder.add_u64_field("verse", STORED);
	let text_field_indexing = TextFieldIndexing::default().set_tokenizer(VERSE_TOKENIZER).set_index_option(IndexRecordOption::WithFreqsAndPositions);
	let text_options = TextOptions::default().set_indexing_options(text_field_indexing).set_stored();
	schema_builder.add_text_field("text", text_options);
	schema_builder.add_facet_field("category", FacetOptions::default());
	schema_builder.build()
}

pub fn register_tokenizer(index: &Index) {
	let stop_words = vec![
		"a","an","and","are","as","at","be","by","for","from","has","in","is","it","its","of","on","that","the","to","was","will","with","or","but","not","this","these","they","them","their","there","then","than","so","if","when","where","why","how","what","which","who","whom","whose","can","could","should","would","may","might","must","shall","do","does","did","have","had","having",
	];
	let tokenizer = TextAnalyzer::builder(SimpleTokenizer::default())
		.filter(LowerCaser)
		.filter(StopWordFilter::remove(stop_words.into_iter().map(|s| s.to_string())))
		.build();
	index.tokenizers().register(VERSE_TOKENIZER, tokenizer);
}

/// Field handles resolved once per index.
#[derive(Debug, Clone, Copy)]
pub struct VerseFields {
	pub label: Field,
	pub version: Field,
	pub book: Field,
	pub chapter: Field,
	pub verse: Field,
	pub text: Field,
	pub category: Field,
}

impl VerseFields {
	pub fn from_schema(schema: &Schema) -> Result<Self, anyhow::Error> {
		Ok(Self {
			label: schema.get_field("label")?,
			version: schema.get_field("version")?,
			book: schema.get_field("book")?,
			chapter: schema.get_field("chapter")?,
			verse: schema.get_field("verse")?,
			text: schema.get_field("text")?,
			category: schema.get_field("category")?,
		})
	}
}
