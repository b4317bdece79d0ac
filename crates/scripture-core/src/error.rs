use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid reference: {book} {chapter}")]
    InvalidReference { book: String, chapter: String },

    #[error("Passage invalid: {book} {chapter}")]
    PassageInvalid { book: String, chapter: u32 },

    #[error("Reference not found: {0}")]
    ReferenceNotFound(String),

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    pub(crate) fn invalid_reference(book: &str, chapter: impl ToString) -> Self {
        Self::InvalidReference { book: book.to_string(), chapter: chapter.to_string() }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
